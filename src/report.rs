use std::fmt;

/// Outcome of checking one fixture against its expected validity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    Pass,
    /// Human-readable diagnostic, not a structured code.
    Fail(String),
}

/// Running totals for one suite execution.
///
/// A single tally is threaded through every runner invocation of the suite;
/// nothing resets between schema/validity pairs. Pairs aborted by a
/// discovery or compilation error contribute zero tests and are counted
/// separately so the log can mention them.
#[derive(Debug, Clone, Default)]
pub struct SuiteTally {
    passed: u32,
    failed: u32,
    aborted_pairs: u32,
}

impl SuiteTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: &TestResult) {
        match result {
            TestResult::Pass => self.passed += 1,
            TestResult::Fail(_) => self.failed += 1,
        }
    }

    pub fn record_aborted_pair(&mut self) {
        self.aborted_pairs += 1;
    }

    pub fn summary(&self) -> (u32, u32) {
        (self.passed, self.failed)
    }

    pub fn aborted_pairs(&self) -> u32 {
        self.aborted_pairs
    }
}

impl fmt::Display for SuiteTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} passed, {} failed", self.passed, self.failed)?;
        if self.aborted_pairs > 0 {
            write!(f, " ({} pairs aborted)", self.aborted_pairs)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleaved_recording_accumulates() {
        let mut tally = SuiteTally::new();
        tally.record(&TestResult::Pass);
        tally.record(&TestResult::Fail("bad".into()));
        tally.record(&TestResult::Pass);
        tally.record_aborted_pair();
        tally.record(&TestResult::Pass);

        assert_eq!(tally.summary(), (3, 1));
        assert_eq!(tally.aborted_pairs(), 1);
    }

    #[test]
    fn display_mentions_aborts_only_when_present() {
        let mut tally = SuiteTally::new();
        tally.record(&TestResult::Pass);
        assert_eq!(tally.to_string(), "1 passed, 0 failed");

        tally.record_aborted_pair();
        assert_eq!(tally.to_string(), "1 passed, 0 failed (1 pairs aborted)");
    }
}
