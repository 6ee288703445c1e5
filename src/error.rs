use thiserror::Error;

/// Error that aborts the current schema/validity pair.
///
/// Both variants are fatal only to the pair being run: the suite logs them
/// and moves on to the next pair. Per-fixture outcomes (a fixture that
/// validates when it should not, or fails with the wrong error) are
/// [`crate::report::TestResult::Fail`] values, not errors.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Missing schema file, missing declared dependency, or a fixture that
    /// does not parse as JSON.
    #[error("discovery failed for '{subject}': {reason}")]
    Discovery { subject: String, reason: String },

    /// The schema set was rejected by the validation engine itself, e.g. an
    /// unresolved `$ref` or contradictory keyword usage.
    #[error("schema '{schema}' failed to compile: {reason}")]
    Compilation { schema: String, reason: String },
}

impl HarnessError {
    pub fn discovery(subject: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Discovery {
            subject: subject.into(),
            reason: reason.into(),
        }
    }

    pub fn compilation(schema: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Compilation {
            schema: schema.into(),
            reason: reason.into(),
        }
    }
}
