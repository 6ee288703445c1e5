use serde_json::Value;

use crate::engine::{ErrorRecord, ValidationOutcome};
use crate::fixture::{FailureExpectation, Validity};
use crate::report::TestResult;

/// Decide pass/fail for one fixture.
///
/// | expected | engine says | rule |
/// |---|---|---|
/// | valid    | valid   | pass |
/// | valid    | invalid | fail, carrying every error record |
/// | invalid  | valid   | fail: validated but should not |
/// | invalid  | invalid | pass only if the first error matches the fixture's embedded expectation |
///
/// The last row compares both the instance path and the message by exact
/// string equality. No partial credit and no normalization: a matching
/// location with a mismatched message is a full failure, and vice versa.
pub fn check(fixture: &Value, validity: Validity, outcome: &ValidationOutcome) -> TestResult {
    match (validity, outcome.valid) {
        (Validity::Valid, true) => TestResult::Pass,
        (Validity::Valid, false) => TestResult::Fail(format!(
            "expected valid, engine reported: {}",
            format_errors(&outcome.errors)
        )),
        (Validity::Invalid, true) => {
            TestResult::Fail("fixture passed validation but should not".into())
        }
        (Validity::Invalid, false) => check_expected_failure(fixture, outcome),
    }
}

fn check_expected_failure(fixture: &Value, outcome: &ValidationOutcome) -> TestResult {
    let expectation = match FailureExpectation::from_fixture(fixture) {
        Some(e) => e,
        None => {
            return TestResult::Fail(
                "invalid fixture carries no errorInstancePath/errorMessage fields".into(),
            )
        }
    };

    let first = match outcome.errors.first() {
        Some(f) => f,
        None => {
            return TestResult::Fail("engine reported invalid without any error records".into())
        }
    };

    if first.instance_path == expectation.instance_path && first.message == expectation.message {
        TestResult::Pass
    } else {
        TestResult::Fail(format!(
            "expected ('{}', '{}'), found ('{}', '{}')",
            expectation.instance_path, expectation.message, first.instance_path, first.message
        ))
    }
}

fn format_errors(errors: &[ErrorRecord]) -> String {
    errors
        .iter()
        .map(|e| {
            if e.instance_path.is_empty() {
                format!("(root): {}", e.message)
            } else {
                format!("{}: {}", e.instance_path, e.message)
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}
