use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use crate::error::HarnessError;

/// Expected outcome of a fixture, declared by the directory it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
}

impl Validity {
    /// Subdirectory of `test/` holding fixtures of this class.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Failure expectation embedded in an expected-invalid fixture.
///
/// The two reserved fields live at the top level of the same document that
/// is passed to the validator; they are not stripped before validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FailureExpectation {
    /// JSON Pointer to where the failure must occur, e.g. `/nodes/0/id`.
    #[serde(rename = "errorInstancePath")]
    pub instance_path: String,
    /// Exact message text the engine must report for the first error.
    #[serde(rename = "errorMessage")]
    pub message: String,
}

impl FailureExpectation {
    /// Extract the expectation fields from a fixture document, if both are
    /// present as strings.
    pub fn from_fixture(fixture: &Value) -> Option<Self> {
        serde_json::from_value(fixture.clone()).ok()
    }
}

/// Discovers fixture documents for a schema name by filename prefix.
#[derive(Debug, Clone)]
pub struct FixtureLoader {
    test_dir: PathBuf,
}

impl FixtureLoader {
    pub fn new(test_dir: impl Into<PathBuf>) -> Self {
        Self {
            test_dir: test_dir.into(),
        }
    }

    /// Enumerate fixtures for `name` under `test/<validity>/`.
    ///
    /// A file is a fixture for `name` when its filename starts with `name`,
    /// case-sensitive, with no separator required after the prefix: root
    /// `node` also picks up `nodeExtra-01.json`. Entries come back in
    /// directory-listing order, each parsed as JSON. A fixture that does not
    /// parse is a [`HarnessError::Discovery`]: a corpus authoring error, not
    /// a validation outcome.
    pub fn discover(
        &self,
        name: &str,
        validity: Validity,
    ) -> Result<Vec<(String, Value)>, HarnessError> {
        let dir = self.test_dir.join(validity.dir_name());
        let entries = std::fs::read_dir(&dir).map_err(|e| {
            HarnessError::discovery(name, format!("cannot read {}: {e}", dir.display()))
        })?;

        let mut fixtures = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                HarnessError::discovery(name, format!("error listing {}: {e}", dir.display()))
            })?;
            let file_name = entry.file_name().to_string_lossy().to_string();
            if !file_name.starts_with(name) {
                continue;
            }

            let content = std::fs::read_to_string(entry.path()).map_err(|e| {
                HarnessError::discovery(file_name.as_str(), format!("cannot read fixture: {e}"))
            })?;
            let doc: Value = serde_json::from_str(&content).map_err(|e| {
                HarnessError::discovery(
                    file_name.as_str(),
                    format!("fixture is not valid JSON: {e}"),
                )
            })?;
            fixtures.push((file_name, doc));
        }

        Ok(fixtures)
    }
}
