use std::path::PathBuf;

/// Harness configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub spec_root: PathBuf,
}

impl HarnessConfig {
    /// Load configuration from environment.
    ///
    /// - `JAAL_SPEC_ROOT` (optional) - directory holding `schemas/` and
    ///   `test/`; defaults to the current working directory
    pub fn from_env() -> Result<Self, String> {
        let spec_root = match std::env::var("JAAL_SPEC_ROOT") {
            Ok(val) => PathBuf::from(val),
            Err(_) => std::env::current_dir()
                .map_err(|e| format!("cannot determine current directory: {e}"))?,
        };

        if !spec_root.is_dir() {
            return Err(format!(
                "JAAL_SPEC_ROOT is not a directory: {}",
                spec_root.display()
            ));
        }

        Ok(Self { spec_root })
    }

    /// Configuration rooted at an explicit directory, bypassing the
    /// environment. Used by tests running against throwaway corpora.
    pub fn at_root(spec_root: impl Into<PathBuf>) -> Self {
        Self {
            spec_root: spec_root.into(),
        }
    }

    /// Directory holding the schema documents (`schemas/<name>.json`).
    pub fn schema_dir(&self) -> PathBuf {
        self.spec_root.join("schemas")
    }

    /// Directory holding the fixture corpora (`test/valid`, `test/invalid`).
    pub fn test_dir(&self) -> PathBuf {
        self.spec_root.join("test")
    }
}
