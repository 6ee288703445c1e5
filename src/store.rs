use std::path::PathBuf;

use serde_json::Value;

use crate::error::HarnessError;

/// Loads schema documents by logical name from the `schemas/` directory.
///
/// One document per name (`schemas/<name>.json`), read on demand. Loads are
/// idempotent: the same name always yields structurally identical content,
/// so no caching is performed.
#[derive(Debug, Clone)]
pub struct SchemaStore {
    schema_dir: PathBuf,
}

impl SchemaStore {
    pub fn new(schema_dir: impl Into<PathBuf>) -> Self {
        Self {
            schema_dir: schema_dir.into(),
        }
    }

    /// Load the schema document named `name`.
    ///
    /// A missing file or unparsable JSON is a [`HarnessError::Discovery`]
    /// naming the schema, never an empty or default document.
    pub fn load(&self, name: &str) -> Result<Value, HarnessError> {
        let path = self.schema_dir.join(format!("{name}.json"));
        let content = std::fs::read_to_string(&path).map_err(|e| {
            HarnessError::discovery(name, format!("cannot read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&content)
            .map_err(|e| HarnessError::discovery(name, format!("invalid JSON: {e}")))
    }

    /// Resolve an ordered list of declared dependency names to their
    /// documents.
    ///
    /// Order is preserved, nothing is deduplicated, and no transitive
    /// dependencies are discovered: callers declare the complete flat set a
    /// root schema needs. The first unresolvable name aborts the expansion.
    pub fn expand(&self, names: &[&str]) -> Result<Vec<Value>, HarnessError> {
        names.iter().map(|name| self.load(name)).collect()
    }
}
