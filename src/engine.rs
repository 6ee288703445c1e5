use jsonschema::{Draft, Resource};
use serde_json::Value;

use crate::error::HarnessError;

/// One error record from a failed validation: where in the instance the
/// constraint failed (JSON Pointer syntax) and the engine's message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub instance_path: String,
    pub message: String,
}

/// Result of running a compiled validator against one instance document.
///
/// `errors` is in engine-native order: the first-encountered keyword failure
/// comes first. The harness only ever asserts against `errors[0]`.
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub errors: Vec<ErrorRecord>,
}

/// A validator compiled against one root schema plus its dependencies.
pub trait Validator: std::fmt::Debug {
    fn validate(&self, instance: &Value) -> ValidationOutcome;
}

/// Compiles validators from schema documents.
///
/// Implementations must use a fresh engine instance per call: registered
/// schema identifiers from one compilation must not be visible to the next,
/// so unrelated compilations in the same process cannot leak into each
/// other.
pub trait ValidationEngine {
    /// Compile `schema` with `deps` registered for `$ref` resolution.
    ///
    /// An empty `deps` slice compiles the schema directly with no
    /// registration step. A schema set the engine rejects (unresolved
    /// `$ref`, malformed keywords) is a [`HarnessError::Compilation`].
    fn compile(&self, schema: &Value, deps: &[Value]) -> Result<Box<dyn Validator>, HarnessError>;
}

/// [`ValidationEngine`] backed by the `jsonschema` crate, evaluating the
/// draft 2020-12 vocabulary.
///
/// Dependencies are registered as resources under their `$id` URIs before
/// the root schema is built, the crate's equivalent of ajv's `addSchema`.
/// A dependency without a string `$id` cannot be addressed by `$ref` at all
/// and is rejected as a compilation error.
#[derive(Debug, Default)]
pub struct Draft2020Engine;

impl ValidationEngine for Draft2020Engine {
    fn compile(&self, schema: &Value, deps: &[Value]) -> Result<Box<dyn Validator>, HarnessError> {
        let root_name = schema_label(schema);
        let mut options = jsonschema::options().with_draft(Draft::Draft202012);

        for dep in deps {
            let id = dep
                .get("$id")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    HarnessError::compilation(
                        root_name.as_str(),
                        format!("dependency {} has no $id", schema_label(dep)),
                    )
                })?
                .to_string();
            let resource = Resource::from_contents(dep.clone());
            options = options.with_resource(id, resource);
        }

        let compiled = options
            .build(schema)
            .map_err(|e| HarnessError::compilation(root_name.as_str(), e.to_string()))?;

        Ok(Box::new(CompiledSchema { inner: compiled }))
    }
}

#[derive(Debug)]
struct CompiledSchema {
    inner: jsonschema::Validator,
}

impl Validator for CompiledSchema {
    fn validate(&self, instance: &Value) -> ValidationOutcome {
        let errors: Vec<ErrorRecord> = self
            .inner
            .iter_errors(instance)
            .map(|err| ErrorRecord {
                instance_path: err.instance_path().to_string(),
                message: err.to_string(),
            })
            .collect();

        ValidationOutcome {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Best-effort label for log and error context: `$id`, then `title`, then a
/// placeholder.
fn schema_label(schema: &Value) -> String {
    schema
        .get("$id")
        .or_else(|| schema.get("title"))
        .and_then(Value::as_str)
        .unwrap_or("<anonymous schema>")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compile_without_dependencies_skips_registration() {
        let schema = json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "type": "object",
            "required": ["source", "target"]
        });

        let validator = Draft2020Engine.compile(&schema, &[]).unwrap();
        let outcome = validator.validate(&json!({"source": "a", "target": "b"}));
        assert!(outcome.valid);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn first_error_record_carries_path_and_message() {
        let schema = json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "type": "object",
            "properties": {"id": {"type": "string"}}
        });

        let validator = Draft2020Engine.compile(&schema, &[]).unwrap();
        let outcome = validator.validate(&json!({"id": 7}));
        assert!(!outcome.valid);
        assert_eq!(outcome.errors[0].instance_path, "/id");
        assert!(outcome.errors[0].message.contains("is not of type"));
    }

    #[test]
    fn dependency_without_id_is_a_compilation_error() {
        let schema = json!({"type": "object"});
        let dep = json!({"type": "string"});

        let err = Draft2020Engine.compile(&schema, &[dep]).unwrap_err();
        assert!(matches!(err, HarnessError::Compilation { .. }));
    }

    #[test]
    fn unresolved_ref_is_a_compilation_error() {
        let schema = json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "$id": "https://example.org/root.json",
            "properties": {"child": {"$ref": "missing.json"}}
        });

        let err = Draft2020Engine.compile(&schema, &[]).unwrap_err();
        assert!(matches!(err, HarnessError::Compilation { .. }));
    }

    #[test]
    fn registered_dependency_resolves_by_id() {
        let dep = json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "$id": "https://example.org/leaf.json",
            "type": "string"
        });
        let schema = json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "$id": "https://example.org/root.json",
            "type": "object",
            "properties": {"leaf": {"$ref": "leaf.json"}}
        });

        let validator = Draft2020Engine.compile(&schema, &[dep]).unwrap();
        assert!(validator.validate(&json!({"leaf": "ok"})).valid);
        assert!(!validator.validate(&json!({"leaf": 1})).valid);
    }

    #[test]
    fn registrations_do_not_leak_across_compilations() {
        let dep = json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "$id": "https://example.org/leaf.json",
            "type": "string"
        });
        let referencing = json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "$id": "https://example.org/root.json",
            "properties": {"leaf": {"$ref": "leaf.json"}}
        });

        let engine = Draft2020Engine;
        engine.compile(&referencing, &[dep]).unwrap();

        // Same schema, same process, no registration this time: the prior
        // call must not have left leaf.json behind.
        let err = engine.compile(&referencing, &[]).unwrap_err();
        assert!(matches!(err, HarnessError::Compilation { .. }));
    }
}
