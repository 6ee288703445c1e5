//! Schema bundling: merge the multi-file JAAL schema set into one
//! self-contained document.
//!
//! Each auxiliary schema a root transitively references lands under
//! `$defs/<name>`, and every cross-file `$ref` is rewritten to the matching
//! internal pointer. Rewriting (rather than inlining) keeps the mutually
//! recursive graph/node/keyvalue schemas representable. The result compiles
//! with no registration step and accepts the same documents as the
//! multi-file set.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::HarnessError;

/// Bundle the schema named `root` and everything it references from
/// `schema_dir` into one document.
pub async fn bundle(schema_dir: &Path, root: &str) -> Result<Value, HarnessError> {
    let mut root_schema = load(schema_dir, root).await?;

    // Transitive closure over <name>.json references, breadth-first.
    let mut embedded: BTreeMap<String, Value> = BTreeMap::new();
    let mut queue = Vec::new();
    collect_refs(&root_schema, &mut queue);
    while let Some(name) = queue.pop() {
        if name == root || embedded.contains_key(&name) {
            continue;
        }
        let schema = load(schema_dir, &name).await?;
        collect_refs(&schema, &mut queue);
        embedded.insert(name, schema);
    }

    rewrite_refs(&mut root_schema);

    if embedded.is_empty() {
        return Ok(root_schema);
    }

    let defs: Map<String, Value> = embedded
        .into_iter()
        .map(|(name, mut schema)| {
            // Embedded subschemas must not carry their own base URI or
            // dialect marker once they live inside the bundled document.
            if let Some(obj) = schema.as_object_mut() {
                obj.remove("$id");
                obj.remove("$schema");
            }
            rewrite_refs(&mut schema);
            (name, schema)
        })
        .collect();

    match root_schema.as_object_mut() {
        Some(obj) => {
            obj.insert("$defs".to_string(), Value::Object(defs));
        }
        None => {
            return Err(HarnessError::compilation(
                root,
                "root schema is not a JSON object",
            ))
        }
    }

    Ok(root_schema)
}

async fn load(schema_dir: &Path, name: &str) -> Result<Value, HarnessError> {
    let path = schema_dir.join(format!("{name}.json"));
    let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
        HarnessError::discovery(name, format!("cannot read {}: {e}", path.display()))
    })?;
    serde_json::from_str(&content)
        .map_err(|e| HarnessError::discovery(name, format!("invalid JSON: {e}")))
}

/// Collect the stems of all `<name>.json` references in `value`.
fn collect_refs(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(target)) = map.get("$ref") {
                if let Some((stem, _)) = split_external(target) {
                    out.push(stem.to_string());
                }
            }
            for child in map.values() {
                collect_refs(child, out);
            }
        }
        Value::Array(items) => {
            for child in items {
                collect_refs(child, out);
            }
        }
        _ => {}
    }
}

/// Rewrite every external `$ref` in place to an internal `#/$defs/<name>`
/// pointer. Internal references are left untouched.
fn rewrite_refs(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(target)) = map.get_mut("$ref") {
                if let Some((stem, fragment)) = split_external(target) {
                    *target = match fragment {
                        Some(pointer) => format!("#/$defs/{stem}{pointer}"),
                        None => format!("#/$defs/{stem}"),
                    };
                }
            }
            for child in map.values_mut() {
                rewrite_refs(child);
            }
        }
        Value::Array(items) => {
            for child in items {
                rewrite_refs(child);
            }
        }
        _ => {}
    }
}

/// Split an external reference like `node.json` or `node.json#/foo` into
/// its stem and optional fragment pointer. Returns `None` for internal
/// (`#...`) references and anything that is not a `.json` file reference.
fn split_external(target: &str) -> Option<(&str, Option<&str>)> {
    if target.starts_with('#') {
        return None;
    }
    let (file, fragment) = match target.split_once('#') {
        Some((file, fragment)) => (file, Some(fragment)),
        None => (target, None),
    };
    let stem = file.strip_suffix(".json")?;
    Some((stem, fragment))
}
