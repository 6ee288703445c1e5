//! The bundled schema must be self-contained: it compiles with no
//! registration step and agrees with the multi-file set on both sides of
//! the corpus.

use std::path::PathBuf;

use serde_json::Value;

use jaal_conformance::bundle::bundle;
use jaal_conformance::engine::{Draft2020Engine, ValidationEngine};

fn schema_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("schemas")
}

fn fixture(rel: &str) -> Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(rel);
    let content = std::fs::read_to_string(&path).unwrap();
    serde_json::from_str(&content).unwrap()
}

/// Walk the document and fail on any `$ref` that still points at a file.
fn assert_no_external_refs(value: &Value, at: &str) {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(target)) = map.get("$ref") {
                assert!(
                    target.starts_with('#'),
                    "external $ref '{target}' left at {at}"
                );
            }
            for (key, child) in map {
                assert_no_external_refs(child, &format!("{at}/{key}"));
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                assert_no_external_refs(child, &format!("{at}/{i}"));
            }
        }
        _ => {}
    }
}

#[tokio::test(flavor = "current_thread")]
async fn bundled_root_is_self_contained() {
    let bundled = bundle(&schema_dir(), "jaal").await.unwrap();

    assert_no_external_refs(&bundled, "");

    let defs = bundled["$defs"].as_object().unwrap();
    for name in [
        "definitions",
        "edge",
        "event",
        "graph",
        "initialState",
        "keyvalue",
        "matrix",
        "metadata",
        "node",
        "style",
    ] {
        assert!(defs.contains_key(name), "missing embedded schema {name}");
        assert!(
            defs[name].get("$id").is_none(),
            "embedded schema {name} kept its $id"
        );
    }
}

#[tokio::test(flavor = "current_thread")]
async fn bundled_root_compiles_without_dependencies() {
    let bundled = bundle(&schema_dir(), "jaal").await.unwrap();
    let validator = Draft2020Engine.compile(&bundled, &[]).unwrap();

    let valid = fixture("test/valid/jaal-minimal.json");
    assert!(validator.validate(&valid).valid);

    let invalid = fixture("test/invalid/jaal-missing-animation.json");
    assert!(!validator.validate(&invalid).valid);
}

#[tokio::test(flavor = "current_thread")]
async fn bundling_a_leaf_schema_embeds_nothing() {
    let bundled = bundle(&schema_dir(), "edge").await.unwrap();
    assert!(bundled.get("$defs").is_none());

    let validator = Draft2020Engine.compile(&bundled, &[]).unwrap();
    assert!(validator.validate(&fixture("test/valid/edge-basic.json")).valid);
}
