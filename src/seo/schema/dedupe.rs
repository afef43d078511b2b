//! Top-level graph deduplication.

use rustc_hash::FxHashSet;
use serde_json::Value;

/// Identity key: `@id` when present, else `{@type}::{name ?? url ?? ""}`.
pub fn identity_key(node: &Value) -> String {
    if let Some(id) = node.get("@id").and_then(Value::as_str) {
        return id.to_string();
    }

    let ty = match node.get("@type") {
        Some(Value::String(ty)) => ty.clone(),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(","),
        _ => String::new(),
    };
    let label = ["name", "url"]
        .iter()
        .find_map(|key| node.get(*key).and_then(Value::as_str))
        .unwrap_or_default();

    format!("{ty}::{label}")
}

/// Drop later entries whose identity key was already seen.
///
/// First occurrence wins and order is preserved. Nested nodes are not
/// inspected.
pub fn dedupe(entries: Vec<Value>) -> Vec<Value> {
    let mut seen = FxHashSet::default();
    entries
        .into_iter()
        .filter(|entry| seen.insert(identity_key(entry)))
        .collect()
}
