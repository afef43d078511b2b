//! Invariant checks over resolved metadata.

use super::render::json_ld_payloads;
use super::schema::identity_key;
use super::SeoMetadata;
use crate::config::LimitsConfig;
use crate::utils::text::utf16_len;
use rustc_hash::FxHashSet;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    TitleTooLong { len: usize, max: usize },
    DescriptionTooLong { len: usize, max: usize },
    MissingCanonical,
    DuplicateNode(String),
    DanglingReference(String),
    InvalidJsonLd(String),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TitleTooLong { len, max } => write!(f, "title is {len} units (max {max})"),
            Self::DescriptionTooLong { len, max } => {
                write!(f, "description is {len} units (max {max})")
            }
            Self::MissingCanonical => write!(f, "no canonical URL"),
            Self::DuplicateNode(key) => write!(f, "duplicate node `{key}`"),
            Self::DanglingReference(id) => write!(f, "reference to missing node `{id}`"),
            Self::InvalidJsonLd(reason) => write!(f, "invalid JSON-LD: {reason}"),
        }
    }
}

/// Every invariant `meta` breaks, in check order.
pub fn audit(meta: &SeoMetadata, limits: &LimitsConfig) -> Vec<Violation> {
    let mut found = Vec::new();

    let len = utf16_len(&meta.title);
    if len > limits.title {
        found.push(Violation::TitleTooLong { len, max: limits.title });
    }
    let len = utf16_len(&meta.description);
    if len > limits.description {
        found.push(Violation::DescriptionTooLong {
            len,
            max: limits.description,
        });
    }
    if meta.canonical.as_deref().is_none_or(str::is_empty) {
        found.push(Violation::MissingCanonical);
    }

    let mut keys = FxHashSet::default();
    for node in &meta.structured_data {
        let key = identity_key(node);
        if !keys.insert(key.clone()) {
            found.push(Violation::DuplicateNode(key.clone()));
        }
        if node.get("@type").is_none() {
            found.push(Violation::InvalidJsonLd(format!("node `{key}` has no @type")));
        }
    }

    let mut defined = FxHashSet::default();
    let mut referenced = Vec::new();
    for node in &meta.structured_data {
        collect_ids(node, &mut defined, &mut referenced);
    }
    for id in referenced {
        if !defined.contains(id) {
            found.push(Violation::DanglingReference(id.to_string()));
        }
    }

    match json_ld_payloads(meta) {
        Ok(payloads) => {
            for payload in payloads {
                if let Err(e) = serde_json::from_str::<Value>(&payload) {
                    found.push(Violation::InvalidJsonLd(e.to_string()));
                }
            }
        }
        Err(e) => found.push(Violation::InvalidJsonLd(e.to_string())),
    }

    found
}

/// A `{ "@id": … }` object with no other keys is a reference; any other
/// object carrying `@id` defines that node.
fn collect_ids<'v>(value: &'v Value, defined: &mut FxHashSet<&'v str>, referenced: &mut Vec<&'v str>) {
    match value {
        Value::Object(map) => {
            if let Some(id) = map.get("@id").and_then(Value::as_str) {
                if map.len() == 1 {
                    referenced.push(id);
                } else {
                    defined.insert(id);
                }
            }
            for child in map.values() {
                collect_ids(child, defined, referenced);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_ids(item, defined, referenced);
            }
        }
        _ => {}
    }
}
