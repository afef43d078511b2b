//! Type guards over untyped CMS JSON.
//!
//! Every accessor returns `None`/empty on a shape mismatch instead of
//! failing, so one mistyped field never discards the rest of a record.

use super::FaqEntry;
use serde_json::{Map, Value};

/// Non-blank string at `key`, trimmed.
pub fn text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// First non-blank string among `keys`.
pub fn text_any(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| text(obj, key))
}

/// String or number at `key`, rendered as text (prices are often numeric).
pub fn scalar(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::Number(n) => Some(n.to_string()),
        Value::String(_) => text(obj, key),
        _ => None,
    }
}

/// Object at `key`.
pub fn object<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    obj.get(key).and_then(Value::as_object)
}

/// Non-blank strings of the array at `key`; other elements are skipped.
///
/// Elements may also be objects carrying a `url` or `src`.
pub fn strings(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    let Some(items) = obj.get(key).and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s.trim()).filter(|s| !s.is_empty()).map(str::to_string),
            Value::Object(map) => text_any(map, &["url", "src"]),
            _ => None,
        })
        .collect()
}

/// FAQ entries of the array at `key`, dropping incomplete ones.
pub fn faqs(obj: &Map<String, Value>, key: &str) -> Vec<FaqEntry> {
    let Some(items) = obj.get(key).and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|item| {
            let question = text_any(item, &["question", "q"])?;
            let answer = text_any(item, &["answer", "a"])?;
            FaqEntry::new(&question, &answer)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_text_guards() {
        let obj = map(json!({ "a": "  hi ", "b": "   ", "c": 3, "d": null }));
        assert_eq!(text(&obj, "a").as_deref(), Some("hi"));
        assert_eq!(text(&obj, "b"), None);
        assert_eq!(text(&obj, "c"), None);
        assert_eq!(text(&obj, "d"), None);
        assert_eq!(text(&obj, "missing"), None);
        assert_eq!(text_any(&obj, &["b", "a"]).as_deref(), Some("hi"));
    }

    #[test]
    fn test_scalar_accepts_numbers() {
        let obj = map(json!({ "price": 29.5, "label": "$9", "flag": true }));
        assert_eq!(scalar(&obj, "price").as_deref(), Some("29.5"));
        assert_eq!(scalar(&obj, "label").as_deref(), Some("$9"));
        assert_eq!(scalar(&obj, "flag"), None);
    }

    #[test]
    fn test_strings_skip_bad_elements() {
        let obj = map(json!({
            "images": ["/a.png", "", 4, { "url": "/b.png" }, { "alt": "x" }],
            "notArray": "/c.png"
        }));
        assert_eq!(strings(&obj, "images"), ["/a.png", "/b.png"]);
        assert!(strings(&obj, "notArray").is_empty());
    }

    #[test]
    fn test_faqs_drop_incomplete_entries() {
        let obj = map(json!({
            "faqs": [
                { "question": "Is it free?", "answer": "Yes." },
                { "question": "  ", "answer": "No question" },
                { "question": "No answer" },
                "not an object",
                { "q": "Short form?", "a": "Works too." }
            ]
        }));
        let faqs = faqs(&obj, "faqs");
        assert_eq!(faqs.len(), 2);
        assert_eq!(faqs[1].question, "Short form?");

        let obj = map(json!({ "faqs": { "question": "wrong shape" } }));
        assert!(super::faqs(&obj, "faqs").is_empty());
    }
}
