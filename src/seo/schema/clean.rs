//! Generic pruning of empty JSON values.

use serde_json::Value;

/// Strip nulls and blank strings, bottom-up.
///
/// Arrays and objects left empty after pruning collapse too, so the
/// parent drops them. Returns `None` when nothing survives. Numbers and
/// booleans (including `0` and `false`) are kept.
pub fn clean(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::Array(items) => {
            let items: Vec<Value> = items.into_iter().filter_map(clean).collect();
            (!items.is_empty()).then_some(Value::Array(items))
        }
        Value::Object(map) => {
            let map: serde_json::Map<String, Value> = map
                .into_iter()
                .filter_map(|(key, value)| clean(value).map(|value| (key, value)))
                .collect();
            (!map.is_empty()).then_some(Value::Object(map))
        }
        other => Some(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert_eq!(clean(Value::Null), None);
        assert_eq!(clean(json!("  \t")), None);
        assert_eq!(clean(json!(" x ")), Some(json!(" x ")));
        assert_eq!(clean(json!(0)), Some(json!(0)));
        assert_eq!(clean(json!(false)), Some(json!(false)));
    }

    #[test]
    fn test_nested_collapse() {
        let input = json!({
            "name": "BiblioKit",
            "logo": "",
            "contactPoint": { "email": null, "telephone": " " },
            "sameAs": [null, "", { "url": "" }],
            "address": { "nested": { "deeper": [] } },
            "rating": 0
        });
        assert_eq!(clean(input), Some(json!({ "name": "BiblioKit", "rating": 0 })));
    }

    #[test]
    fn test_fully_empty_collapses() {
        assert_eq!(clean(json!({ "a": null, "b": [{}] })), None);
        assert_eq!(clean(json!([])), None);
    }

    #[test]
    fn test_key_order_preserved() {
        let cleaned = clean(json!({ "z": 1, "a": null, "m": 2, "b": 3 })).unwrap();
        let keys: Vec<_> = cleaned.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["z", "m", "b"]);
    }
}
