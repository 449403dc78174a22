//! Container classification and tuple normalization

use serde_json::Value;

use crate::types::ValueKind;

/// Whether `value` can be iterated and is not text.
///
/// Arrays and objects are containers; strings and other scalars are not.
pub fn is_container(value: &Value) -> bool {
    ValueKind::of(value).is_iterable()
}

/// Normalize `value` into an ordered tuple of elements.
///
/// Containers yield their elements in iteration order: array items, or object
/// keys in insertion order. Anything else, strings included, becomes a
/// single-element tuple.
pub fn as_tuple(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.clone(),
        Value::Object(map) => map.keys().cloned().map(Value::String).collect(),
        scalar => vec![scalar.clone()],
    }
}

/// Python-style truthiness of a dynamic value.
///
/// `null`, `false`, zero, and empty strings, arrays and objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_container() {
        assert!(!is_container(&json!("a string is not a container")));
        assert!(is_container(&json!(["a", "list", "is", "a", "container"])));
        assert!(is_container(&json!(["test_list"])));
        assert!(!is_container(&json!("test_str_not_iterable")));
        assert!(!is_container(&json!(10)));
        assert!(is_container(&json!({"k": "v"})));
        assert!(!is_container(&Value::Null));
    }

    #[test]
    fn test_as_tuple() {
        assert_eq!(
            as_tuple(&json!("a string is not a container")),
            vec![json!("a string is not a container")]
        );
        assert_eq!(
            as_tuple(&json!(["a", "list", "is", "a", "container"])),
            vec![json!("a"), json!("list"), json!("is"), json!("a"), json!("container")]
        );
        assert_eq!(as_tuple(&json!(7)), vec![json!(7)]);
        assert_eq!(as_tuple(&json!([])), Vec::<Value>::new());
    }

    #[test]
    fn test_as_tuple_object_yields_keys() {
        let keys = as_tuple(&json!({"b": 1, "a": 2, "c": 3}));
        assert_eq!(keys, vec![json!("b"), json!("a"), json!("c")]);
    }

    #[test]
    fn test_is_truthy() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!([]), json!({})] {
            assert!(!is_truthy(&falsy), "{falsy}");
        }
        for truthy in [json!(true), json!(-1), json!(0.5), json!("0"), json!([0]), json!({"a": null})] {
            assert!(is_truthy(&truthy), "{truthy}");
        }
    }
}
