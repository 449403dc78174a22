//! Recursive, right-biased mapping merge
//!
//! Inputs are owned JSON trees, so they are always finite and acyclic.

use serde_json::{Map, Value};

/// Deep-merge `right` into a copy of `left`.
///
/// Keys present in only one mapping are copied. When both mappings hold an
/// object under the same key the two objects are merged recursively;
/// otherwise the value from `right` wins. Neither input is modified.
pub fn merge_dicts(left: &Map<String, Value>, right: &Map<String, Value>) -> Map<String, Value> {
    merge_at_depth(left, right, 0)
}

fn merge_at_depth(
    left: &Map<String, Value>,
    right: &Map<String, Value>,
    depth: usize,
) -> Map<String, Value> {
    let mut merged = left.clone();

    for (key, right_value) in right {
        let value = match (left.get(key), right_value) {
            (Some(Value::Object(l)), Value::Object(r)) => {
                tracing::trace!(key = key.as_str(), depth, "merging nested mapping");
                Value::Object(merge_at_depth(l, r, depth + 1))
            }
            _ => right_value.clone(),
        };
        merged.insert(key.clone(), value);
    }

    merged
}

/// Merge two dynamic values with [`merge_dicts`] semantics.
///
/// If either side is not an object the right value wins.
pub fn merge_values(left: &Value, right: &Value) -> Value {
    match (left, right) {
        (Value::Object(l), Value::Object(r)) => Value::Object(merge_dicts(l, r)),
        _ => right.clone(),
    }
}
