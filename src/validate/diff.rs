//! Recursive unknown-key diff over generic YAML trees.
//!
//! The left side is what the user wrote, the right side is the decoded
//! target re-serialized. The result mirrors the shape of the left side,
//! pruned to the parts the right side does not account for.

use serde_yaml::{Mapping, Value};
use std::collections::HashMap;

/// Marker recorded when the input is a collection and the target is not the same shape.
pub const TYPE_MISMATCH: &str = "type mismatch";

/// Marker recorded when input and target sequences differ in length.
pub const LENGTH_MISMATCH: &str = "slice length differs";

/// Compute the unknown-key diff of `left` against `right`.
///
/// Returns `None` when every key in `left` is present in `right`.
///
/// - Mappings: a key missing from `right` is copied verbatim from `left`;
///   a key present on both sides is recursed into.
/// - Sequences: a length difference flags the whole sequence; otherwise
///   elements are compared pairwise by position.
/// - Scalars on the left never produce a diff. Type errors on known keys
///   belong to the decode step.
pub fn unknown_keys(left: &Value, right: &Value) -> Option<Value> {
    match untag(left) {
        Value::Mapping(input) => {
            let Value::Mapping(target) = untag(right) else {
                return Some(Value::from(TYPE_MISMATCH));
            };
            mapping_diff(input, target)
        }
        Value::Sequence(input) => {
            let Value::Sequence(target) = untag(right) else {
                return Some(Value::from(TYPE_MISMATCH));
            };

            if input.len() != target.len() {
                return Some(Value::from(LENGTH_MISMATCH));
            }

            let unknown: Vec<Value> = input
                .iter()
                .zip(target)
                .filter_map(|(item, target_item)| unknown_keys(item, target_item))
                .collect();

            (!unknown.is_empty()).then_some(Value::Sequence(unknown))
        }
        _ => None,
    }
}

fn mapping_diff(input: &Mapping, target: &Mapping) -> Option<Value> {
    let known: HashMap<String, &Value> = target
        .iter()
        .map(|(key, value)| (key_text(key), value))
        .collect();

    let mut unknown = Mapping::new();
    for (key, value) in input {
        match known.get(&key_text(key)) {
            None => {
                unknown.insert(key.clone(), value.clone());
            }
            Some(target_value) => {
                if let Some(nested) = unknown_keys(value, target_value) {
                    unknown.insert(key.clone(), nested);
                }
            }
        }
    }

    (!unknown.is_empty()).then_some(Value::Mapping(unknown))
}

fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

/// Text form of a mapping key, so `8080` and `"8080"` name the same field.
fn key_text(key: &Value) -> String {
    match untag(key) {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
