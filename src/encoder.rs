//! Serialization of decoded manifests back into generic YAML trees.
//!
//! The strict validator always encodes with `omit_empty = false` so that a
//! field the target declares but leaves empty still shows up as a key.

use crate::error::{MfError, Result};
use serde::Serialize;
use serde_yaml::value::TaggedValue;
use serde_yaml::{Mapping, Value};

/// Serialize `value` into a generic YAML tree.
///
/// With `omit_empty` set, null values, empty strings and empty collections
/// are pruned from every mapping. Otherwise the tree is exactly what the
/// type's `Serialize` impl emits.
pub fn to_value<T: Serialize + ?Sized>(value: &T, omit_empty: bool) -> Result<Value> {
    let tree = serde_yaml::to_value(value).map_err(|e| MfError::decode("encode", e))?;
    if omit_empty {
        Ok(prune_empty(tree))
    } else {
        Ok(tree)
    }
}

/// Render a serializable value as a YAML string.
pub fn to_yaml<T: Serialize + ?Sized>(value: &T, omit_empty: bool) -> Result<String> {
    let tree = to_value(value, omit_empty)?;
    serde_yaml::to_string(&tree).map_err(|e| MfError::decode("encode", e))
}

fn prune_empty(value: Value) -> Value {
    match value {
        Value::Mapping(map) => Value::Mapping(
            map.into_iter()
                .filter_map(|(key, value)| {
                    let value = prune_empty(value);
                    (!is_empty(&value)).then_some((key, value))
                })
                .collect::<Mapping>(),
        ),
        Value::Sequence(items) => Value::Sequence(items.into_iter().map(prune_empty).collect()),
        Value::Tagged(tagged) => {
            let TaggedValue { tag, value } = *tagged;
            Value::Tagged(Box::new(TaggedValue {
                tag,
                value: prune_empty(value),
            }))
        }
        other => other,
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Sequence(items) => items.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Serialize, Default)]
    struct Sample {
        name: String,
        labels: BTreeMap<String, String>,
        ports: Vec<u16>,
        parent: Option<String>,
        replicas: u32,
    }

    #[test]
    fn keeps_empty_fields_when_not_omitting() {
        let tree = to_value(&Sample::default(), false).unwrap();
        let map = tree.as_mapping().unwrap();

        for key in ["name", "labels", "ports", "parent", "replicas"] {
            assert!(map.contains_key(key), "missing key {}", key);
        }
    }

    #[test]
    fn prunes_empty_fields_when_omitting() {
        let sample = Sample {
            name: "web".to_string(),
            ..Sample::default()
        };
        let tree = to_value(&sample, true).unwrap();
        let map = tree.as_mapping().unwrap();

        assert!(map.contains_key("name"));
        assert!(map.contains_key("replicas"));
        assert!(!map.contains_key("labels"));
        assert!(!map.contains_key("ports"));
        assert!(!map.contains_key("parent"));
    }

    #[test]
    fn prunes_nested_mappings_that_become_empty() {
        let tree: Value = serde_yaml::from_str("outer:\n  inner:\n    leaf: null\nkeep: 1\n").unwrap();
        let pruned = prune_empty(tree);

        assert_eq!(pruned, serde_yaml::from_str::<Value>("keep: 1").unwrap());
    }

    #[test]
    fn to_yaml_renders_mapping() {
        let sample = Sample {
            name: "web".to_string(),
            replicas: 2,
            ..Sample::default()
        };
        let yaml = to_yaml(&sample, true).unwrap();

        assert_eq!(yaml, "name: web\nreplicas: 2\n");
    }
}
