//! Structural helpers over [`Value`] and [`Map`].
//!
//! [`deep_equal`] and [`deep_clone`] recurse over the value tree one variant
//! at a time. There is no cycle detection; owned values cannot form cycles.

use crate::value::{Map, Value};

/// Convert a mapping into its `(key, value)` entries, in key order.
///
/// ```rust
/// use tacklebox_core::{Map, Value, objects::object_to_pairs};
///
/// let mut map = Map::new();
/// map.insert("b".into(), Value::from(2));
/// map.insert("a".into(), Value::from(1));
///
/// let pairs = object_to_pairs(&map);
/// assert_eq!(pairs[0], ("a".to_string(), Value::from(1)));
/// ```
pub fn object_to_pairs(obj: &Map) -> Vec<(String, Value)> {
    obj.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

/// Build a mapping from `(key, value)` entries. Later duplicates overwrite earlier ones.
pub fn pairs_to_object<I>(pairs: I) -> Map
where
    I: IntoIterator<Item = (String, Value)>,
{
    pairs.into_iter().collect()
}

/// Structural equality between two values.
///
/// - Primitives compare with strict equality: `NaN` never equals itself and
///   `0.0` equals `-0.0`.
/// - Sequences must have the same length and pairwise-equal elements, in order.
/// - Mappings must have the same key set and pairwise-equal values; key order
///   is irrelevant.
/// - Values of different kinds are never equal, so a sequence never equals a
///   mapping.
///
/// ```rust
/// use tacklebox_core::{Value, objects::deep_equal};
/// use serde_json::json;
///
/// let a = Value::from(json!({"x": [1, {"y": null}]}));
/// let b = Value::from(json!({"x": [1, {"y": null}]}));
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));
/// ```
#[allow(clippy::float_cmp)]
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Sequence(xs), Value::Sequence(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| deep_equal(x, y))
        },
        (Value::Mapping(xs), Value::Mapping(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| deep_equal(x, y)))
        },
        _ => false,
    }
}

/// Recursively copy a value.
///
/// The result is [`deep_equal`] to the input (unless it contains `NaN`) and
/// shares nothing with it, so mutating the copy at any depth never shows
/// through the original.
pub fn deep_clone(value: &Value) -> Value {
    match value {
        Value::Sequence(items) => Value::Sequence(items.iter().map(deep_clone).collect()),
        Value::Mapping(map) => Value::Mapping(
            map.iter()
                .map(|(key, v)| (key.clone(), deep_clone(v)))
                .collect(),
        ),
        primitive => primitive.clone(),
    }
}

/// Shallow-merge mappings left to right into a new mapping.
///
/// Keys from later mappings replace those from earlier ones; nested mappings
/// are replaced wholesale, not merged.
///
/// ```rust
/// use tacklebox_core::{Value, objects::merge_objects};
/// use serde_json::json;
///
/// let defaults = Value::from(json!({"retries": 3, "verbose": false}));
/// let overrides = Value::from(json!({"verbose": true}));
///
/// let merged = merge_objects(&[
///     defaults.as_mapping().unwrap(),
///     overrides.as_mapping().unwrap(),
/// ]);
/// assert_eq!(merged["verbose"], Value::Bool(true));
/// assert_eq!(merged["retries"], Value::from(3));
/// ```
pub fn merge_objects(objects: &[&Map]) -> Map {
    let mut merged = Map::new();
    for obj in objects {
        merged.extend(obj.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    merged
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    #[test]
    fn test_deep_equal_primitives() {
        assert!(deep_equal(&Value::Null, &Value::Null));
        assert!(deep_equal(&Value::from(1), &Value::from(1.0)));
        assert!(deep_equal(&Value::Number(0.0), &Value::Number(-0.0)));
        assert!(!deep_equal(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));
        assert!(!deep_equal(&Value::from("1"), &Value::from(1)));
        assert!(!deep_equal(&Value::Null, &Value::Bool(false)));
    }

    #[test]
    fn test_deep_equal_sequences_are_order_sensitive() {
        assert!(deep_equal(&v(json!([1, [2, 3]])), &v(json!([1, [2, 3]]))));
        assert!(!deep_equal(&v(json!([1, 2])), &v(json!([2, 1]))));
        assert!(!deep_equal(&v(json!([1, 2])), &v(json!([1, 2, 3]))));
    }

    #[test]
    fn test_deep_equal_mappings_ignore_key_order() {
        let a = v(json!({"a": 1, "b": {"c": [true]}}));
        let b = v(json!({"b": {"c": [true]}, "a": 1}));
        assert!(deep_equal(&a, &b));

        let missing = v(json!({"a": 1}));
        assert!(!deep_equal(&a, &missing));

        let renamed = v(json!({"a": 1, "z": {"c": [true]}}));
        assert!(!deep_equal(&a, &renamed));
    }

    #[test]
    fn test_sequence_never_equals_mapping() {
        let seq = v(json!(["x"]));
        let map = v(json!({"0": "x"}));
        assert!(!deep_equal(&seq, &map));
        assert!(!deep_equal(&v(json!([])), &v(json!({}))));
    }

    #[test]
    fn test_deep_clone_is_independent() {
        let original = v(json!({"list": [1, {"inner": "a"}], "flag": true}));
        let mut copy = deep_clone(&original);
        assert!(deep_equal(&original, &copy));

        // When: mutating the copy at depth
        let list = copy
            .as_mapping_mut()
            .unwrap()
            .get_mut("list")
            .unwrap()
            .as_sequence_mut()
            .unwrap();
        list[1]
            .as_mapping_mut()
            .unwrap()
            .insert("inner".into(), Value::from("b"));
        list.push(Value::Null);

        // Then: the original is untouched
        assert_eq!(original, v(json!({"list": [1, {"inner": "a"}], "flag": true})));
        assert!(!deep_equal(&original, &copy));
    }

    #[test]
    fn test_pairs_round_trip_and_duplicate_keys() {
        let map = v(json!({"a": 1, "b": [2]})).as_mapping().unwrap().clone();
        let pairs = object_to_pairs(&map);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs_to_object(pairs), map);

        let dupes = vec![
            ("k".to_string(), Value::from(1)),
            ("k".to_string(), Value::from(2)),
        ];
        assert_eq!(pairs_to_object(dupes)["k"], Value::from(2));
    }

    #[test]
    fn test_merge_objects_later_wins_and_is_shallow() {
        let a = v(json!({"x": 1, "nested": {"keep": true}}));
        let b = v(json!({"y": 2, "nested": {"other": 1}}));
        let merged = merge_objects(&[a.as_mapping().unwrap(), b.as_mapping().unwrap()]);

        assert_eq!(Value::from(merged), v(json!({"x": 1, "y": 2, "nested": {"other": 1}})));
        assert!(merge_objects(&[]).is_empty());
    }

    fn arb_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            (-1.0e6..1.0e6f64).prop_map(Value::Number),
            "[a-z]{0,6}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 48, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Sequence),
                prop::collection::btree_map("[a-z]{1,4}", inner, 0..6).prop_map(Value::Mapping),
            ]
        })
    }

    proptest! {
        #[test]
        fn test_clone_is_deep_equal(value in arb_value()) {
            let copy = deep_clone(&value);
            prop_assert!(deep_equal(&value, &copy));
            prop_assert!(deep_equal(&copy, &value));
        }

        #[test]
        fn test_deep_equal_agrees_with_partial_eq(a in arb_value(), b in arb_value()) {
            prop_assert_eq!(deep_equal(&a, &b), a == b);
        }
    }
}
