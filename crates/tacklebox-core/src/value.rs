//! JSON-like dynamic values.
//!
//! [`Value`] is the closed set of shapes the object helpers recurse over:
//! null, booleans, numbers, strings, sequences and string-keyed mappings.
//! Numbers are IEEE-754 doubles so that `NaN` and signed zero behave the way
//! untyped data from a script or a JSON document does.
//!
//! ```rust
//! use tacklebox_core::{Map, Value};
//!
//! let mut user = Map::new();
//! user.insert("name".to_string(), Value::from("Ada"));
//! user.insert("tags".to_string(), Value::from(vec![Value::from("admin")]));
//!
//! let value = Value::from(user);
//! assert!(value.is_mapping());
//! assert_eq!(value.to_json()["name"], "Ada");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// String-keyed mapping used by [`Value::Mapping`]. Keys iterate in sorted order.
pub type Map = BTreeMap<String, Value>;

/// A dynamically typed, arbitrarily nested value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent value.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Double-precision number, including `NaN` and infinities.
    Number(f64),
    /// UTF-8 string.
    String(String),
    /// Ordered sequence of values.
    Sequence(Vec<Value>),
    /// String-keyed mapping of values.
    Mapping(Map),
}

impl Value {
    /// Short name of the variant, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }

    /// Whether this value is [`Value::Sequence`].
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Whether this value is [`Value::Mapping`].
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    /// Truthiness as understood by scripting languages.
    ///
    /// `Null`, `false`, `0`, `-0`, `NaN` and the empty string are falsy.
    /// Every sequence and mapping is truthy, including empty ones.
    ///
    /// ```rust
    /// use tacklebox_core::Value;
    ///
    /// assert!(!Value::Number(f64::NAN).is_truthy());
    /// assert!(Value::Sequence(vec![]).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Sequence(_) | Self::Mapping(_) => true,
        }
    }

    /// Borrow the inner mapping, if any.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Map> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Borrow the inner sequence, if any.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Mutably borrow the inner mapping, if any.
    pub const fn as_mapping_mut(&mut self) -> Option<&mut Map> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Mutably borrow the inner sequence, if any.
    pub const fn as_sequence_mut(&mut self) -> Option<&mut Vec<Self>> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Convert into a [`serde_json::Value`].
    ///
    /// Non-finite numbers have no JSON representation and become `null`.
    /// Integral numbers within the `i64` range are emitted as integers.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Number(n) => number_to_json(*n),
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::Sequence(items) => {
                serde_json::Value::Array(items.iter().map(Self::to_json).collect())
            },
            Self::Mapping(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn number_to_json(n: f64) -> serde_json::Value {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        return serde_json::Value::from(n as i64);
    }
    serde_json::Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Self::from).collect())
            },
            serde_json::Value::Object(map) => {
                Self::Mapping(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            },
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        value.to_json()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::Sequence(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Self::Mapping(map)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness_matches_script_semantics() {
        let falsy = [
            Value::Null,
            Value::Bool(false),
            Value::Number(0.0),
            Value::Number(-0.0),
            Value::Number(f64::NAN),
            Value::from(""),
        ];
        for value in &falsy {
            assert!(!value.is_truthy(), "{value:?} should be falsy");
        }

        let truthy = [
            Value::Bool(true),
            Value::Number(-1.0),
            Value::Number(f64::INFINITY),
            Value::from("0"),
            Value::Sequence(vec![]),
            Value::Mapping(Map::new()),
        ];
        for value in &truthy {
            assert!(value.is_truthy(), "{value:?} should be truthy");
        }
    }

    #[test]
    fn test_json_round_trip_keeps_structure() {
        let json = json!({"a": [1, 2.5, null], "b": {"c": true, "d": "x"}});
        let value = Value::from(json.clone());

        assert!(value.is_mapping());
        assert_eq!(value.to_json(), json);
    }

    #[test]
    fn test_non_finite_numbers_become_json_null() {
        assert_eq!(Value::Number(f64::NAN).to_json(), serde_json::Value::Null);
        assert_eq!(
            Value::Number(f64::NEG_INFINITY).to_json(),
            serde_json::Value::Null
        );
        assert_eq!(Value::Number(3.0).to_json(), json!(3));
        assert_eq!(Value::Number(0.5).to_json(), json!(0.5));
    }

    #[test]
    fn test_serde_untagged_representation() {
        let value: Value = serde_json::from_str(r#"{"n": 1, "s": "two", "l": [true]}"#).unwrap();
        let map = value.as_mapping().unwrap();

        assert_eq!(map["n"], Value::Number(1.0));
        assert_eq!(map["s"], Value::from("two"));
        assert_eq!(map["l"], Value::Sequence(vec![Value::Bool(true)]));

        let text = serde_json::to_string(&Value::Sequence(vec![Value::Null, Value::from(2)])).unwrap();
        assert_eq!(text, "[null,2.0]");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Null.kind(), "null");
        assert_eq!(Value::from(vec![]).kind(), "sequence");
        assert_eq!(Value::from(Map::new()).kind(), "mapping");
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }
}
