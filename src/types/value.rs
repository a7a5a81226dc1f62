use std::fmt;

use serde::Deserialize;

/// Supported identity-attribute and candidate value types.
///
/// Closed set on purpose: the operator checks in rule evaluation are explicit
/// variant matches, so cross-type comparisons (`Int(5)` vs `Str("5")`) are
/// visibly false rather than coerced. Deserializes from any JSON scalar;
/// `null`, arrays, and objects have no representation here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// A boolean value.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A UTF-8 string.
    Str(String),
}

impl AttrValue {
    /// Convert a JSON scalar into an `AttrValue`.
    ///
    /// Returns `None` for `null`, arrays, and objects. Whole JSON numbers
    /// become `Int`; anything outside the `i64` range falls back to `Float`.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Option<AttrValue> {
        match value {
            serde_json::Value::Bool(b) => Some(AttrValue::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(AttrValue::Int(i))
                } else {
                    n.as_f64().map(AttrValue::Float)
                }
            }
            serde_json::Value::String(s) => Some(AttrValue::Str(s.clone())),
            _ => None,
        }
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Str(v.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Str(v)
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(v) => write!(f, "{v}"),
            AttrValue::Int(v) => write!(f, "{v}"),
            AttrValue::Float(v) => write!(f, "{v}"),
            AttrValue::Str(v) => write!(f, "\"{v}\""),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn from_i64() {
        assert_eq!(AttrValue::from(42_i64), AttrValue::Int(42));
    }

    #[test]
    fn from_f64() {
        assert_eq!(AttrValue::from(3.14_f64), AttrValue::Float(3.14));
    }

    #[test]
    fn from_bool() {
        assert_eq!(AttrValue::from(true), AttrValue::Bool(true));
    }

    #[test]
    fn from_str() {
        assert_eq!(AttrValue::from("hello"), AttrValue::Str("hello".to_owned()));
    }

    #[test]
    fn from_string() {
        assert_eq!(
            AttrValue::from("owned".to_owned()),
            AttrValue::Str("owned".to_owned())
        );
    }

    #[test]
    fn display() {
        assert_eq!(AttrValue::Int(42).to_string(), "42");
        assert_eq!(AttrValue::Float(3.14).to_string(), "3.14");
        assert_eq!(AttrValue::Bool(true).to_string(), "true");
        assert_eq!(AttrValue::Str("hello".into()).to_string(), "\"hello\"");
    }

    #[test]
    fn deserialize_json_scalars() {
        assert_eq!(
            serde_json::from_value::<AttrValue>(json!(true)).unwrap(),
            AttrValue::Bool(true)
        );
        assert_eq!(
            serde_json::from_value::<AttrValue>(json!(21)).unwrap(),
            AttrValue::Int(21)
        );
        assert_eq!(
            serde_json::from_value::<AttrValue>(json!(2.5)).unwrap(),
            AttrValue::Float(2.5)
        );
        assert_eq!(
            serde_json::from_value::<AttrValue>(json!("India")).unwrap(),
            AttrValue::Str("India".to_owned())
        );
    }

    #[test]
    fn deserialize_rejects_non_scalars() {
        assert!(serde_json::from_value::<AttrValue>(json!(null)).is_err());
        assert!(serde_json::from_value::<AttrValue>(json!([1, 2])).is_err());
        assert!(serde_json::from_value::<AttrValue>(json!({"a": 1})).is_err());
    }

    #[test]
    fn from_json_scalars() {
        assert_eq!(AttrValue::from_json(&json!(7)), Some(AttrValue::Int(7)));
        assert_eq!(
            AttrValue::from_json(&json!(0.5)),
            Some(AttrValue::Float(0.5))
        );
        assert_eq!(
            AttrValue::from_json(&json!(false)),
            Some(AttrValue::Bool(false))
        );
        assert_eq!(
            AttrValue::from_json(&json!("x")),
            Some(AttrValue::Str("x".to_owned()))
        );
    }

    #[test]
    fn from_json_non_scalars_are_none() {
        assert_eq!(AttrValue::from_json(&json!(null)), None);
        assert_eq!(AttrValue::from_json(&json!([1])), None);
        assert_eq!(AttrValue::from_json(&json!({"k": "v"})), None);
    }

    #[test]
    fn from_json_huge_number_falls_back_to_float() {
        let v = AttrValue::from_json(&json!(1.0e300)).unwrap();
        assert_eq!(v, AttrValue::Float(1.0e300));
    }
}
