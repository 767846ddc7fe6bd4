use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// The kind of data held by a [`Value`].
///
/// A discriminant-only mirror of the `Value` variants, used for error
/// reporting and introspection without touching payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Empty,
    Boolean,
    Integer,
    Number,
    Text,
    Texts,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Empty => "empty",
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Number => "number",
            ValueKind::Text => "text",
            ValueKind::Texts => "text sequence",
        };
        write!(f, "{name}")
    }
}

/// An immutable piece of typed data.
///
/// A `Value` is exactly one of six states: the empty value (holds no data,
/// distinct from `false`, `0`, or `""`), a boolean, an integer, a
/// double-precision number, a string, or an ordered sequence of strings.
/// All interpretation goes through explicit, type-checked accessors; there
/// is no coercion between kinds.
///
/// Equality and hashing are structural. Numbers compare and hash by their
/// bit pattern, so `Eq` and `Hash` stay lawful and consistent with each
/// other. Sequences compare element-wise and order-sensitively.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Value {
    /// The value that holds no data.
    Empty,
    Boolean(bool),
    Integer(i64),
    Number(f64),
    Text(String),
    Texts(Vec<String>),
}

impl Value {
    /// Create a string-sequence value from one or more strings.
    pub fn texts<I, S>(strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::Texts(strings.into_iter().map(Into::into).collect())
    }

    /// Build a `Value` from an untyped JSON payload.
    ///
    /// `null` maps to [`Value::Empty`], booleans, integers, floats, and
    /// strings map to their respective kinds, and arrays of strings map to
    /// [`Value::Texts`]. Anything else is rejected:
    ///
    /// - an array containing `null` fails with [`ValueError::NullElement`]
    /// - objects, nested arrays, and non-string array elements fail with
    ///   [`ValueError::UnsupportedPayload`]
    ///
    /// Non-finite numbers cannot appear here: JSON carries no NaN or
    /// infinity, and [`Value::to_json`] renders them as `null`.
    pub fn from_json(payload: serde_json::Value) -> Result<Self, ValueError> {
        match payload {
            serde_json::Value::Null => Ok(Value::Empty),
            serde_json::Value::Bool(b) => Ok(Value::Boolean(b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Integer(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Value::Number(f))
                } else {
                    Err(ValueError::UnsupportedPayload(n.to_string()))
                }
            }
            serde_json::Value::String(s) => Ok(Value::Text(s)),
            serde_json::Value::Array(items) => {
                let mut strings = Vec::with_capacity(items.len());
                for (index, item) in items.into_iter().enumerate() {
                    match item {
                        serde_json::Value::String(s) => strings.push(s),
                        serde_json::Value::Null => {
                            return Err(ValueError::NullElement { index });
                        }
                        other => {
                            return Err(ValueError::UnsupportedPayload(other.to_string()));
                        }
                    }
                }
                Ok(Value::Texts(strings))
            }
            other => Err(ValueError::UnsupportedPayload(other.to_string())),
        }
    }

    /// Render this value as an untyped JSON payload. Inverse of
    /// [`Value::from_json`] for every value with a finite number payload.
    ///
    /// JSON has no representation for non-finite numbers, so a NaN or
    /// infinite `Number` renders as `null` — round-tripping such a value
    /// through [`Value::from_json`] yields [`Value::Empty`].
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Empty => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Integer(i) => serde_json::Value::from(*i),
            Value::Number(f) => {
                serde_json::Number::from_f64(*f).map_or(serde_json::Value::Null, serde_json::Value::Number)
            }
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Texts(strings) => {
                serde_json::Value::Array(strings.iter().cloned().map(serde_json::Value::String).collect())
            }
        }
    }

    /// The kind of data held by this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Empty => ValueKind::Empty,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Integer(_) => ValueKind::Integer,
            Value::Number(_) => ValueKind::Number,
            Value::Text(_) => ValueKind::Text,
            Value::Texts(_) => ValueKind::Texts,
        }
    }

    /// Returns `true` if this value holds no data.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    fn mismatch(&self, expected: ValueKind) -> ValueError {
        match self {
            Value::Empty => ValueError::Empty,
            _ => ValueError::TypeMismatch {
                expected,
                actual: self.kind(),
            },
        }
    }

    /// The boolean held by this value.
    ///
    /// Fails if the value is empty or holds any other kind.
    pub fn as_boolean(&self) -> Result<bool, ValueError> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(other.mismatch(ValueKind::Boolean)),
        }
    }

    /// The integer held by this value.
    ///
    /// Fails if the value is empty or holds any other kind. A `Number` is
    /// never coerced, even when it has no fractional part.
    pub fn as_integer(&self) -> Result<i64, ValueError> {
        match self {
            Value::Integer(i) => Ok(*i),
            other => Err(other.mismatch(ValueKind::Integer)),
        }
    }

    /// The number held by this value.
    ///
    /// Fails if the value is empty or holds any other kind, including
    /// `Integer`.
    pub fn as_number(&self) -> Result<f64, ValueError> {
        match self {
            Value::Number(f) => Ok(*f),
            other => Err(other.mismatch(ValueKind::Number)),
        }
    }

    /// The string held by this value.
    ///
    /// Fails if the value is empty or holds any other kind. Other kinds are
    /// never stringified.
    pub fn as_text(&self) -> Result<&str, ValueError> {
        match self {
            Value::Text(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::Text)),
        }
    }

    /// The string sequence held by this value.
    ///
    /// Fails if the value is empty or holds any other kind. A scalar `Text`
    /// is not a one-element sequence.
    pub fn as_texts(&self) -> Result<&[String], ValueError> {
        match self {
            Value::Texts(strings) => Ok(strings),
            other => Err(other.mismatch(ValueKind::Texts)),
        }
    }

    /// The boolean held by this value, or `default` if the value is empty.
    ///
    /// Being empty is the only forgiven condition: any other kind still
    /// fails with a type mismatch.
    pub fn boolean_or(&self, default: bool) -> Result<bool, ValueError> {
        match self {
            Value::Empty => Ok(default),
            other => other.as_boolean(),
        }
    }

    /// The integer held by this value, or `default` if the value is empty.
    pub fn integer_or(&self, default: i64) -> Result<i64, ValueError> {
        match self {
            Value::Empty => Ok(default),
            other => other.as_integer(),
        }
    }

    /// The number held by this value, or `default` if the value is empty.
    pub fn number_or(&self, default: f64) -> Result<f64, ValueError> {
        match self {
            Value::Empty => Ok(default),
            other => other.as_number(),
        }
    }

    /// The string held by this value, or `default` if the value is empty.
    pub fn text_or<'a>(&'a self, default: &'a str) -> Result<&'a str, ValueError> {
        match self {
            Value::Empty => Ok(default),
            other => other.as_text(),
        }
    }

    /// The string sequence held by this value, or `default` if the value is
    /// empty.
    pub fn texts_or<'a>(&'a self, default: &'a [String]) -> Result<&'a [String], ValueError> {
        match self {
            Value::Empty => Ok(default),
            other => other.as_texts(),
        }
    }
}

impl From<bool> for Value {
    fn from(payload: bool) -> Self {
        Value::Boolean(payload)
    }
}

impl From<i64> for Value {
    fn from(payload: i64) -> Self {
        Value::Integer(payload)
    }
}

impl From<i32> for Value {
    fn from(payload: i32) -> Self {
        Value::Integer(payload.into())
    }
}

impl From<f64> for Value {
    fn from(payload: f64) -> Self {
        Value::Number(payload)
    }
}

impl From<&str> for Value {
    fn from(payload: &str) -> Self {
        Value::Text(payload.to_string())
    }
}

impl From<String> for Value {
    fn from(payload: String) -> Self {
        Value::Text(payload)
    }
}

impl From<Vec<String>> for Value {
    fn from(payload: Vec<String>) -> Self {
        Value::Texts(payload)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Empty, Value::Empty) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a.to_bits() == b.to_bits(),
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Texts(a), Value::Texts(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Empty => {}
            Value::Boolean(b) => b.hash(state),
            Value::Integer(i) => i.hash(state),
            Value::Number(f) => f.to_bits().hash(state),
            Value::Text(s) => s.hash(state),
            Value::Texts(strings) => strings.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => write!(f, "<empty>"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::Texts(strings) => {
                write!(f, "[")?;
                for (i, s) in strings.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{s:?}")?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(value: &Value) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn boolean_or_is_false_when_value_is_empty() {
        assert_eq!(Value::Empty.boolean_or(false), Ok(false));
    }

    #[test]
    fn boolean_or_fails_when_value_is_not_boolean() {
        let err = Value::from(1).boolean_or(false).unwrap_err();
        assert_eq!(
            err,
            ValueError::TypeMismatch {
                expected: ValueKind::Boolean,
                actual: ValueKind::Integer,
            }
        );
    }

    #[test]
    fn integer_or_is_zero_when_value_is_empty() {
        assert_eq!(Value::Empty.integer_or(0), Ok(0));
    }

    #[test]
    fn integer_or_fails_when_value_is_number() {
        assert!(Value::from(1.0).integer_or(0).is_err());
    }

    #[test]
    fn number_or_is_zero_when_value_is_empty() {
        assert_eq!(Value::Empty.number_or(0.0), Ok(0.0));
    }

    #[test]
    fn number_or_fails_when_value_is_text() {
        assert!(Value::from("Test").number_or(0.0).is_err());
    }

    #[test]
    fn text_or_is_empty_string_when_value_is_empty() {
        assert_eq!(Value::Empty.text_or(""), Ok(""));
    }

    #[test]
    fn text_or_fails_when_value_is_boolean() {
        assert!(Value::from(true).text_or("").is_err());
    }

    #[test]
    fn texts_or_falls_back_when_value_is_empty() {
        let default = vec!["a".to_string()];
        assert_eq!(Value::Empty.texts_or(&default), Ok(default.as_slice()));
    }

    #[test]
    fn strict_accessor_on_empty_reports_empty() {
        assert_eq!(Value::Empty.as_boolean(), Err(ValueError::Empty));
        assert_eq!(Value::Empty.as_texts(), Err(ValueError::Empty));
    }

    #[test]
    fn strict_accessors_return_payloads() {
        assert_eq!(Value::from(true).as_boolean(), Ok(true));
        assert_eq!(Value::from(42).as_integer(), Ok(42));
        assert_eq!(Value::from(2.5).as_number(), Ok(2.5));
        assert_eq!(Value::from("hi").as_text(), Ok("hi"));
        let texts = Value::texts(["a", "b"]);
        assert_eq!(texts.as_texts().unwrap(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn no_numeric_coercion_between_integer_and_number() {
        assert!(Value::from(1).as_number().is_err());
        assert!(Value::from(1.0).as_integer().is_err());
    }

    #[test]
    fn scalar_text_is_not_a_sequence() {
        assert!(Value::from("one").as_texts().is_err());
        assert!(Value::texts(["one"]).as_text().is_err());
    }

    #[test]
    fn empty_equals_only_empty() {
        assert_eq!(Value::Empty, Value::Empty);
        assert_ne!(Value::Empty, Value::from(""));
        assert_ne!(Value::Empty, Value::from(0));
        assert_ne!(Value::Empty, Value::from(false));
    }

    #[test]
    fn equal_scalars_are_equal_and_hash_identically() {
        let a = Value::from(7);
        let b = Value::from(7);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let x = Value::from(1.5);
        let y = Value::from(1.5);
        assert_eq!(x, y);
        assert_eq!(hash_of(&x), hash_of(&y));
    }

    #[test]
    fn sequences_compare_order_sensitively() {
        let ab = Value::texts(["a", "b"]);
        let ab2 = Value::texts(["a", "b"]);
        let ba = Value::texts(["b", "a"]);
        assert_eq!(ab, ab2);
        assert_eq!(hash_of(&ab), hash_of(&ab2));
        assert_ne!(ab, ba);
    }

    #[test]
    fn from_json_dispatches_on_payload_kind() {
        assert_eq!(Value::from_json(serde_json::json!(null)).unwrap(), Value::Empty);
        assert_eq!(Value::from_json(serde_json::json!(true)).unwrap(), Value::from(true));
        assert_eq!(Value::from_json(serde_json::json!(3)).unwrap(), Value::from(3));
        assert_eq!(Value::from_json(serde_json::json!(3.5)).unwrap(), Value::from(3.5));
        assert_eq!(Value::from_json(serde_json::json!("x")).unwrap(), Value::from("x"));
        assert_eq!(
            Value::from_json(serde_json::json!(["x", "y"])).unwrap(),
            Value::texts(["x", "y"])
        );
    }

    #[test]
    fn from_json_rejects_unsupported_payloads() {
        let err = Value::from_json(serde_json::json!({"a": 1})).unwrap_err();
        assert!(matches!(err, ValueError::UnsupportedPayload(_)));

        let err = Value::from_json(serde_json::json!([1, 2])).unwrap_err();
        assert!(matches!(err, ValueError::UnsupportedPayload(_)));
    }

    #[test]
    fn from_json_rejects_null_sequence_elements() {
        let err = Value::from_json(serde_json::json!(["a", null, "c"])).unwrap_err();
        assert_eq!(err, ValueError::NullElement { index: 1 });
    }

    #[test]
    fn json_roundtrip() {
        for value in [
            Value::Empty,
            Value::from(true),
            Value::from(-9),
            Value::from(0.25),
            Value::from("hello"),
            Value::texts(["a", "b", "c"]),
        ] {
            assert_eq!(Value::from_json(value.to_json()).unwrap(), value);
        }
    }

    #[test]
    fn non_finite_numbers_render_as_null() {
        for n in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let value = Value::from(n);
            assert_eq!(value.to_json(), serde_json::Value::Null);
            assert_eq!(Value::from_json(value.to_json()).unwrap(), Value::Empty);
        }
    }

    #[test]
    fn serde_roundtrip() {
        let value = Value::texts(["a", "b"]);
        let json = serde_json::to_string(&value).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, parsed);
    }

    #[test]
    fn kind_display_names() {
        assert_eq!(Value::Empty.kind().to_string(), "empty");
        assert_eq!(Value::from(1).kind().to_string(), "integer");
        assert_eq!(Value::texts(["a"]).kind().to_string(), "text sequence");
    }
}
