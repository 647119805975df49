//! Value model shared by the registry, the argument set and the dispatcher.
//!
//! Every alias group is bound to exactly one [`ValueType`] when it is
//! registered. Resolved values are stored as a [`Value`], a closed sum type
//! over the four supported kinds, so the registry never needs reflection or
//! per-type parallel tables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Type an alias group is bound to.
///
/// The binding is decided at registration and never inferred from input.
///
/// # Examples
///
/// ```
/// use flagset_core::{Value, ValueType};
///
/// assert_eq!(ValueType::Integer.coerce("42"), Some(Value::Int(42)));
/// assert_eq!(ValueType::Integer.coerce("forty-two"), None);
/// assert_eq!(ValueType::Boolean.coerce(""), Some(Value::Bool(true)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Signed 64-bit integer.
    Integer,
    /// 64-bit floating point number.
    Float,
    /// Arbitrary string, taken verbatim.
    String,
    /// Boolean switch; satisfied by mere presence.
    Boolean,
}

impl ValueType {
    /// Converts a raw command-line value into a [`Value`] of this type.
    ///
    /// Numeric types return `None` when `raw` does not parse. Strings always
    /// succeed. Booleans always succeed as well: `"false"` yields `false`
    /// and any other text (including the empty string) yields `true`.
    pub fn coerce(self, raw: &str) -> Option<Value> {
        match self {
            ValueType::Integer => raw.parse().ok().map(Value::Int),
            ValueType::Float => raw.parse().ok().map(Value::Float),
            ValueType::String => Some(Value::Str(raw.to_string())),
            ValueType::Boolean => Some(Value::Bool(raw != "false")),
        }
    }

    /// Lowercase name used in diagnostics and help output.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Integer => "integer",
            ValueType::Float => "float",
            ValueType::String => "string",
            ValueType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved flag value.
///
/// # Examples
///
/// ```
/// use flagset_core::{Value, ValueType};
///
/// let v = Value::from("hello");
/// assert_eq!(v.value_type(), ValueType::String);
/// assert_eq!(v.as_str(), Some("hello"));
/// assert_eq!(v.as_int(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
}

impl Value {
    /// Returns the [`ValueType`] this value belongs to.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Int(_) => ValueType::Integer,
            Value::Float(_) => ValueType::Float,
            Value::Str(_) => ValueType::String,
            Value::Bool(_) => ValueType::Boolean,
        }
    }

    /// The integer, if this is a [`Value::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// The float, if this is a [`Value::Float`]. Integers are not widened.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// The text, if this is a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }

    /// The flag, if this is a [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Str(v) => f.write_str(v),
            Value::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}
