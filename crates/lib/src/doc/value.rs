//! Value types for loosely-typed documents.
//!
//! This module provides the [`Value`] enum that represents everything a
//! document field can hold, and the [`Scalar`] enum used for priority lists,
//! which only admits flat leaf values.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Doc;

/// Values that can be stored in a document field.
///
/// `Value` serializes as plain JSON: `null`, booleans, numbers, strings,
/// arrays and objects map onto the matching variants. Integral JSON numbers
/// become [`Value::Int`], everything else numeric becomes [`Value::Float`].
///
/// # Value Types
///
/// ## Leaf Values
/// - [`Value::Null`] - The "no value" sentinel, also used for missing fields
/// - [`Value::Bool`] - Boolean values
/// - [`Value::Int`] - 64-bit signed integers
/// - [`Value::Float`] - 64-bit floating point numbers
/// - [`Value::Text`] - UTF-8 text strings
///
/// ## Branch Values
/// - [`Value::List`] - Multi-valued fields
/// - [`Value::Doc`] - Nested documents
///
/// # Direct Comparisons
///
/// `Value` implements `PartialEq` with primitive types for ergonomic comparisons:
///
/// ```
/// # use semisort::doc::Value;
/// let text = Value::Text("hello".to_string());
/// let number = Value::Int(42);
/// let flag = Value::Bool(true);
///
/// assert!(text == "hello");
/// assert!(number == 42);
/// assert!(flag == true);
///
/// // Type mismatches return false
/// assert!(!(text == 42));
/// assert!(!(number == "hello"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/absent value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),
    /// Ordered collection of values
    List(Vec<Value>),
    /// Nested document
    Doc(Doc),
}

/// The value shared by every absent field lookup.
pub(crate) static NULL: Value = Value::Null;

impl Value {
    /// Returns true if this is a leaf value (not a list or document)
    pub fn is_leaf(&self) -> bool {
        !self.is_branch()
    }

    /// Returns true if this is a branch value (can contain other values)
    pub fn is_branch(&self) -> bool {
        matches!(self, Value::List(_) | Value::Doc(_))
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for integers and floats
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Doc(_) => "doc",
        }
    }

    /// Loose truthiness of a value.
    ///
    /// `null`, `false`, `0`, `0.0`, `NaN` and the empty string are falsy.
    /// Lists and documents are always truthy, even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0 && !f.is_nan(),
            Value::Text(s) => !s.is_empty(),
            Value::List(_) | Value::Doc(_) => true,
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the value as a float if it is numeric
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a list
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to convert to a nested document
    pub fn as_doc(&self) -> Option<&Doc> {
        match self {
            Value::Doc(doc) => Some(doc),
            _ => None,
        }
    }

    /// Serializes the value to compact JSON.
    pub fn to_json_string(&self) -> String {
        // Maps are keyed by String and every variant is plain data, so this
        // cannot fail.
        serde_json::to_string(self).unwrap_or_else(|_| "null".to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::List(list) => {
                write!(f, "[")?;
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Doc(doc) => write!(f, "{doc}"),
        }
    }
}

/// A flat leaf value, as allowed inside a priority list.
///
/// Lists, documents and `null` have no `Scalar` representation, so a priority
/// list can never contain nested arrays. Deserializing one from JSON fails.
///
/// ```
/// # use semisort::doc::Scalar;
/// let parsed: Result<Vec<Scalar>, _> = serde_json::from_str(r#"["a", 1, true]"#);
/// assert!(parsed.is_ok());
///
/// let nested: Result<Vec<Scalar>, _> = serde_json::from_str(r#"[["a"]]"#);
/// assert!(nested.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),
}

impl Scalar {
    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "int",
            Scalar::Float(_) => "float",
            Scalar::Text(_) => "text",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Float(n) => write!(f, "{n}"),
            Scalar::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Bool(b) => Value::Bool(b),
            Scalar::Int(n) => Value::Int(n),
            Scalar::Float(f) => Value::Float(f),
            Scalar::Text(s) => Value::Text(s),
        }
    }
}

impl TryFrom<Value> for Scalar {
    type Error = Value;

    /// Fails with the original value when it is not a leaf.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(Scalar::Bool(b)),
            Value::Int(n) => Ok(Scalar::Int(n)),
            Value::Float(f) => Ok(Scalar::Float(f)),
            Value::Text(s) => Ok(Scalar::Text(s)),
            other => Err(other),
        }
    }
}

// Convenient From implementations for common types
macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident as $target:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value as $target)
                }
            }

            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Scalar::$variant(value as $target)
                }
            }
        )*
    };
}

impl_from_primitive! {
    i64 => Int as i64,
    i32 => Int as i64,
    u32 => Int as i64,
    f64 => Float as f64,
    f32 => Float as f64,
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<Doc> for Value {
    fn from(value: Doc) -> Self {
        Value::Doc(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Doc(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

// PartialEq implementations for comparing Value with primitive types
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::Text(s) if s == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Value::Int(n) if n == other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        matches!(self, Value::Int(n) if *n == i64::from(*other))
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Bool(b) if b == other)
    }
}
