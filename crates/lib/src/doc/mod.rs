//! Loosely-typed documents.
//!
//! This module provides the record model the sorter works on. A [`Doc`] maps
//! field names to [`Value`]s with no schema: any field may be missing and any
//! field may hold any kind of value. The [`Document`] trait abstracts field
//! access so that other map types can be sorted too.
//!
//! # Usage
//!
//! ```
//! use semisort::doc::{Doc, Value};
//!
//! let doc = Doc::new()
//!     .with("newspaperType", "Newspaper")
//!     .with("shirtNumber", 10)
//!     .with("author", Doc::new().with("firstname", "John"));
//!
//! assert_eq!(doc.get("newspaperType"), Some(&Value::from("Newspaper")));
//! assert_eq!(doc.get_path("author.firstname"), Some(&Value::from("John")));
//! assert_eq!(doc.get("missing"), None);
//! ```

use std::{
    collections::{BTreeMap, HashMap, btree_map},
    fmt,
};

use serde::{Deserialize, Serialize};

pub mod path;
pub mod value;

pub use path::PathError;
pub use value::{Scalar, Value};

/// A schema-less record of named fields.
///
/// Keys are kept in sorted order so that display and serialization are
/// deterministic. Field access never fails: missing fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Doc {
    /// Field values indexed by field name
    children: BTreeMap<String, Value>,
}

impl Doc {
    /// Creates a new empty document
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
        }
    }

    /// Returns true if this document has no fields
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of fields
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the document has a field with this exact name
    pub fn contains_key(&self, key: &str) -> bool {
        self.children.contains_key(key)
    }

    /// Gets a field by its exact name.
    ///
    /// Dots in `key` are not interpreted; use [`Doc::get_path`] for nested access.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.children.get(key)
    }

    /// Gets a value by dotted path, descending into nested documents and lists.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path::components(path);
        let first = self.children.get(segments.next()?)?;
        path::walk(first, segments)
    }

    /// Sets a field, returning the previous value if present
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.children.insert(key.into(), value.into())
    }

    /// Sets a value at a dotted path, creating intermediate documents.
    ///
    /// Fails if an intermediate component already holds something other than
    /// a document.
    pub fn set_path(
        &mut self,
        path: &str,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, PathError> {
        path::set_path(self, path, value.into())
    }

    /// Removes a field, returning its value if it was present
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.children.remove(key)
    }

    /// Returns an iterator over all fields in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.children.iter()
    }

    /// Returns an iterator over all field names in order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.children.keys()
    }

    /// Returns an iterator over all field values
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.children.values()
    }

    pub(crate) fn entry(&mut self, key: &str) -> btree_map::Entry<'_, String, Value> {
        self.children.entry(key.to_string())
    }

    /// Serializes the document to compact JSON.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Builder method to set a field and return self
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Doc {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Doc {
            children: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, Value>> for Doc {
    fn from(children: BTreeMap<String, Value>) -> Self {
        Doc { children }
    }
}

/// Read access to the fields of a record being sorted.
///
/// Field access is total: a missing field is `None`, never an error. The
/// sorter treats `None` the same as an explicit [`Value::Null`].
///
/// Implementations are provided for [`Doc`], [`Value`] (field access into
/// [`Value::Doc`], nothing otherwise) and string-keyed maps of values.
pub trait Document {
    /// Returns the value stored under `name`, without interpreting dots.
    fn field(&self, name: &str) -> Option<&Value>;

    /// Returns the record itself as a value, when it has one.
    ///
    /// Used for whole-record fallback ordering when no criteria are given.
    fn as_value(&self) -> Option<&Value> {
        None
    }
}

impl Document for Doc {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Document for Value {
    fn field(&self, name: &str) -> Option<&Value> {
        self.as_doc()?.get(name)
    }

    fn as_value(&self) -> Option<&Value> {
        Some(self)
    }
}

impl<S: std::hash::BuildHasher> Document for HashMap<String, Value, S> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Document for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<T: Document + ?Sized> Document for &T {
    fn field(&self, name: &str) -> Option<&Value> {
        (**self).field(name)
    }

    fn as_value(&self) -> Option<&Value> {
        (**self).as_value()
    }
}

/// Builds a [`Doc`] from `key => value` pairs.
///
/// ```
/// # use semisort::{doc, doc::Value};
/// let player = doc! { "playerName" => "Totti", "shirtNumber" => 10 };
/// assert_eq!(player.get("shirtNumber"), Some(&Value::Int(10)));
/// ```
#[macro_export]
macro_rules! doc {
    () => {
        $crate::doc::Doc::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut doc = $crate::doc::Doc::new();
        $(
            doc.set($key, $value);
        )+
        doc
    }};
}
