//! Dotted paths for reaching into nested documents.
//!
//! A path such as `author.firstname` names the `firstname` field of the
//! document stored under `author`. Numeric components index into lists, so
//! `tags.0` is the first tag.
//!
//! ```rust
//! # use semisort::doc::{Doc, Value};
//! let doc = Doc::new()
//!     .with("author", Doc::new().with("firstname", "John"))
//!     .with("tags", vec!["news", "sports"]);
//!
//! assert_eq!(doc.get_path("author.firstname"), Some(&Value::from("John")));
//! assert_eq!(doc.get_path("tags.1"), Some(&Value::from("sports")));
//! assert_eq!(doc.get_path("author.surname"), None);
//! ```

use thiserror::Error;

use super::{Doc, Value};

/// Error type for path operations that write into a document.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// The path normalized to nothing.
    #[error("Empty path")]
    Empty,

    /// An intermediate component exists but is not a document.
    #[error("Cannot descend into '{component}' of path '{path}': found {found}")]
    NotADocument {
        path: String,
        component: String,
        found: &'static str,
    },
}

/// Normalizes a path string by cleaning up dots and empty components.
///
/// - Empty string "" → empty string
/// - Leading dots ".user" → "user"
/// - Trailing dots "user." → "user"
/// - Consecutive dots "user..profile" → "user.profile"
/// - Pure dots "..." → empty string
///
/// ```rust
/// # use semisort::doc::path::normalize_path;
/// assert_eq!(normalize_path(""), "");
/// assert_eq!(normalize_path(".user"), "user");
/// assert_eq!(normalize_path("user."), "user");
/// assert_eq!(normalize_path("user..profile"), "user.profile");
/// assert_eq!(normalize_path("..."), "");
/// ```
pub fn normalize_path(input: &str) -> String {
    components(input).collect::<Vec<_>>().join(".")
}

/// Iterates over the non-empty components of a dotted path.
pub fn components(path: &str) -> impl Iterator<Item = &str> {
    path.split('.').filter(|component| !component.is_empty())
}

/// Walks `path` starting from an already resolved value.
///
/// Documents are entered by key and lists by numeric index; anything else
/// ends the walk with `None`.
pub(crate) fn walk<'a, 'p>(
    start: &'a Value,
    rest: impl IntoIterator<Item = &'p str>,
) -> Option<&'a Value> {
    let mut current = start;
    for segment in rest {
        current = match current {
            Value::Doc(doc) => doc.get(segment)?,
            Value::List(list) => list.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Sets `value` at `path`, creating intermediate documents as needed.
pub(crate) fn set_path(doc: &mut Doc, path: &str, value: Value) -> Result<Option<Value>, PathError> {
    let segments: Vec<&str> = components(path).collect();
    let (last, parents) = segments.split_last().ok_or(PathError::Empty)?;

    let mut current = doc;
    for segment in parents {
        let entry = current
            .entry(segment)
            .or_insert_with(|| Value::Doc(Doc::new()));
        current = match entry {
            Value::Doc(inner) => inner,
            other => {
                return Err(PathError::NotADocument {
                    path: path.to_string(),
                    component: segment.to_string(),
                    found: other.type_name(),
                });
            }
        };
    }
    Ok(current.set(*last, value))
}
