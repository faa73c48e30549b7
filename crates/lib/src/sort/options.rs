//! Sorting options.
//!
//! [`SortConfig`] is the plain-data part of the options and can be loaded
//! from JSON or CLI flags. [`SortOptions`] adds the optional value
//! extraction hook, which is code and therefore only available to Rust
//! callers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::doc::{Document, Value, path};

/// Boxed error returned by a custom value extraction hook.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Signature of a custom value extraction hook.
///
/// Receives the document and the criterion field name and returns the value
/// to compare. When installed it replaces default field access and the
/// `basedOn` overlay entirely.
pub type GetValueFn<D> = dyn Fn(&D, &str) -> Result<Value, BoxError> + Send + Sync;

/// Fallback order applied when priorities do not decide a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smaller numbers and earlier text first
    Asc,
    /// Larger numbers and later text first
    Desc,
}

/// How the `basedOn` overlay decides whether it holds a value for a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayMode {
    /// Any non-null `basedOn` value is stored and wins over the document,
    /// including `0`, `false` and `""`.
    #[default]
    Present,
    /// Only truthy `basedOn` values are stored; `0`, `false`, `""` and `null`
    /// are ignored and the document's own field is used instead.
    Truthy,
}

impl OverlayMode {
    /// Returns true if a `basedOn` value should be stored under this mode
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            OverlayMode::Present => !value.is_null(),
            OverlayMode::Truthy => value.is_truthy(),
        }
    }
}

/// Serializable sorting options.
///
/// All fields have defaults, so `{}` is a valid configuration. Field names
/// accept both `snake_case` and the `camelCase` form used by request files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Lower-case text before matching priorities
    #[serde(alias = "caseInsensitive")]
    pub case_insensitive: bool,

    /// Fallback order for criteria that priorities leave undecided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,

    /// Overlay lookup rule
    pub overlay: OverlayMode,
}

/// Options for one sort call over documents of type `D`.
///
/// ```
/// use semisort::doc::{Doc, Value};
/// use semisort::sort::{SortOptions, SortOrder};
///
/// let options = SortOptions::<Doc>::new()
///     .case_insensitive(true)
///     .order(SortOrder::Desc)
///     .custom_get_value(|doc: &Doc, field: &str| {
///         Ok(doc.get(field).cloned().unwrap_or(Value::Null))
///     });
///
/// assert!(options.config.case_insensitive);
/// assert!(options.has_custom_get_value());
/// ```
pub struct SortOptions<D: ?Sized> {
    /// Plain-data options
    pub config: SortConfig,
    custom_get_value: Option<Box<GetValueFn<D>>>,
}

impl<D: ?Sized> SortOptions<D> {
    /// Creates default options: case-sensitive, no fallback order, no hook
    pub fn new() -> Self {
        Self::from_config(SortConfig::default())
    }

    /// Creates options from a loaded configuration
    pub fn from_config(config: SortConfig) -> Self {
        Self {
            config,
            custom_get_value: None,
        }
    }

    /// Builder method to toggle case-insensitive matching
    pub fn case_insensitive(mut self, enabled: bool) -> Self {
        self.config.case_insensitive = enabled;
        self
    }

    /// Builder method to set the fallback order
    pub fn order(mut self, order: SortOrder) -> Self {
        self.config.order = Some(order);
        self
    }

    /// Builder method to set the overlay lookup rule
    pub fn overlay(mut self, mode: OverlayMode) -> Self {
        self.config.overlay = mode;
        self
    }

    /// Builder method to install a custom value extraction hook
    pub fn custom_get_value<F>(mut self, hook: F) -> Self
    where
        F: Fn(&D, &str) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.custom_get_value = Some(Box::new(hook));
        self
    }

    /// Returns true if a custom value extraction hook is installed
    pub fn has_custom_get_value(&self) -> bool {
        self.custom_get_value.is_some()
    }

    pub(crate) fn get_value_hook(&self) -> Option<&GetValueFn<D>> {
        self.custom_get_value.as_deref()
    }
}

impl<D: Document + ?Sized + 'static> SortOptions<D> {
    /// Builder method to resolve criterion fields as dotted paths.
    ///
    /// Installs [`nested_path`] as the extraction hook, so a criterion on
    /// `author.firstname` reads the `firstname` field of the `author`
    /// document.
    pub fn nested_fields(self) -> Self {
        self.custom_get_value(|doc: &D, field: &str| nested_path(doc, field))
    }
}

impl<D: ?Sized> Default for SortOptions<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: ?Sized> fmt::Debug for SortOptions<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortOptions")
            .field("config", &self.config)
            .field("custom_get_value", &self.custom_get_value.is_some())
            .finish()
    }
}

/// Extraction hook that resolves `field` as a dotted path.
///
/// The first component is read through [`Document::field`]; the rest
/// descends into nested documents by key and into lists by index. Anything
/// unreachable resolves to [`Value::Null`].
///
/// ```
/// # use semisort::{doc, doc::Value, sort::nested_path};
/// let doc = doc! { "author" => doc! { "firstname" => "John" } };
/// assert_eq!(nested_path(&doc, "author.firstname").unwrap(), Value::from("John"));
/// assert_eq!(nested_path(&doc, "author.middle").unwrap(), Value::Null);
/// ```
pub fn nested_path<D: Document + ?Sized>(doc: &D, field: &str) -> Result<Value, BoxError> {
    let mut segments = path::components(field);
    let resolved = segments
        .next()
        .and_then(|first| doc.field(first))
        .and_then(|start| path::walk(start, segments));
    Ok(resolved.cloned().unwrap_or_default())
}
