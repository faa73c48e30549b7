//! Value resolution for one criterion field.

use std::{borrow::Cow, collections::HashMap};

use super::{
    criterion::BasedOn,
    errors::CompareError,
    options::{GetValueFn, OverlayMode},
};
use crate::doc::{Document, Value, value::NULL};

/// Per-comparison `basedOn` substitutions.
///
/// An overlay lives for a single pairwise comparison. Entries set by one
/// criterion stay visible to every later criterion of that comparison and
/// are gone when the comparison returns.
#[derive(Debug, Clone)]
pub struct Overlay<'c> {
    entries: HashMap<&'c str, &'c Value>,
    mode: OverlayMode,
}

impl<'c> Overlay<'c> {
    /// Creates an empty overlay using `mode` to filter stored values
    pub fn new(mode: OverlayMode) -> Self {
        Self {
            entries: HashMap::new(),
            mode,
        }
    }

    /// Stores a `basedOn` entry if its field is non-empty and the mode
    /// accepts its value. Returns true if the entry was stored.
    pub fn apply(&mut self, based_on: &'c BasedOn) -> bool {
        if based_on.field.is_empty() || !self.mode.accepts(&based_on.value) {
            return false;
        }
        self.entries.insert(based_on.field.as_str(), &based_on.value);
        true
    }

    /// Returns the substituted value for `field`, if any
    pub fn get(&self, field: &str) -> Option<&'c Value> {
        self.entries.get(field).copied()
    }
}

/// Resolves the value of `field` on `doc`.
///
/// A custom hook, when given, is the only source and its result is used
/// verbatim. Otherwise the overlay wins over the document, and a missing
/// field resolves to [`Value::Null`].
pub fn resolve<'a, D: Document + ?Sized>(
    doc: &'a D,
    field: &str,
    overlay: &Overlay<'a>,
    custom_get_value: Option<&GetValueFn<D>>,
) -> Result<Cow<'a, Value>, CompareError> {
    if let Some(hook) = custom_get_value {
        return hook(doc, field)
            .map(Cow::Owned)
            .map_err(|source| CompareError::GetValueFailed {
                field: field.to_string(),
                source,
            });
    }

    let value = overlay
        .get(field)
        .or_else(|| doc.field(field))
        .unwrap_or(&NULL);
    Ok(Cow::Borrowed(value))
}
