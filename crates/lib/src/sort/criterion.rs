//! Sort criteria.

use serde::{Deserialize, Serialize};

use crate::doc::{Scalar, Value};

/// One sort rule: a field, its preferred values, and an optional overlay.
///
/// Criteria are evaluated in list order. A criterion without `priorities` can
/// still decide a comparison through the fallback order, and can still carry
/// a `based_on` overlay for later criteria.
///
/// The JSON form uses the field names `field`, `priorities` and `basedOn`:
///
/// ```
/// # use semisort::sort::Criterion;
/// let criterion: Criterion = serde_json::from_str(
///     r#"{
///         "field": "authorName",
///         "basedOn": { "field": "newspaperType", "value": "Newspaper" },
///         "priorities": ["John Smith", "Daniel Wilson"]
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(criterion.field, "authorName");
/// assert_eq!(criterion.priorities.as_ref().map(Vec::len), Some(2));
/// assert!(criterion.based_on.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criterion {
    /// The document field this criterion inspects
    pub field: String,

    /// Preferred values for `field`; earlier entries rank first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priorities: Option<Vec<Scalar>>,

    /// Overlay entry stored before this criterion's values are resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub based_on: Option<BasedOn>,
}

/// A `field = value` pair placed in the per-comparison overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasedOn {
    /// Field whose resolution the overlay takes over
    pub field: String,
    /// Value substituted for that field
    #[serde(default)]
    pub value: Value,
}

impl Criterion {
    /// Creates a criterion on `field` with no priorities and no overlay
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            priorities: None,
            based_on: None,
        }
    }

    /// Builder method to set the priority list
    pub fn priorities<I, S>(mut self, priorities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        self.priorities = Some(priorities.into_iter().map(Into::into).collect());
        self
    }

    /// Builder method to set the overlay entry
    pub fn based_on(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.based_on = Some(BasedOn {
            field: field.into(),
            value: value.into(),
        });
        self
    }
}
