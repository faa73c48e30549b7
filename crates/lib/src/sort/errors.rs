//! Error types for sorting.
//!
//! [`CompareError`] describes why a single pairwise comparison failed.
//! [`SortError`] is what callers of [`sort`](super::sort) and the request
//! layer see: either the input was structurally invalid, or a comparison
//! failed while sorting.

use thiserror::Error;

use super::options::BoxError;

/// Errors raised by the comparator chain for one pair of documents.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CompareError {
    /// The caller-supplied extraction hook failed
    #[error("Custom value extraction failed for field '{field}': {source}")]
    GetValueFailed {
        field: String,
        #[source]
        source: BoxError,
    },

    /// The fallback order was asked to compare a number with text
    #[error("Cannot order field '{field}': {left} is not comparable with {right}")]
    IncomparableTypes {
        field: String,
        left: &'static str,
        right: &'static str,
    },
}

impl CompareError {
    /// Check if this error came from the extraction hook
    pub fn is_get_value_error(&self) -> bool {
        matches!(self, CompareError::GetValueFailed { .. })
    }

    /// Check if this error is a fallback type mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(self, CompareError::IncomparableTypes { .. })
    }

    /// Get the field being compared when the error occurred
    pub fn field(&self) -> &str {
        match self {
            CompareError::GetValueFailed { field, .. }
            | CompareError::IncomparableTypes { field, .. } => field,
        }
    }
}

/// Structured error types for sort calls.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SortError {
    /// The arguments were structurally invalid; nothing was compared
    #[error("Invalid sort input: {reason}")]
    InvalidInput { reason: String },

    /// A comparison failed while sorting
    #[error("Unexpected error while sorting: {source}")]
    Unexpected {
        #[source]
        source: CompareError,
    },
}

impl SortError {
    /// Check if this error is an input validation failure
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SortError::InvalidInput { .. })
    }

    /// Check if this error was raised during comparison
    pub fn is_unexpected(&self) -> bool {
        matches!(self, SortError::Unexpected { .. })
    }

    /// Get the comparison error behind an unexpected failure
    pub fn compare_error(&self) -> Option<&CompareError> {
        match self {
            SortError::Unexpected { source } => Some(source),
            _ => None,
        }
    }

    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        SortError::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl From<CompareError> for SortError {
    fn from(source: CompareError) -> Self {
        SortError::Unexpected { source }
    }
}

// Conversion from SortError to the main Error type
impl From<SortError> for crate::Error {
    fn from(err: SortError) -> Self {
        crate::Error::Sort(err)
    }
}
