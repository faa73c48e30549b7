//!
//! semisort: priority-driven, multi-criteria sorting for loosely-typed documents.
//!
//! ## Core Concepts
//!
//! * **Documents (`doc::Doc`, `doc::Document`)**: schema-less records mapping field names to values. Any field may be missing.
//! * **Criteria (`sort::Criterion`)**: ordered sort rules. Each names a field, the preferred values for it, and an optional `basedOn` overlay entry.
//! * **Priority matching (`sort::matcher`)**: ranks a field value by the position of the first preferred value it equals, after trimming and optional case folding.
//! * **Comparator chain (`sort::Comparator`)**: compiles criteria once and decides each pair at the first criterion that separates it, with an optional ascending/descending fallback.
//! * **Requests (`request::SortRequest`)**: JSON input carrying documents, criteria and options, with the structural validation that produces `InvalidInput` errors.

pub mod constants;
pub mod doc;
#[cfg(feature = "generate")]
pub mod generate;
pub mod request;
pub mod sort;

pub use doc::{Doc, Document, Value};
pub use request::SortRequest;
pub use sort::{Criterion, SortOptions, sort};

/// Result type used throughout the semisort library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the semisort library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured sort errors from the sort module
    #[error(transparent)]
    Sort(sort::SortError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Sort(_) => "sort",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates structurally invalid input.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Error::Sort(sort_err) => sort_err.is_invalid_input(),
            _ => false,
        }
    }

    /// Check if this error was raised while comparing documents.
    pub fn is_unexpected(&self) -> bool {
        match self {
            Error::Sort(sort_err) => sort_err.is_unexpected(),
            _ => false,
        }
    }

    /// Check if this error came from a custom value extraction hook.
    pub fn is_get_value_error(&self) -> bool {
        match self {
            Error::Sort(sort_err) => sort_err
                .compare_error()
                .is_some_and(|e| e.is_get_value_error()),
            _ => false,
        }
    }

    /// Check if this error is a fallback-order type mismatch.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Sort(sort_err) => sort_err.compare_error().is_some_and(|e| e.is_type_error()),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this error is a JSON (de)serialization failure.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
