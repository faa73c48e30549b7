//! Priority-driven sorting of loosely-typed documents.
//!
//! The caller supplies an ordered list of [`Criterion`]s. Each one names a
//! field and, optionally, the preferred values for that field. Documents
//! whose field matches an earlier preferred value sort first; criteria are
//! consulted in order until one of them decides the pair.
//!
//! # Components
//!
//! - [`resolver`] - reads the value of a criterion field, honoring the
//!   per-comparison `basedOn` [`Overlay`] and the optional extraction hook
//! - [`matcher`] - ranks a resolved value against a priority list
//! - [`comparator`] - chains the criteria into one pairwise [`Comparator`]
//!
//! # Usage
//!
//! ```
//! use semisort::{doc, sort::{Criterion, SortOptions, sort}};
//!
//! let documents = vec![
//!     doc! { "newspaperType" => "Magazine", "authorName" => "Emily Johnson" },
//!     doc! { "newspaperType" => "Newspaper", "authorName" => "Daniel Wilson" },
//!     doc! { "newspaperType" => "Newspaper", "authorName" => "John Smith" },
//! ];
//! let criteria = vec![
//!     Criterion::new("newspaperType").priorities(["Newspaper", "Magazine"]),
//!     Criterion::new("authorName").priorities(["John Smith", "Daniel Wilson"]),
//! ];
//!
//! let sorted = sort(&documents, &criteria, &SortOptions::new()).unwrap();
//! let authors: Vec<_> = sorted
//!     .iter()
//!     .map(|d| d.get("authorName").unwrap().to_string())
//!     .collect();
//! assert_eq!(authors, ["John Smith", "Daniel Wilson", "Emily Johnson"]);
//! ```
//!
//! # Failure policy
//!
//! The input is never mutated and never returned unsorted on failure. The
//! first comparison error stops the sort and is reported as
//! [`SortError::Unexpected`].
//!
//! # Stability
//!
//! Sorting uses a stable [`merge_sort_by`], so documents the criteria cannot
//! separate keep their input order. Criteria that fall through on missing
//! fields do not form a total order; the merge sort accepts that and never
//! panics on it.

pub mod comparator;
pub mod criterion;
pub mod errors;
pub mod matcher;
pub mod merge;
pub mod options;
pub mod resolver;

pub use comparator::Comparator;
pub use criterion::{BasedOn, Criterion};
pub use errors::{CompareError, SortError};
pub use matcher::{PriorityList, Rank, match_rank};
pub use merge::merge_sort_by;
pub use options::{
    BoxError, GetValueFn, OverlayMode, SortConfig, SortOptions, SortOrder, nested_path,
};
pub use resolver::Overlay;

use crate::doc::Document;

/// Sorts `documents` by `criteria`.
///
/// Returns a new vector holding the same references in sorted order; the
/// input slice is left untouched.
///
/// # Errors
///
/// [`SortError::Unexpected`] when a comparison fails: the extraction hook
/// returned an error, or the fallback order met a number paired with text.
pub fn sort<'d, D: Document>(
    documents: &'d [D],
    criteria: &[Criterion],
    options: &SortOptions<D>,
) -> crate::Result<Vec<&'d D>> {
    tracing::debug!(
        documents = documents.len(),
        criteria = criteria.len(),
        case_insensitive = options.config.case_insensitive,
        order = ?options.config.order,
        "Sorting documents"
    );

    let comparator = Comparator::new(criteria, options);
    let mut sorted: Vec<&D> = documents.iter().collect();

    if let Err(source) = merge_sort_by(&mut sorted, |a, b| comparator.compare(a, b)) {
        tracing::warn!(field = source.field(), error = %source, "Sort aborted");
        return Err(SortError::Unexpected { source }.into());
    }

    tracing::debug!(documents = sorted.len(), "Sort completed");
    Ok(sorted)
}
