//! Constants used throughout the semisort library.
//!
//! This module provides central definitions for logging directives and the
//! vocabulary of the fake-data generator.

/// Default `tracing` directive enabling this crate's logs at info level.
pub const LOG_DIRECTIVE: &str = "semisort=info";

/// Field holding the publication type in generated documents.
pub const PAPER_TYPE_FIELD: &str = "newspaperType";

/// Field holding the author in generated documents.
pub const AUTHOR_FIELD: &str = "authorName";

/// Publication types drawn by the generator.
pub const PAPER_TYPES: [&str; 2] = ["Magazine", "Newspaper"];

/// Authors drawn by the generator.
pub const AUTHORS: [&str; 3] = ["John Smith", "Daniel Wilson", "William Thompson"];
