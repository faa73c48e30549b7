//! JSON sort requests.
//!
//! A request bundles the documents, the criteria and the plain-data options
//! of one sort call:
//!
//! ```json
//! {
//!   "documents": [{ "t": "Magazine" }, { "t": "Newspaper" }],
//!   "criteria": [{ "field": "t", "priorities": ["Newspaper", "Magazine"] }],
//!   "options": { "caseInsensitive": true, "order": "asc" }
//! }
//! ```
//!
//! Loading only checks that the input is JSON. The structural checks happen
//! when the request is executed, and fail with
//! [`SortError::InvalidInput`](crate::sort::SortError::InvalidInput) before
//! any comparison runs:
//!
//! - `documents` must be an array (missing or `null` is invalid),
//! - `criteria` must be an array of criteria, or missing/`null` for none.

use std::{fs::File, io::Read, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    doc::Value,
    sort::{Criterion, SortConfig, SortError, SortOptions, sort},
};

/// A sort call loaded from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SortRequest {
    /// The documents to sort; must be an array
    #[serde(default)]
    pub documents: Value,

    /// The criteria, kept raw until validated
    #[serde(default)]
    pub criteria: serde_json::Value,

    /// Plain-data sorting options
    #[serde(default)]
    pub options: SortConfig,
}

impl SortRequest {
    /// Parses a request from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a request from a reader
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Loads a request from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading sort request");
        Self::from_reader(std::io::BufReader::new(File::open(path)?))
    }

    /// Replaces the request options
    pub fn with_options(mut self, options: SortConfig) -> Self {
        self.options = options;
        self
    }

    /// Returns the documents, checking that they form an array.
    pub fn documents(&self) -> Result<&[Value]> {
        match &self.documents {
            Value::List(documents) => Ok(documents),
            other => Err(SortError::invalid_input(format!(
                "documents must be an array, found {}",
                other.type_name()
            ))
            .into()),
        }
    }

    /// Returns the parsed criteria.
    ///
    /// Missing or `null` criteria mean "no criteria". Anything other than an
    /// array of valid criteria is invalid input.
    pub fn criteria(&self) -> Result<Vec<Criterion>> {
        match &self.criteria {
            serde_json::Value::Null => Ok(Vec::new()),
            serde_json::Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    Criterion::deserialize(item).map_err(|err| {
                        crate::Error::from(SortError::invalid_input(format!(
                            "criterion {index} is invalid: {err}"
                        )))
                    })
                })
                .collect(),
            other => Err(SortError::invalid_input(format!(
                "criteria must be an array, found {}",
                json_type_name(other)
            ))
            .into()),
        }
    }

    /// Validates and sorts using the request's own options.
    pub fn execute(&self) -> Result<Vec<&Value>> {
        self.execute_with(&SortOptions::from_config(self.options))
    }

    /// Validates and sorts with caller-supplied options.
    ///
    /// The request's own `options` are ignored; use this to install an
    /// extraction hook.
    pub fn execute_with(&self, options: &SortOptions<Value>) -> Result<Vec<&Value>> {
        let documents = self.documents()?;
        let criteria = self.criteria()?;
        sort(documents, &criteria, options)
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "text",
        serde_json::Value::Array(_) => "list",
        serde_json::Value::Object(_) => "doc",
    }
}
