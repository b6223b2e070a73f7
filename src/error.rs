//! Error taxonomy for record lookups, named lists and path expressions.

use crate::path::PathStyle;
use crate::value::Value;
use thiserror::Error;

/// Error is returned by every fallible operation in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A record lookup did not find the requested key.
    #[error("no key '{missing_key}' found in map, available keys: {}", .available_keys.join(", "))]
    KeyNotFound {
        missing_key: Value,
        available_keys: Vec<String>,
    },

    /// Bulk name extraction hit an entry that is not a string-named record.
    #[error("not a list with named entries")]
    NotANamedList,

    /// A path expression could not be parsed under the given style.
    #[error("invalid {style} path '{path_string}': {explanation}")]
    InvalidPathString {
        style: PathStyle,
        path_string: String,
        explanation: String,
    },

    /// No record in a list carries the requested identifier/name pair.
    #[error("no entry with identifier '{identifier}' and name '{name}' found")]
    EntryNotFound { identifier: String, name: Value },

    /// A positional path element points past the end of a list.
    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A path descends into a value that has no children.
    #[error("cannot descend into {kind} at {path}")]
    NotTraversable { path: String, kind: &'static str },
}

impl Error {
    /// Creates a key-not-found error.
    pub fn key_not_found(missing_key: impl Into<Value>, available_keys: Vec<String>) -> Self {
        Error::KeyNotFound {
            missing_key: missing_key.into(),
            available_keys,
        }
    }

    /// Creates an invalid path string error.
    pub fn invalid_path(
        style: PathStyle,
        path_string: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Error::InvalidPathString {
            style,
            path_string: path_string.into(),
            explanation: explanation.into(),
        }
    }

    /// Creates an entry-not-found error.
    pub fn entry_not_found(identifier: impl Into<String>, name: impl Into<Value>) -> Self {
        Error::EntryNotFound {
            identifier: identifier.into(),
            name: name.into(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
