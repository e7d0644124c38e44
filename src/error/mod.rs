//! Error handling for the search engine.

pub mod util;

use std::io;
use std::path::PathBuf;

/// Specialized error type for search operations
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The operator has no defined semantics for the given combinator and
    /// date comparability. The query is malformed.
    #[error(
        "Wrong operator: '{operator}' is not defined for logical operator '{logical_operator}' \
         (date comparable: {date_comparable})"
    )]
    WrongOperator {
        operator: String,
        logical_operator: String,
        date_comparable: bool,
    },

    /// Logical operator other than `and`/`or`
    #[error("Unknown logical operator: '{0}'")]
    UnknownLogicalOperator(String),

    /// Category name not recognised (only raised in strict mode)
    #[error("Unknown search category: '{0}'")]
    UnknownCategory(String),

    /// A raw value does not have the shape its category requires
    #[error("Invalid value {value} for category '{category}': {reason}")]
    InvalidValue {
        category: String,
        value: String,
        reason: String,
    },

    /// Malformed JSON request or snapshot
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error opening or reading a file
    #[error("IO error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SearchError {
    /// Create an invalid value error
    pub fn invalid_value(
        category: impl Into<String>,
        value: impl std::fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            category: category.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether the error was caused by the client's request rather than by
    /// the data the engine was pointed at
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::WrongOperator { .. }
                | Self::UnknownLogicalOperator(_)
                | Self::UnknownCategory(_)
                | Self::InvalidValue { .. }
                | Self::Json(_)
        )
    }
}

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
