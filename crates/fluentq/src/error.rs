//! Error types for the fluentq crate.

use thiserror::Error;

/// Errors signaled by selector operations.
///
/// Every variant carries a human-readable message (via `Display`) and a short
/// machine-matchable code (via [`QueryError::code`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A pair-consuming operation ran before [`JoinSelector::on`](crate::JoinSelector::on).
    #[error("you have to call `on` after `join`, no match step has been applied")]
    JoinNotApplied,

    /// `to_map` met a key that was already present.
    #[error("duplicate key {key} in mapping")]
    DuplicateKey { key: String },

    /// Caller-defined error, typically handed to `first_or_throw`.
    #[error("{message}")]
    Custom { message: String, code: String },
}

impl QueryError {
    /// Code carried by [`QueryError::JoinNotApplied`].
    pub const JOIN_EX: &'static str = "JOIN_EX";

    /// Code carried by [`QueryError::DuplicateKey`].
    pub const DUPLICATE_KEY: &'static str = "DUPLICATE_KEY";

    /// Creates a caller-defined error with a message and a code.
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        QueryError::Custom {
            message: message.into(),
            code: code.into(),
        }
    }

    /// Returns the machine-matchable code of this error.
    pub fn code(&self) -> &str {
        match self {
            QueryError::JoinNotApplied => Self::JOIN_EX,
            QueryError::DuplicateKey { .. } => Self::DUPLICATE_KEY,
            QueryError::Custom { code, .. } => code.as_str(),
        }
    }
}

/// Result type for fluentq operations.
pub type Result<T> = std::result::Result<T, QueryError>;
