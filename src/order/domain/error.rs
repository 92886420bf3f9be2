//! Error types for order domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing order domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderDomainError {
    /// Order numbers start at one.
    #[error("order number must be positive")]
    ZeroOrderNumber,

    /// The order number is not a decimal integer.
    #[error("invalid order number '{0}'")]
    InvalidOrderNumber(String),

    /// The comment author is empty after trimming.
    #[error("comment author must not be empty")]
    EmptyCommentAuthor,

    /// The comment text is empty after trimming.
    #[error("comment text must not be empty")]
    EmptyCommentText,
}

/// Error returned while parsing an order status or board column label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown order status: {0}")]
pub struct ParseOrderStatusError(pub String);

/// Error returned while parsing an importance level.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown importance: {0}")]
pub struct ParseImportanceError(pub String);
