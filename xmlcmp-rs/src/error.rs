//! Error types for xmlcmp.
//!
//! Structural differences between two documents are never errors; they are
//! reported through [`DiffSet`](crate::diff::DiffSet). The variants here cover
//! unreadable input and misuse of the construction APIs.

use thiserror::Error;

/// Result type alias for xmlcmp operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or parsing documents.
#[derive(Error, Debug)]
pub enum Error {
    /// The tokenizer rejected the input, or the event stream was unbalanced.
    #[error("malformed markup: {0}")]
    MalformedMarkup(String),

    /// The input contained no element at all.
    #[error("no root element found")]
    MissingRootElement,

    /// A node, path or option was constructed from invalid arguments.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O error while reading a document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    pub(crate) fn malformed(message: impl std::fmt::Display) -> Self {
        Error::MalformedMarkup(message.to_string())
    }
}
