//! Error types for flowhelp helpers

use std::convert::Infallible;

use thiserror::Error;

/// Broad classification of a [`HelperError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input has the wrong fundamental type
    Type,
    /// Input has the right type but violates a length or character rule
    InvalidValue,
    /// A control parameter is outside its valid domain
    InvalidArgument,
}

/// flowhelp error types
///
/// The `Display` text of the key variants is matched literally by callers and
/// must not change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HelperError {
    /// Key was not a string.
    #[error("The key has to be a string and is {type_name}:{value}")]
    KeyNotString {
        /// JSON type name of the offending value
        type_name: &'static str,
        /// Compact JSON rendering of the offending value
        value: String,
    },
    /// Key reached the configured maximum length.
    #[error("The key has to be less than {max_length} characters")]
    KeyTooLong {
        /// Maximum length in effect
        max_length: usize,
    },
    /// Key contained a character outside `[A-Za-z0-9_.-]`.
    #[error("The key ({key}) has to be made of alphanumeric characters, dashes, dots and underscores exclusively")]
    InvalidKeyCharacters {
        /// The rejected key
        key: String,
    },
    /// Group key contained a character outside `[A-Za-z0-9_-]`.
    #[error("The key ({key}) has to be made of alphanumeric characters, dashes and underscores exclusively")]
    InvalidGroupKeyCharacters {
        /// The rejected key
        key: String,
    },
    /// Chunk size was not a positive integer.
    #[error("Chunk size must be a positive integer, got {0}")]
    InvalidChunkSize(i128),
}

impl HelperError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            HelperError::KeyNotString { .. } => ErrorKind::Type,
            HelperError::KeyTooLong { .. }
            | HelperError::InvalidKeyCharacters { .. }
            | HelperError::InvalidGroupKeyCharacters { .. } => ErrorKind::InvalidValue,
            HelperError::InvalidChunkSize(_) => ErrorKind::InvalidArgument,
        }
    }
}

impl From<Infallible> for HelperError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, HelperError>;
