//! Error types for sqb

use thiserror::Error;

/// Result type alias for sqb operations
pub type SqbResult<T> = Result<T, SqbError>;

/// Error types for statement execution and row post-processing.
///
/// Rendering itself never fails: only the executor boundary and the
/// row helpers built on top of it produce errors.
#[derive(Debug, Error)]
pub enum SqbError {
    /// A requested column is absent from the fetched rows
    #[error("key \"{0}\" is not found in the row set")]
    KeyNotFound(String),

    /// The statement was constructed without an executor
    #[error("statement has no executor")]
    MissingExecutor,

    /// A fetched scalar could not be converted to an integer
    #[error("value of type {type_name} cannot be converted to int64")]
    Conversion { type_name: String },

    /// Error reported by a statement executor
    #[error("{0}")]
    Executor(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl SqbError {
    /// Create a key not found error
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound(key.into())
    }

    /// Create a conversion error for a value of the given type
    pub fn conversion(type_name: impl Into<String>) -> Self {
        Self::Conversion {
            type_name: type_name.into(),
        }
    }

    /// Create an executor error
    pub fn executor(message: impl Into<String>) -> Self {
        Self::Executor(message.into())
    }

    /// Check if this is a key not found error
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound(_))
    }

    /// Check if this is a missing executor error
    pub fn is_missing_executor(&self) -> bool {
        matches!(self, Self::MissingExecutor)
    }

    /// Check if this is a conversion error
    pub fn is_conversion(&self) -> bool {
        matches!(self, Self::Conversion { .. })
    }
}
