//! Storage error types.

use thiserror::Error;

/// Errors from the object store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No object under this name.
    #[error("object not found: {name}")]
    NotFound {
        /// Object name that was looked up.
        name: String,
    },

    /// Object name could never be stored (empty or path-like).
    #[error("invalid object name: '{0}'")]
    InvalidName(String),

    /// Provider or container configuration is unusable.
    #[error("storage configuration error: {0}")]
    Configuration(String),

    /// The backend rejected or failed an operation.
    #[error("storage operation failed: {0}")]
    Operation(String),
}

impl StorageError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an operation error.
    #[must_use]
    pub fn operation(msg: impl Into<String>) -> Self {
        Self::Operation(msg.into())
    }
}

impl From<opendal::Error> for StorageError {
    fn from(err: opendal::Error) -> Self {
        match err.kind() {
            opendal::ErrorKind::ConfigInvalid => Self::Configuration(err.to_string()),
            // Callers that know the name map NotFound themselves.
            _ => Self::Operation(err.to_string()),
        }
    }
}
