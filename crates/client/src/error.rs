//! Client error types.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `ClientError`.
pub type ClientResult<T> = Result<T, ClientError>;

/// Client operation errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The selected file's extension is not an accepted image type.
    #[error("unsupported file type '{extension}': choose a jpg, jpeg or png image")]
    UnsupportedExtension {
        /// The rejected extension (empty when the file has none).
        extension: String,
    },

    /// A local file could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Image bytes could not be decoded locally.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The service answered with a non-success status.
    #[error("service returned {status}: {body}")]
    Service {
        /// HTTP status code.
        status: u16,
        /// Response body as text.
        body: String,
    },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered 200 with a body that is not the expected JSON.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Create an unsupported extension error.
    #[must_use]
    pub fn unsupported_extension(extension: impl Into<String>) -> Self {
        Self::UnsupportedExtension {
            extension: extension.into(),
        }
    }
}
