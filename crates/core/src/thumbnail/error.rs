//! Thumbnail error types.

use thiserror::Error;
use thumbnailer_shared::AppError;

use crate::storage::StorageError;

/// Thumbnail pipeline errors.
#[derive(Debug, Error)]
pub enum ThumbnailError {
    /// The upload carried no bytes.
    #[error("no file content uploaded")]
    MissingFile,

    /// The bytes could not be decoded as an image.
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    /// The thumbnail could not be encoded as JPEG.
    #[error("failed to encode thumbnail: {0}")]
    Encode(#[source] image::ImageError),

    /// Storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The blocking render task did not complete.
    #[error("render task failed: {0}")]
    Task(String),
}

impl ThumbnailError {
    /// Create a task error.
    #[must_use]
    pub fn task(msg: impl ToString) -> Self {
        Self::Task(msg.to_string())
    }

    /// The caller-visible kind of this error.
    #[must_use]
    pub fn kind(&self) -> AppError {
        match self {
            Self::MissingFile => AppError::MissingFile,
            Self::Decode(_) => AppError::DecodeFailure,
            Self::Encode(_) | Self::Storage(_) | Self::Task(_) => AppError::ProcessingFailure,
        }
    }
}

impl From<ThumbnailError> for AppError {
    fn from(err: ThumbnailError) -> Self {
        err.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> image::ImageError {
        image::load_from_memory(b"nope").unwrap_err()
    }

    #[test]
    fn test_maps_to_caller_visible_kind() {
        assert_eq!(AppError::from(ThumbnailError::MissingFile), AppError::MissingFile);
        assert_eq!(
            AppError::from(ThumbnailError::Decode(decode_error())),
            AppError::DecodeFailure
        );
        assert_eq!(
            AppError::from(ThumbnailError::Encode(decode_error())),
            AppError::ProcessingFailure
        );
        assert_eq!(
            AppError::from(ThumbnailError::Storage(StorageError::operation("boom"))),
            AppError::ProcessingFailure
        );
        assert_eq!(
            AppError::from(ThumbnailError::task("panicked")),
            AppError::ProcessingFailure
        );
    }

    #[test]
    fn test_display_keeps_details() {
        let err = ThumbnailError::Storage(StorageError::operation("connection reset"));
        assert_eq!(
            err.to_string(),
            "storage error: storage operation failed: connection reset"
        );
    }
}
