//! Caller-visible error taxonomy.
//!
//! Every failure of the thumbnail endpoint collapses into one of these kinds
//! before it reaches the caller. The display text is the generic message sent
//! over the wire; internal details are logged where the error is produced.

use thiserror::Error;

/// Application error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// The request carried no usable `file` part.
    #[error("No file uploaded")]
    MissingFile,

    /// The request body exceeded the configured upload limit.
    #[error("File too large")]
    FileTooLarge,

    /// The uploaded bytes could not be decoded as an image.
    #[error("Error processing image")]
    DecodeFailure,

    /// Storage, encoding or any other unexpected failure.
    #[error("Error processing image")]
    ProcessingFailure,
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::MissingFile => 400,
            Self::FileTooLarge => 413,
            Self::DecodeFailure | Self::ProcessingFailure => 500,
        }
    }

    /// Returns the error code used in logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingFile => "MISSING_FILE",
            Self::FileTooLarge => "FILE_TOO_LARGE",
            Self::DecodeFailure => "DECODE_FAILURE",
            Self::ProcessingFailure => "PROCESSING_FAILURE",
        }
    }

    /// Whether repeating the identical request can succeed.
    ///
    /// Only storage-side failures qualify: every attempt writes under fresh
    /// names, so a retry never collides with a previous partial write.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ProcessingFailure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::MissingFile, 400, "MISSING_FILE")]
    #[case(AppError::FileTooLarge, 413, "FILE_TOO_LARGE")]
    #[case(AppError::DecodeFailure, 500, "DECODE_FAILURE")]
    #[case(AppError::ProcessingFailure, 500, "PROCESSING_FAILURE")]
    fn test_status_and_code(#[case] err: AppError, #[case] status: u16, #[case] code: &str) {
        assert_eq!(err.status_code(), status);
        assert_eq!(err.error_code(), code);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(AppError::MissingFile.to_string(), "No file uploaded");
        assert_eq!(AppError::FileTooLarge.to_string(), "File too large");
        assert_eq!(AppError::DecodeFailure.to_string(), "Error processing image");
        assert_eq!(
            AppError::ProcessingFailure.to_string(),
            "Error processing image"
        );
    }

    #[test]
    fn test_only_processing_failure_is_retryable() {
        assert!(!AppError::MissingFile.is_retryable());
        assert!(!AppError::FileTooLarge.is_retryable());
        assert!(!AppError::DecodeFailure.is_retryable());
        assert!(AppError::ProcessingFailure.is_retryable());
    }
}
