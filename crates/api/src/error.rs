//! HTTP rendering of caller-visible errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thumbnailer_shared::AppError;

/// An `AppError` on its way out as a plain-text response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, self.0.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::CONTENT_TYPE;
    use http_body_util::BodyExt;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::MissingFile, StatusCode::BAD_REQUEST, "No file uploaded")]
    #[case(AppError::FileTooLarge, StatusCode::PAYLOAD_TOO_LARGE, "File too large")]
    #[case(
        AppError::DecodeFailure,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Error processing image"
    )]
    #[case(
        AppError::ProcessingFailure,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Error processing image"
    )]
    #[tokio::test]
    async fn test_error_response(
        #[case] err: AppError,
        #[case] status: StatusCode,
        #[case] body: &str,
    ) {
        let response = ApiError(err).into_response();
        assert_eq!(response.status(), status);
        assert!(
            response.headers()[CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(bytes.as_ref(), body.as_bytes());
    }
}
