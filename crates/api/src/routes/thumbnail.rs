//! Thumbnail generation route.

use axum::{
    Json, Router,
    extract::{
        Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
    routing::post,
};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::{AppState, error::ApiError};
use thumbnailer_core::thumbnail::UploadedImage;
use thumbnailer_shared::AppError;

/// Name of the multipart part carrying the image.
pub const FILE_FIELD: &str = "file";

/// Creates the thumbnail routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/thumbnail", post(generate_thumbnail))
}

/// Response for a generated thumbnail.
#[derive(Debug, Serialize)]
pub struct ThumbnailResponse {
    /// Retrieval URL of the stored original.
    pub original_url: String,
    /// Retrieval URL of the stored thumbnail.
    pub thumbnail_url: String,
}

/// POST `/thumbnail`
/// Store an uploaded image and a 128×128-bounded JPEG thumbnail of it.
async fn generate_thumbnail(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ThumbnailResponse>, ApiError> {
    let multipart = multipart.map_err(|e| {
        warn!(error = %e, "Rejected request without multipart body");
        AppError::MissingFile
    })?;

    let upload = read_file_part(multipart).await?;
    info!(
        filename = %upload.filename,
        size = upload.len(),
        "Processing an image upload to generate a thumbnail"
    );

    let generated = state.thumbnails.generate(upload).await.map_err(|e| {
        let kind = e.kind();
        error!(
            error = %e,
            code = kind.error_code(),
            retryable = kind.is_retryable(),
            "Error processing image"
        );
        kind
    })?;

    Ok(Json(ThumbnailResponse {
        original_url: generated.original.url,
        thumbnail_url: generated.thumbnail.url,
    }))
}

/// Pull the `file` part out of the multipart body.
///
/// Only file parts count: a plain form value named `file` is skipped like
/// any other field. A missing or empty `file` part is `MissingFile`.
async fn read_file_part(mut multipart: Multipart) -> Result<UploadedImage, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(ToString::to_string) else {
            debug!("Skipping non-file form field named file");
            continue;
        };

        let content_type = field.content_type().map(ToString::to_string);
        let data = field.bytes().await.map_err(multipart_error)?;

        if data.is_empty() {
            warn!(filename = %filename, "Rejected empty file upload");
            return Err(AppError::MissingFile);
        }
        return Ok(UploadedImage::new(filename, content_type, data));
    }

    warn!("No file uploaded");
    Err(AppError::MissingFile)
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        warn!(error = %err, "Rejected oversized upload");
        AppError::FileTooLarge
    } else {
        warn!(error = %err, "Malformed multipart body");
        AppError::MissingFile
    }
}
