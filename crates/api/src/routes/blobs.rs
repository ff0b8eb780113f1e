//! Serving of locally stored objects.
//!
//! Mounted only for providers without a public endpoint of their own
//! (filesystem, memory), so the URLs the thumbnail route hands out resolve.

use axum::{
    Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::error;

use crate::AppState;
use thumbnailer_core::storage::{Container, StorageError};

/// Creates the blob routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/{container}/{name}", get(get_blob))
}

/// GET `/{container}/{name}`
async fn get_blob(
    State(state): State<AppState>,
    Path((container, name)): Path<(String, String)>,
) -> Response {
    let Some(container) = state.storage.config().container_by_name(&container) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match state.storage.get(container, &name).await {
        Ok(data) => {
            // Thumbnails keep the original's extension but are always JPEG.
            let content_type = match container {
                Container::Thumbnails => "image/jpeg",
                Container::Originals => content_type_for(&name),
            };
            ([(header::CONTENT_TYPE, content_type)], data).into_response()
        }
        Err(StorageError::NotFound { .. }) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            error!(error = %e, name = %name, "Failed to read stored object");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Content type from the object name's extension.
fn content_type_for(name: &str) -> &'static str {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("abc_cat.jpg", "image/jpeg")]
    #[case("thumb_abc_cat.JPEG", "image/jpeg")]
    #[case("abc_dog.png", "image/png")]
    #[case("abc_anim.gif", "image/gif")]
    #[case("abc_upload", "application/octet-stream")]
    #[case("abc_archive.tar.gz", "application/octet-stream")]
    fn test_content_type_for(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(content_type_for(name), expected);
    }
}
