//! Thumbnail service implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::error::ThumbnailError;
use super::naming::{original_object_name, thumbnail_object_name};
use super::render::render_thumbnail;
use super::types::{GeneratedThumbnail, StoredObject, UploadedImage};
use crate::storage::{BlobStore, Container};

/// Turns uploads into stored original/thumbnail pairs.
///
/// Stateless across calls; the store handle is the only thing it holds.
pub struct ThumbnailService<S: BlobStore> {
    store: Arc<S>,
}

impl<S: BlobStore> ThumbnailService<S> {
    /// Create a new thumbnail service.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Get the underlying store.
    #[must_use]
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Render a thumbnail for `upload` and store both images.
    ///
    /// The original is written first, unchanged, then the JPEG thumbnail
    /// under `thumb_` + the original's name. Nothing is written unless the
    /// upload decodes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The upload is empty
    /// - The bytes are not a decodable image
    /// - Encoding or either storage write fails
    pub async fn generate(
        &self,
        upload: UploadedImage,
    ) -> Result<GeneratedThumbnail, ThumbnailError> {
        if upload.is_empty() {
            return Err(ThumbnailError::MissingFile);
        }

        debug!(
            filename = %upload.filename,
            content_type = upload.content_type.as_deref().unwrap_or("unknown"),
            size = upload.len(),
            "Rendering thumbnail"
        );

        let source = upload.data.clone();
        let thumbnail = tokio::task::spawn_blocking(move || render_thumbnail(&source))
            .await
            .map_err(ThumbnailError::task)??;

        let original_name = original_object_name(Uuid::new_v4(), &upload.filename);
        let thumbnail_name = thumbnail_object_name(&original_name);

        let original_url = self
            .store
            .put(Container::Originals, &original_name, upload.data)
            .await?;

        let thumbnail_url = match self
            .store
            .put(Container::Thumbnails, &thumbnail_name, thumbnail.data)
            .await
        {
            Ok(url) => url,
            Err(err) => {
                self.discard_original(&original_name).await;
                return Err(err.into());
            }
        };

        info!(
            original = %original_name,
            thumbnail = %thumbnail_name,
            width = thumbnail.width,
            height = thumbnail.height,
            "Thumbnail generated"
        );

        Ok(GeneratedThumbnail {
            original: StoredObject {
                container: Container::Originals,
                name: original_name,
                url: original_url,
            },
            thumbnail: StoredObject {
                container: Container::Thumbnails,
                name: thumbnail_name,
                url: thumbnail_url,
            },
            width: thumbnail.width,
            height: thumbnail.height,
        })
    }

    /// Best-effort removal of an original whose thumbnail never got stored.
    async fn discard_original(&self, original_name: &str) {
        match self.store.delete(Container::Originals, original_name).await {
            Ok(()) => info!(
                original = %original_name,
                "Removed original after failed thumbnail write"
            ),
            Err(e) => warn!(
                original = %original_name,
                error = %e,
                "Failed to remove original after failed thumbnail write"
            ),
        }
    }
}
