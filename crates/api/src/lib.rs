//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - The thumbnail endpoint
//! - Health check
//! - Serving of locally stored objects
//! - Mapping of pipeline errors to plain-text responses

pub mod error;
pub mod routes;

use axum::Router;
use std::sync::Arc;
use thumbnailer_core::storage::ObjectStorage;
use thumbnailer_core::thumbnail::ThumbnailService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Object storage for originals and thumbnails.
    pub storage: Arc<ObjectStorage>,
    /// Thumbnail pipeline writing into `storage`.
    pub thumbnails: Arc<ThumbnailService<ObjectStorage>>,
    /// Largest accepted upload body in bytes.
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Create application state around a storage backend.
    #[must_use]
    pub fn new(storage: Arc<ObjectStorage>, max_upload_bytes: usize) -> Self {
        Self {
            thumbnails: Arc::new(ThumbnailService::new(storage.clone())),
            storage,
            max_upload_bytes,
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new().nest("/api", routes::api_routes(&state));

    if state.storage.config().provider.is_served_locally() {
        router = router.nest("/blobs", routes::blobs::routes());
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
