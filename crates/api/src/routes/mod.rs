//! API route definitions.

use axum::Router;
use axum::extract::DefaultBodyLimit;

use crate::AppState;

pub mod blobs;
pub mod health;
pub mod thumbnail;

/// Creates the API router with all routes.
///
/// The upload limit only applies to the thumbnail endpoint.
pub fn api_routes(state: &AppState) -> Router<AppState> {
    Router::new().merge(health::routes()).merge(
        thumbnail::routes().layer(DefaultBodyLimit::max(state.max_upload_bytes)),
    )
}
