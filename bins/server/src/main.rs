//! Thumbnailer Server
//!
//! Main entry point for the thumbnail service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use thumbnailer_api::{AppState, create_router};
use thumbnailer_core::storage::{ObjectStorage, StorageConfig, StorageProvider};
use thumbnailer_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "thumbnailer=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Connect object storage
    let connection_string = config.storage.connection_string.as_deref().context(
        "No storage connection string: set THUMBNAILER__STORAGE__CONNECTION_STRING or AzureWebJobsStorage",
    )?;
    let provider = StorageProvider::from_connection_string(connection_string)?;
    let storage_config = StorageConfig::new(provider)
        .with_containers(
            config.storage.originals_container.clone(),
            config.storage.thumbnails_container.clone(),
        )
        .with_public_base_url(config.public_base_url());
    let storage = ObjectStorage::from_config(storage_config)?;
    info!(
        provider = storage.provider_name(),
        originals = %config.storage.originals_container,
        thumbnails = %config.storage.thumbnails_container,
        "Object storage configured"
    );

    // Create application state
    let max_upload_bytes = usize::try_from(config.storage.max_upload_bytes).unwrap_or(usize::MAX);
    let state = AppState::new(Arc::new(storage), max_upload_bytes);

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
