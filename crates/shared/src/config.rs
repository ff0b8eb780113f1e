//! Application configuration management.

use serde::Deserialize;

/// Environment variable the Azure Functions host uses for its storage account.
///
/// Read as a fallback when no connection string is configured explicitly.
pub const AZURE_WEBJOBS_STORAGE: &str = "AzureWebJobsStorage";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Object storage configuration.
    #[serde(default)]
    pub storage: StorageSettings,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Object storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Connection string selecting and authenticating the storage provider.
    ///
    /// Accepts an Azure storage connection string, `UseDevelopmentStorage=true`,
    /// `file:///root/dir` or `memory://`.
    #[serde(default)]
    pub connection_string: Option<String>,
    /// Base URL that stored objects are served under when the provider has
    /// no public endpoint of its own (filesystem and in-memory stores).
    #[serde(default)]
    pub public_base_url: Option<String>,
    /// Container holding the uploaded originals.
    #[serde(default = "default_originals_container")]
    pub originals_container: String,
    /// Container holding the generated thumbnails.
    #[serde(default = "default_thumbnails_container")]
    pub thumbnails_container: String,
    /// Largest accepted request body in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            connection_string: None,
            public_base_url: None,
            originals_container: default_originals_container(),
            thumbnails_container: default_thumbnails_container(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_originals_container() -> String {
    "originalimages".to_string()
}

fn default_thumbnails_container() -> String {
    "thumbnails".to_string()
}

fn default_max_upload_bytes() -> u64 {
    10 * 1024 * 1024 // 10MB
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("THUMBNAILER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app_config: Self = config.try_deserialize()?;
        if app_config.storage.connection_string.is_none() {
            app_config.storage.connection_string = std::env::var(AZURE_WEBJOBS_STORAGE).ok();
        }

        Ok(app_config)
    }

    /// Base URL for objects served by this process itself.
    ///
    /// Falls back to `http://localhost:{port}/blobs` when not configured.
    #[must_use]
    pub fn public_base_url(&self) -> String {
        self.storage.public_base_url.clone().map_or_else(
            || format!("http://localhost:{}/blobs", self.server.port),
            |url| url.trim_end_matches('/').to_string(),
        )
    }
}
