//! Storage configuration types.

use std::fmt;
use std::path::PathBuf;

use super::error::StorageError;

/// Account name Azurite and the legacy storage emulator accept.
const DEV_STORAGE_ACCOUNT: &str = "devstoreaccount1";
/// Well-known, publicly documented key of the development storage account.
const DEV_STORAGE_KEY: &str =
    "Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==";
/// Blob endpoint of a locally running Azurite.
const DEV_STORAGE_ENDPOINT: &str = "http://127.0.0.1:10000/devstoreaccount1";

/// Storage provider configuration.
#[derive(Clone, PartialEq, Eq)]
pub enum StorageProvider {
    /// Azure Blob Storage (or Azurite).
    AzureBlob {
        /// Blob service endpoint, without trailing slash.
        endpoint: String,
        /// Azure storage account name.
        account: String,
        /// Azure storage access key.
        access_key: String,
    },
    /// Local filesystem (development only). Containers become subdirectories.
    LocalFs {
        /// Root directory path.
        root: PathBuf,
    },
    /// Process-local memory. Contents vanish with the process.
    Memory,
}

impl StorageProvider {
    /// Create Azure Blob Storage provider.
    #[must_use]
    pub fn azure_blob(
        endpoint: impl Into<String>,
        account: impl Into<String>,
        access_key: impl Into<String>,
    ) -> Self {
        Self::AzureBlob {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            account: account.into(),
            access_key: access_key.into(),
        }
    }

    /// Create local filesystem provider (development only).
    #[must_use]
    pub fn local_fs(root: impl Into<PathBuf>) -> Self {
        Self::LocalFs { root: root.into() }
    }

    /// Parse a connection string into a provider.
    ///
    /// Accepted forms:
    /// - `DefaultEndpointsProtocol=https;AccountName=..;AccountKey=..;EndpointSuffix=..`
    /// - the same with an explicit `BlobEndpoint=..`
    /// - `UseDevelopmentStorage=true` (Azurite on localhost)
    /// - `file:///path/to/root`
    /// - `memory://`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the string matches none of the forms
    /// or lacks the account name or key.
    pub fn from_connection_string(conn: &str) -> Result<Self, StorageError> {
        let conn = conn.trim();
        if conn.is_empty() {
            return Err(StorageError::configuration("empty connection string"));
        }
        if conn == "memory://" {
            return Ok(Self::Memory);
        }
        if let Some(root) = conn.strip_prefix("file://") {
            if root.is_empty() {
                return Err(StorageError::configuration("file:// requires a root path"));
            }
            return Ok(Self::local_fs(root));
        }

        let mut protocol = "https";
        let mut suffix = "core.windows.net";
        let mut account = None;
        let mut access_key = None;
        let mut blob_endpoint = None;

        for pair in conn.split(';').filter(|p| !p.trim().is_empty()) {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                StorageError::configuration("connection string segment is not key=value")
            })?;
            match key.trim() {
                "UseDevelopmentStorage" if value.eq_ignore_ascii_case("true") => {
                    return Ok(Self::azure_blob(
                        DEV_STORAGE_ENDPOINT,
                        DEV_STORAGE_ACCOUNT,
                        DEV_STORAGE_KEY,
                    ));
                }
                "DefaultEndpointsProtocol" => protocol = value,
                "EndpointSuffix" => suffix = value,
                "AccountName" => account = Some(value),
                "AccountKey" => access_key = Some(value),
                "BlobEndpoint" => blob_endpoint = Some(value),
                // Queue/table endpoints, SAS tokens and the like don't concern blobs.
                _ => {}
            }
        }

        let account = account
            .ok_or_else(|| StorageError::configuration("connection string missing AccountName"))?;
        let access_key = access_key
            .ok_or_else(|| StorageError::configuration("connection string missing AccountKey"))?;
        let endpoint = blob_endpoint.map_or_else(
            || format!("{protocol}://{account}.blob.{suffix}"),
            ToString::to_string,
        );

        Ok(Self::azure_blob(endpoint, account, access_key))
    }

    /// Get the provider name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::AzureBlob { .. } => "azure_blob",
            Self::LocalFs { .. } => "local",
            Self::Memory => "memory",
        }
    }

    /// Whether objects of this provider are only reachable through this
    /// process, so the HTTP layer has to serve them itself.
    #[must_use]
    pub fn is_served_locally(&self) -> bool {
        !matches!(self, Self::AzureBlob { .. })
    }
}

impl fmt::Debug for StorageProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AzureBlob {
                endpoint, account, ..
            } => f
                .debug_struct("AzureBlob")
                .field("endpoint", endpoint)
                .field("account", account)
                .field("access_key", &"<redacted>")
                .finish(),
            Self::LocalFs { root } => f.debug_struct("LocalFs").field("root", root).finish(),
            Self::Memory => f.write_str("Memory"),
        }
    }
}

/// The two logical containers the service writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    /// Uploaded originals, stored byte-for-byte.
    Originals,
    /// Generated JPEG thumbnails.
    Thumbnails,
}

/// Storage service configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Storage provider configuration.
    pub provider: StorageProvider,
    /// Container name for originals.
    pub originals_container: String,
    /// Container name for thumbnails.
    pub thumbnails_container: String,
    /// Base URL for locally served providers, without trailing slash.
    pub public_base_url: String,
}

impl StorageConfig {
    /// Default originals container.
    pub const DEFAULT_ORIGINALS_CONTAINER: &'static str = "originalimages";
    /// Default thumbnails container.
    pub const DEFAULT_THUMBNAILS_CONTAINER: &'static str = "thumbnails";
    /// Default base URL for locally served providers.
    pub const DEFAULT_PUBLIC_BASE_URL: &'static str = "http://localhost:8080/blobs";

    /// Create a new storage config with default settings.
    #[must_use]
    pub fn new(provider: StorageProvider) -> Self {
        Self {
            provider,
            originals_container: Self::DEFAULT_ORIGINALS_CONTAINER.to_string(),
            thumbnails_container: Self::DEFAULT_THUMBNAILS_CONTAINER.to_string(),
            public_base_url: Self::DEFAULT_PUBLIC_BASE_URL.to_string(),
        }
    }

    /// Set container names.
    #[must_use]
    pub fn with_containers(
        mut self,
        originals: impl Into<String>,
        thumbnails: impl Into<String>,
    ) -> Self {
        self.originals_container = originals.into();
        self.thumbnails_container = thumbnails.into();
        self
    }

    /// Set the base URL locally served objects are reachable under.
    #[must_use]
    pub fn with_public_base_url(mut self, url: impl Into<String>) -> Self {
        self.public_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the configured name of a container.
    #[must_use]
    pub fn container_name(&self, container: Container) -> &str {
        match container {
            Container::Originals => &self.originals_container,
            Container::Thumbnails => &self.thumbnails_container,
        }
    }

    /// Resolve a configured container name back to its logical container.
    #[must_use]
    pub fn container_by_name(&self, name: &str) -> Option<Container> {
        if name == self.originals_container {
            Some(Container::Originals)
        } else if name == self.thumbnails_container {
            Some(Container::Thumbnails)
        } else {
            None
        }
    }
}
