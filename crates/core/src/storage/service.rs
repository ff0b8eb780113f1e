//! Object storage implementation using Apache OpenDAL.

use std::future::Future;

use bytes::Bytes;
use opendal::{ErrorKind, Operator, services};

use super::config::{Container, StorageConfig, StorageProvider};
use super::error::StorageError;

/// Write side of the object store as the thumbnail pipeline sees it.
///
/// `put` overwrites unconditionally and returns the retrieval URL of the
/// written object.
pub trait BlobStore: Send + Sync {
    /// Write `data` under `name` in `container`, replacing any existing object.
    fn put(
        &self,
        container: Container,
        name: &str,
        data: Bytes,
    ) -> impl Future<Output = Result<String, StorageError>> + Send;

    /// Remove `name` from `container`. Removing a missing object succeeds.
    fn delete(
        &self,
        container: Container,
        name: &str,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;
}

/// OpenDAL-backed object storage with one operator per container.
pub struct ObjectStorage {
    originals: Operator,
    thumbnails: Operator,
    config: StorageConfig,
}

impl ObjectStorage {
    /// Create a new object storage from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage provider cannot be initialized.
    pub fn from_config(config: StorageConfig) -> Result<Self, StorageError> {
        let originals = Self::create_operator(&config.provider, &config.originals_container)?;
        let thumbnails = Self::create_operator(&config.provider, &config.thumbnails_container)?;
        Ok(Self {
            originals,
            thumbnails,
            config,
        })
    }

    /// Create OpenDAL operator for one container.
    fn create_operator(
        provider: &StorageProvider,
        container: &str,
    ) -> Result<Operator, StorageError> {
        if container.is_empty() || container.contains('/') {
            return Err(StorageError::configuration(format!(
                "invalid container name: '{container}'"
            )));
        }

        let operator = match provider {
            StorageProvider::AzureBlob {
                endpoint,
                account,
                access_key,
            } => {
                let builder = services::Azblob::default()
                    .endpoint(endpoint)
                    .account_name(account)
                    .account_key(access_key)
                    .container(container);
                Operator::new(builder).map_err(configuration_error)?.finish()
            }
            StorageProvider::LocalFs { root } => {
                let root = root.join(container);
                let builder = services::Fs::default().root(
                    root.to_str()
                        .ok_or_else(|| StorageError::configuration("invalid path"))?,
                );
                Operator::new(builder).map_err(configuration_error)?.finish()
            }
            StorageProvider::Memory => Operator::new(services::Memory::default())
                .map_err(configuration_error)?
                .finish(),
        };

        Ok(operator)
    }

    fn operator(&self, container: Container) -> &Operator {
        match container {
            Container::Originals => &self.originals,
            Container::Thumbnails => &self.thumbnails,
        }
    }

    /// Retrieval URL of an object.
    ///
    /// Azure objects live under the blob endpoint; local providers under the
    /// configured public base URL.
    #[must_use]
    pub fn url_for(&self, container: Container, name: &str) -> String {
        let base = match &self.config.provider {
            StorageProvider::AzureBlob { endpoint, .. } => endpoint.as_str(),
            StorageProvider::LocalFs { .. } | StorageProvider::Memory => {
                self.config.public_base_url.as_str()
            }
        };
        format!("{base}/{}/{name}", self.config.container_name(container))
    }

    /// Read an object's bytes.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the object does not exist or the name could
    /// never have been written.
    pub async fn get(&self, container: Container, name: &str) -> Result<Bytes, StorageError> {
        if check_name(name).is_err() {
            return Err(StorageError::not_found(name));
        }
        let buffer = self
            .operator(container)
            .read(name)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => StorageError::not_found(name),
                _ => StorageError::from(e),
            })?;
        Ok(buffer.to_bytes())
    }

    /// List object names in a container.
    ///
    /// # Errors
    ///
    /// Returns an error if listing fails.
    pub async fn list(&self, container: Container) -> Result<Vec<String>, StorageError> {
        let entries = match self.operator(container).list("/").await {
            Ok(entries) => entries,
            // A filesystem container that never received a write has no directory yet.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names: Vec<String> = entries
            .into_iter()
            .filter(|entry| entry.metadata().is_file())
            .map(|entry| entry.name().to_string())
            .collect();
        names.sort();
        Ok(names)
    }

    /// Get the storage provider name.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.config.provider.name()
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }
}

impl BlobStore for ObjectStorage {
    async fn put(
        &self,
        container: Container,
        name: &str,
        data: Bytes,
    ) -> Result<String, StorageError> {
        check_name(name)?;
        self.operator(container).write(name, data).await?;
        Ok(self.url_for(container, name))
    }

    async fn delete(&self, container: Container, name: &str) -> Result<(), StorageError> {
        check_name(name)?;
        Ok(self.operator(container).delete(name).await?)
    }
}

fn configuration_error(err: opendal::Error) -> StorageError {
    StorageError::configuration(err.to_string())
}

/// Object names are flat: no empty names, no directory components.
fn check_name(name: &str) -> Result<(), StorageError> {
    if name.is_empty() || name.contains('/') || name.contains('\\') || name == ".." {
        return Err(StorageError::InvalidName(name.to_string()));
    }
    Ok(())
}
