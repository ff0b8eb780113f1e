//! Thumbnail pipeline types.

use bytes::Bytes;

use crate::storage::Container;

/// An image as received from the caller, alive for one request.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Original filename as declared by the client.
    pub filename: String,
    /// Declared MIME type, if the client sent one.
    pub content_type: Option<String>,
    /// Raw file bytes.
    pub data: Bytes,
}

impl UploadedImage {
    /// Create a new uploaded image.
    #[must_use]
    pub fn new(filename: impl Into<String>, content_type: Option<String>, data: Bytes) -> Self {
        Self {
            filename: filename.into(),
            content_type,
            data,
        }
    }

    /// Whether the upload carries no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Size of the upload in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }
}

/// A rendered, JPEG-encoded thumbnail.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    /// JPEG bytes.
    pub data: Bytes,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// An object written to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Container the object lives in.
    pub container: Container,
    /// Object name within the container.
    pub name: String,
    /// Retrieval URL.
    pub url: String,
}

/// Outcome of a successful thumbnail generation.
#[derive(Debug, Clone)]
pub struct GeneratedThumbnail {
    /// The stored original.
    pub original: StoredObject,
    /// The stored thumbnail.
    pub thumbnail: StoredObject,
    /// Thumbnail width in pixels.
    pub width: u32,
    /// Thumbnail height in pixels.
    pub height: u32,
}
