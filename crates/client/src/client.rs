//! HTTP client for the thumbnail service.

use image::GenericImageView;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ClientError, ClientResult};
use crate::selection::ImageSelection;

/// Multipart field the service reads the upload from.
const FILE_FIELD: &str = "file";

/// Default service endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api/thumbnail";

/// URLs returned by a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThumbnailUrls {
    /// URL of the stored original.
    pub original_url: String,
    /// URL of the stored thumbnail.
    pub thumbnail_url: String,
}

/// A fetched thumbnail, decoded for display.
#[derive(Debug, Clone)]
pub struct Preview {
    /// JPEG bytes as served.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Client bound to one service endpoint.
#[derive(Debug, Clone)]
pub struct ThumbnailClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ThumbnailClient {
    /// Create a client for `endpoint`.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Upload an image and return the stored object URLs.
    ///
    /// # Errors
    ///
    /// `Service` carries the status and body of a non-200 answer; `Transport`
    /// means no answer was received.
    pub async fn upload(&self, selection: &ImageSelection) -> ClientResult<ThumbnailUrls> {
        let part = Part::bytes(selection.data.clone())
            .file_name(selection.filename.clone())
            .mime_str(selection.content_type)?;
        let form = Form::new().part(FILE_FIELD, part);

        debug!(
            endpoint = %self.endpoint,
            filename = %selection.filename,
            size = selection.data.len(),
            "Uploading image"
        );

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(ClientError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Download the thumbnail at `url` and decode it.
    ///
    /// # Errors
    ///
    /// Returns an error if the download fails or the bytes do not decode.
    pub async fn fetch_preview(&self, url: &str) -> ClientResult<Preview> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(ClientError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let data = response.bytes().await?.to_vec();
        let (width, height) = image::load_from_memory(&data)?.dimensions();
        Ok(Preview {
            data,
            width,
            height,
        })
    }
}

impl Default for ThumbnailClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
