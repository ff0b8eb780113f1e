//! Client for the thumbnail service.
//!
//! This crate provides:
//! - Local image selection with an extension filter and a local decode
//! - Multipart upload to the service and parsing of the returned URLs
//! - Fetching the generated thumbnail for a local preview
//! - Plain-text rendering of results and failures

pub mod client;
pub mod error;
pub mod report;
pub mod selection;

pub use client::{DEFAULT_ENDPOINT, Preview, ThumbnailClient, ThumbnailUrls};
pub use error::{ClientError, ClientResult};
pub use selection::{ACCEPTED_EXTENSIONS, ImageSelection};
