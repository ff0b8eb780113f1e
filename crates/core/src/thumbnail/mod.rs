//! Thumbnail generation pipeline.
//!
//! This module provides:
//! - Bounding-box resizing and JPEG re-encoding
//! - Object naming that pairs each thumbnail with its original
//! - The service that decodes, renders and stores both images

mod error;
mod naming;
mod render;
mod service;
mod types;

pub use error::ThumbnailError;
pub use naming::{THUMBNAIL_PREFIX, original_object_name, thumbnail_object_name};
pub use render::{JPEG_QUALITY, THUMBNAIL_MAX_DIMENSION, bounded_dimensions, render_thumbnail};
pub use service::ThumbnailService;
pub use types::{GeneratedThumbnail, StoredObject, Thumbnail, UploadedImage};
