//! Object storage for originals and thumbnails using Apache OpenDAL.
//!
//! This module provides vendor-agnostic object storage with support for:
//! - Azure Blob Storage (and Azurite for development)
//! - Local filesystem (development only)
//! - Process memory (tests)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Apache OpenDAL                              │
//! │                   (Unified Storage API)                          │
//! ├────────────────────────────────┬────────────────────────────────┤
//! │ originals operator             │ thumbnails operator            │
//! │ op.write / op.read / op.delete │ op.write / op.read / op.delete │
//! └────────────────────────────────┴────────────────────────────────┘
//! ```

mod config;
mod error;
mod service;

pub use config::{Container, StorageConfig, StorageProvider};
pub use error::StorageError;
pub use service::{BlobStore, ObjectStorage};
