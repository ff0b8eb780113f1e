//! Core logic for Thumbnailer.
//!
//! This crate holds everything between the HTTP boundary and the object
//! store, with no web framework dependencies.
//!
//! # Modules
//!
//! - `storage` - Vendor-agnostic object storage for originals and thumbnails
//! - `thumbnail` - Decoding, resizing, naming and the generate pipeline

pub mod storage;
pub mod thumbnail;
