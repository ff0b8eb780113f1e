//! Shared configuration and error types for Thumbnailer.
//!
//! This crate provides the pieces every other crate agrees on:
//! - Application configuration (server, storage)
//! - The caller-visible error taxonomy and its HTTP status mapping

pub mod config;
pub mod error;

pub use config::{AppConfig, ServerConfig, StorageSettings};
pub use error::AppError;
