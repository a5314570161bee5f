//! SeekDb Core Library
//!
//! This crate provides the wire types shared across the SeekDb client, including:
//! - Index metadata, creation specs and selectors
//! - The seven-field settings aggregate and its defaults
//! - Asynchronous update handles and statuses
//! - Search and document-browsing request/response shapes
//! - API key and server stats payloads

pub mod models;
pub mod settings;

// Re-export commonly used types
pub use models::*;
pub use settings::{Settings, StopWords};
