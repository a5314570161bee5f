//! SeekDb Client Library
//!
//! HTTP client for the SeekDb search engine REST API: index management,
//! settings configuration, document CRUD and search queries.
//!
//! All state lives on the server; [`Client`] and [`Index`] are parameter
//! bundles over (base URL, API key, uid) and every accessor is a live
//! round trip.
//!
//! ```no_run
//! use seekdb_rs::Client;
//!
//! # async fn run() -> seekdb_rs::Result<()> {
//! let client = Client::with_api_key("http://localhost:7700", "masterKey");
//! let index = client.create_index("movies").await?;
//! index
//!     .add_document(&serde_json::json!({ "objectId": 1, "title": "Carol" }))
//!     .await?;
//! let results = index.search::<serde_json::Value>("carol").await?;
//! println!("{} hits", results.hits.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod documents;
mod index;
mod request;
mod search;
mod settings;

pub use client::{Client, ClientBuilder};
pub use index::Index;
pub use seekdb_core::{
    DocumentsQuery, ErrorResponse, IndexInfo, IndexSelector, IndexSpec, IndexStats, IndexUpdate,
    Keys, Schema, SearchQuery, SearchResults, ServerStats, Settings, StopWords, Update,
    UpdateState, UpdateStatus, Version,
};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    /// Raised locally, before any request is sent, when an index selector
    /// names an index that does not exist
    #[error("no index found with name \"{name}\"")]
    IndexResolution { name: String },
}

impl ClientError {
    /// Status code of the failed response, when the error carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            ClientError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
