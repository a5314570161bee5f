use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Index schema: document field name mapped to its attribute flags
/// (`displayed`, `indexed`, `identifier`, `ranked`).
pub type Schema = HashMap<String, Vec<String>>;

/// Index metadata as held by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexInfo {
    pub name: String,
    pub uid: String,
    /// Primary-key field for documents, once one has been established
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// IndexSpec is the canonical index-creation request.
///
/// A bare `&str`/`String` converts into a name-only spec, so callers can
/// write `create_index("movies")` as well as spell out uid and schema.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSpec {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

impl IndexSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uid: None,
            schema: None,
        }
    }

    /// Request a specific uid instead of a server-assigned one
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Create the index with a schema already in place
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }
}

impl From<&str> for IndexSpec {
    fn from(name: &str) -> Self {
        IndexSpec::new(name)
    }
}

impl From<String> for IndexSpec {
    fn from(name: String) -> Self {
        IndexSpec::new(name)
    }
}

/// How a caller refers to an existing index.
///
/// A bare `&str`/`String` converts into `Uid`. Name-based selection is
/// resolved against the server listing; names are not guaranteed unique,
/// so the first match in listing order wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexSelector {
    /// Exact uid; resolved locally without a server call
    Uid(String),
    /// Index name; resolved to the first matching uid in listing order
    Name(String),
}

impl IndexSelector {
    pub fn uid(uid: impl Into<String>) -> Self {
        IndexSelector::Uid(uid.into())
    }

    pub fn name(name: impl Into<String>) -> Self {
        IndexSelector::Name(name.into())
    }
}

impl From<&str> for IndexSelector {
    fn from(uid: &str) -> Self {
        IndexSelector::Uid(uid.to_string())
    }
}

impl From<String> for IndexSelector {
    fn from(uid: String) -> Self {
        IndexSelector::Uid(uid)
    }
}

/// Partial index-metadata update.
///
/// Only the supplied fields are sent. The identifier field is immutable
/// once set; the server refuses a second assignment with a 400.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

/// Acknowledgement token for an asynchronous server-side update.
///
/// The server applies mutations in the background; poll
/// `get_update_status` with this id to observe completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Update {
    pub update_id: u64,
}

/// Lifecycle states of an asynchronous update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateState {
    Enqueued,
    Processed,
    Failed,
}

/// Status of one asynchronous update as reported by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatus {
    pub status: UpdateState,
    pub update_id: u64,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub update_type: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enqueued_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
    /// Failure detail when `status` is `failed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The two API key roles exposed by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keys {
    pub private: String,
    pub public: String,
}

/// Server build information
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub commit_sha: String,
    pub build_date: String,
    pub pkg_version: String,
}

/// Per-index stats
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub number_of_documents: u64,
    pub is_indexing: bool,
    #[serde(default)]
    pub fields_frequency: HashMap<String, u64>,
}

/// Whole-server stats, keyed by index uid
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStats {
    pub database_size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub indexes: HashMap<String, IndexStats>,
}

/// ErrorResponse is the error payload returned with non-2xx statuses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

/// Search parameters for `GET /indexes/{uid}/search`.
///
/// A bare `&str`/`String` converts into a query with default options.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub q: String,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
    pub attributes_to_retrieve: Option<Vec<String>>,
    pub attributes_to_crop: Option<Vec<String>>,
    pub crop_length: Option<usize>,
    pub attributes_to_highlight: Option<Vec<String>>,
    pub filters: Option<String>,
    pub matches: bool,
}

impl SearchQuery {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            offset: None,
            limit: None,
            attributes_to_retrieve: None,
            attributes_to_crop: None,
            crop_length: None,
            attributes_to_highlight: None,
            filters: None,
            matches: false,
        }
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_attributes_to_retrieve<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes_to_retrieve = Some(attributes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_attributes_to_crop<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes_to_crop = Some(attributes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_crop_length(mut self, crop_length: usize) -> Self {
        self.crop_length = Some(crop_length);
        self
    }

    pub fn with_attributes_to_highlight<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes_to_highlight = Some(attributes.into_iter().map(Into::into).collect());
        self
    }

    /// Attribute filter expression evaluated server-side, e.g. `title:Carol`
    pub fn with_filters(mut self, filters: impl Into<String>) -> Self {
        self.filters = Some(filters.into());
        self
    }

    /// Ask the server to report match positions alongside each hit
    pub fn with_matches(mut self, matches: bool) -> Self {
        self.matches = matches;
        self
    }
}

impl From<&str> for SearchQuery {
    fn from(q: &str) -> Self {
        SearchQuery::new(q)
    }
}

impl From<String> for SearchQuery {
    fn from(q: String) -> Self {
        SearchQuery::new(q)
    }
}

/// SearchResults is the server's answer to a search query
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults<T> {
    pub hits: Vec<T>,
    pub offset: usize,
    pub limit: usize,
    pub processing_time_ms: u64,
    pub query: String,
}

/// Pagination and projection options for browsing documents
#[derive(Debug, Clone, Default)]
pub struct DocumentsQuery {
    pub offset: Option<usize>,
    pub limit: Option<usize>,
    pub attributes_to_retrieve: Option<Vec<String>>,
}

impl DocumentsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_attributes_to_retrieve<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes_to_retrieve = Some(attributes.into_iter().map(Into::into).collect());
        self
    }
}
