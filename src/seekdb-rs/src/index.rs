use crate::request::{encode_segment, HttpRequest};
use crate::Result;
use seekdb_core::{IndexInfo, IndexUpdate, Schema, Update, UpdateStatus};

/// Handle to one index on the server.
///
/// Holds only the immutable (base URL, API key, uid) triple; no server
/// state is cached and every accessor is a live round trip. The handle
/// stays usable after the backing index is deleted; from that point every
/// operation surfaces the server's 404.
#[derive(Debug, Clone)]
pub struct Index {
    uid: String,
    request: HttpRequest,
}

impl Index {
    pub(crate) fn new(uid: impl Into<String>, request: HttpRequest) -> Self {
        Self {
            uid: uid.into(),
            request,
        }
    }

    /// The uid this handle is bound to.
    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub(crate) fn request(&self) -> &HttpRequest {
        &self.request
    }

    pub(crate) fn path(&self, suffix: &str) -> String {
        format!("/indexes/{}{}", encode_segment(&self.uid), suffix)
    }

    /// Fetch this index's metadata.
    pub async fn show(&self) -> Result<IndexInfo> {
        self.request.get(&self.path("")).await
    }

    /// Alias for [`show`](Self::show).
    #[inline]
    pub async fn show_index(&self) -> Result<IndexInfo> {
        self.show().await
    }

    /// Current name of the index (live lookup, not cached).
    pub async fn name(&self) -> Result<String> {
        Ok(self.show().await?.name)
    }

    /// Current identifier field of the index, if one has been established.
    pub async fn identifier(&self) -> Result<Option<String>> {
        Ok(self.show().await?.identifier)
    }

    /// Apply a partial metadata update.
    ///
    /// Only the supplied fields change. Assigning an identifier when one
    /// is already defined is refused by the server with a 400.
    pub async fn update(&self, changes: &IndexUpdate) -> Result<IndexInfo> {
        self.request.patch(&self.path(""), changes).await
    }

    /// Rename the index.
    pub async fn update_name(&self, name: impl Into<String>) -> Result<IndexInfo> {
        self.update(&IndexUpdate {
            name: Some(name.into()),
            ..Default::default()
        })
        .await
    }

    /// Alias for [`update_name`](Self::update_name).
    #[inline]
    pub async fn update_index_name(&self, name: impl Into<String>) -> Result<IndexInfo> {
        self.update_name(name).await
    }

    /// The index's document schema, or `None` when no schema is set yet.
    pub async fn schema(&self) -> Result<Option<Schema>> {
        self.request.get(&self.path("/schema")).await
    }

    /// Alias for [`schema`](Self::schema).
    #[inline]
    pub async fn get_schema(&self) -> Result<Option<Schema>> {
        self.schema().await
    }

    /// Replace the index's schema. Applied asynchronously server-side.
    pub async fn update_schema(&self, schema: &Schema) -> Result<Update> {
        self.request.put(&self.path("/schema"), schema).await
    }

    /// Alias for [`update_schema`](Self::update_schema).
    #[inline]
    pub async fn update_index_schema(&self, schema: &Schema) -> Result<Update> {
        self.update_schema(schema).await
    }

    /// Delete the index.
    ///
    /// The handle is not invalidated locally; repeating this (or any other
    /// call) afterwards fails with the server's 404.
    pub async fn delete(&self) -> Result<()> {
        self.request.delete(&self.path("")).await
    }

    /// Alias for [`delete`](Self::delete).
    #[inline]
    pub async fn delete_index(&self) -> Result<()> {
        self.delete().await
    }

    /// Status of one asynchronous update previously acknowledged with an
    /// [`Update`] handle.
    pub async fn get_update_status(&self, update_id: u64) -> Result<UpdateStatus> {
        self.request
            .get(&self.path(&format!("/updates/{update_id}")))
            .await
    }

    /// Statuses of all updates enqueued for this index.
    pub async fn get_all_update_status(&self) -> Result<Vec<UpdateStatus>> {
        self.request.get(&self.path("/updates")).await
    }
}
