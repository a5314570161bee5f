//! Document operations on an index.
//!
//! Ingestion is asynchronous: the server acknowledges with an update
//! handle and applies the batch in the background. While the index's
//! `acceptNewFields` setting is on, fields seen for the first time are
//! auto-registered as searchable and displayed; a document missing the
//! index's identifier field is rejected during processing and the update
//! status comes back `failed`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::index::Index;
use crate::request::{encode_segment, query_string};
use crate::Result;
use seekdb_core::{DocumentsQuery, Update};

impl Index {
    /// Add a batch of documents.
    pub async fn add_documents<T: Serialize>(&self, documents: &[T]) -> Result<Update> {
        self.request()
            .post(&self.path("/documents"), documents)
            .await
    }

    /// Add a single document (a one-element batch on the wire).
    pub async fn add_document<T: Serialize>(&self, document: &T) -> Result<Update> {
        self.add_documents(std::slice::from_ref(document)).await
    }

    /// Replace existing documents, matched on the identifier field.
    pub async fn update_documents<T: Serialize>(&self, documents: &[T]) -> Result<Update> {
        self.request().put(&self.path("/documents"), documents).await
    }

    /// Fetch one document by its identifier-field value.
    pub async fn document<T: DeserializeOwned>(&self, document_id: impl AsRef<str>) -> Result<T> {
        let path = self.path(&format!(
            "/documents/{}",
            encode_segment(document_id.as_ref())
        ));
        self.request().get(&path).await
    }

    /// Alias for [`document`](Self::document).
    #[inline]
    pub async fn get_document<T: DeserializeOwned>(
        &self,
        document_id: impl AsRef<str>,
    ) -> Result<T> {
        self.document(document_id).await
    }

    /// Browse documents with pagination and projection options.
    pub async fn documents<T: DeserializeOwned>(&self, query: &DocumentsQuery) -> Result<Vec<T>> {
        let mut pairs = Vec::new();
        if let Some(offset) = query.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(limit) = query.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(attributes) = &query.attributes_to_retrieve {
            pairs.push(("attributesToRetrieve", attributes.join(",")));
        }

        let path = if pairs.is_empty() {
            self.path("/documents")
        } else {
            self.path(&format!("/documents?{}", query_string(pairs)))
        };
        self.request().get(&path).await
    }

    /// Alias for [`documents`](Self::documents).
    #[inline]
    pub async fn get_documents<T: DeserializeOwned>(
        &self,
        query: &DocumentsQuery,
    ) -> Result<Vec<T>> {
        self.documents(query).await
    }

    /// Delete one document by its identifier-field value.
    pub async fn delete_document(&self, document_id: impl AsRef<str>) -> Result<Update> {
        let path = self.path(&format!(
            "/documents/{}",
            encode_segment(document_id.as_ref())
        ));
        self.request().delete(&path).await
    }

    /// Delete a batch of documents by identifier-field values.
    pub async fn delete_documents<S: Serialize>(&self, document_ids: &[S]) -> Result<Update> {
        self.request()
            .post(&self.path("/documents/delete-batch"), document_ids)
            .await
    }

    /// Delete every document in the index.
    pub async fn delete_all_documents(&self) -> Result<Update> {
        self.request().delete(&self.path("/documents")).await
    }
}
