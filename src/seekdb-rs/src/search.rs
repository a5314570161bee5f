//! Search queries against an index.

use serde::de::DeserializeOwned;

use crate::index::Index;
use crate::request::query_string;
use crate::Result;
use seekdb_core::{SearchQuery, SearchResults};

fn query_pairs(query: &SearchQuery) -> Vec<(&'static str, String)> {
    let mut pairs = vec![("q", query.q.clone())];
    if let Some(offset) = query.offset {
        pairs.push(("offset", offset.to_string()));
    }
    if let Some(limit) = query.limit {
        pairs.push(("limit", limit.to_string()));
    }
    if let Some(attributes) = &query.attributes_to_retrieve {
        pairs.push(("attributesToRetrieve", attributes.join(",")));
    }
    if let Some(attributes) = &query.attributes_to_crop {
        pairs.push(("attributesToCrop", attributes.join(",")));
    }
    if let Some(crop_length) = query.crop_length {
        pairs.push(("cropLength", crop_length.to_string()));
    }
    if let Some(attributes) = &query.attributes_to_highlight {
        pairs.push(("attributesToHighlight", attributes.join(",")));
    }
    if let Some(filters) = &query.filters {
        pairs.push(("filters", filters.clone()));
    }
    if query.matches {
        pairs.push(("matches", "true".to_string()));
    }
    pairs
}

impl Index {
    /// Run a search query and decode each hit as `T`.
    ///
    /// A bare `&str` works as the whole query; use [`SearchQuery`] for
    /// pagination, projection, cropping, highlighting and filters.
    pub async fn search<T: DeserializeOwned>(
        &self,
        query: impl Into<SearchQuery>,
    ) -> Result<SearchResults<T>> {
        let query = query.into();
        let path = self.path(&format!("/search?{}", query_string(query_pairs(&query))));
        self.request().get(&path).await
    }
}
