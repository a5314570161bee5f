//! Settings sub-resource of an index.
//!
//! One aggregate endpoint plus seven per-field sub-paths, each
//! independently readable, updatable and resettable. Every mutation is
//! acknowledged with an [`Update`] handle and applied asynchronously
//! server-side; callers needing confirmation poll
//! [`Index::get_update_status`](crate::Index::get_update_status).

use std::collections::HashMap;

use crate::index::Index;
use crate::Result;
use seekdb_core::{Settings, StopWords, Update};

impl Index {
    /// Fetch all seven settings fields.
    pub async fn settings(&self) -> Result<Settings> {
        self.request().get(&self.path("/settings")).await
    }

    /// Alias for [`settings`](Self::settings).
    #[inline]
    pub async fn get_settings(&self) -> Result<Settings> {
        self.settings().await
    }

    /// Update the supplied settings fields and only those.
    ///
    /// The aggregate endpoint merges: fields left unset in `settings` are
    /// not serialized and keep their server-held values. This is never a
    /// full overwrite.
    pub async fn update_settings(&self, settings: &Settings) -> Result<Update> {
        self.request().post(&self.path("/settings"), settings).await
    }

    /// Reset every settings field to its default simultaneously.
    pub async fn reset_settings(&self) -> Result<Update> {
        self.request().delete(&self.path("/settings")).await
    }

    // Sub-resource: ranking rules

    pub async fn ranking_rules(&self) -> Result<Vec<String>> {
        self.request().get(&self.path("/settings/ranking-rules")).await
    }

    /// Alias for [`ranking_rules`](Self::ranking_rules).
    #[inline]
    pub async fn get_ranking_rules(&self) -> Result<Vec<String>> {
        self.ranking_rules().await
    }

    /// Replace the ordered ranking-rule list.
    pub async fn update_ranking_rules<I, S>(&self, ranking_rules: I) -> Result<Update>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rules: Vec<String> = ranking_rules.into_iter().map(Into::into).collect();
        self.request()
            .post(&self.path("/settings/ranking-rules"), &rules)
            .await
    }

    pub async fn reset_ranking_rules(&self) -> Result<Update> {
        self.request()
            .delete(&self.path("/settings/ranking-rules"))
            .await
    }

    // Sub-resource: distinct attribute

    pub async fn distinct_attribute(&self) -> Result<Option<String>> {
        self.request()
            .get(&self.path("/settings/distinct-attribute"))
            .await
    }

    /// Alias for [`distinct_attribute`](Self::distinct_attribute).
    #[inline]
    pub async fn get_distinct_attribute(&self) -> Result<Option<String>> {
        self.distinct_attribute().await
    }

    pub async fn update_distinct_attribute(
        &self,
        distinct_attribute: impl Into<String>,
    ) -> Result<Update> {
        self.request()
            .post(
                &self.path("/settings/distinct-attribute"),
                &distinct_attribute.into(),
            )
            .await
    }

    pub async fn reset_distinct_attribute(&self) -> Result<Update> {
        self.request()
            .delete(&self.path("/settings/distinct-attribute"))
            .await
    }

    // Sub-resource: searchable attributes

    pub async fn searchable_attributes(&self) -> Result<Option<Vec<String>>> {
        self.request()
            .get(&self.path("/settings/searchable-attributes"))
            .await
    }

    /// Alias for [`searchable_attributes`](Self::searchable_attributes).
    #[inline]
    pub async fn get_searchable_attributes(&self) -> Result<Option<Vec<String>>> {
        self.searchable_attributes().await
    }

    pub async fn update_searchable_attributes<I, S>(&self, attributes: I) -> Result<Update>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let attributes: Vec<String> = attributes.into_iter().map(Into::into).collect();
        self.request()
            .post(&self.path("/settings/searchable-attributes"), &attributes)
            .await
    }

    pub async fn reset_searchable_attributes(&self) -> Result<Update> {
        self.request()
            .delete(&self.path("/settings/searchable-attributes"))
            .await
    }

    // Sub-resource: displayed attributes

    pub async fn displayed_attributes(&self) -> Result<Option<Vec<String>>> {
        self.request()
            .get(&self.path("/settings/displayed-attributes"))
            .await
    }

    /// Alias for [`displayed_attributes`](Self::displayed_attributes).
    #[inline]
    pub async fn get_displayed_attributes(&self) -> Result<Option<Vec<String>>> {
        self.displayed_attributes().await
    }

    pub async fn update_displayed_attributes<I, S>(&self, attributes: I) -> Result<Update>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let attributes: Vec<String> = attributes.into_iter().map(Into::into).collect();
        self.request()
            .post(&self.path("/settings/displayed-attributes"), &attributes)
            .await
    }

    pub async fn reset_displayed_attributes(&self) -> Result<Update> {
        self.request()
            .delete(&self.path("/settings/displayed-attributes"))
            .await
    }

    // Sub-resource: stop words

    pub async fn stop_words(&self) -> Result<Vec<String>> {
        self.request().get(&self.path("/settings/stop-words")).await
    }

    /// Alias for [`stop_words`](Self::stop_words).
    #[inline]
    pub async fn get_stop_words(&self) -> Result<Vec<String>> {
        self.stop_words().await
    }

    /// Replace the stop-word list. A single word is accepted and coerced
    /// into a one-element list.
    pub async fn update_stop_words(&self, stop_words: impl Into<StopWords>) -> Result<Update> {
        let words = stop_words.into().into_vec();
        self.request()
            .post(&self.path("/settings/stop-words"), &words)
            .await
    }

    pub async fn reset_stop_words(&self) -> Result<Update> {
        self.request()
            .delete(&self.path("/settings/stop-words"))
            .await
    }

    // Sub-resource: synonyms

    pub async fn synonyms(&self) -> Result<HashMap<String, Vec<String>>> {
        self.request().get(&self.path("/settings/synonyms")).await
    }

    /// Alias for [`synonyms`](Self::synonyms).
    #[inline]
    pub async fn get_synonyms(&self) -> Result<HashMap<String, Vec<String>>> {
        self.synonyms().await
    }

    pub async fn update_synonyms(&self, synonyms: &HashMap<String, Vec<String>>) -> Result<Update> {
        self.request()
            .post(&self.path("/settings/synonyms"), synonyms)
            .await
    }

    pub async fn reset_synonyms(&self) -> Result<Update> {
        self.request().delete(&self.path("/settings/synonyms")).await
    }

    // Sub-resource: accept new fields

    pub async fn accept_new_fields(&self) -> Result<bool> {
        self.request()
            .get(&self.path("/settings/accept-new-fields"))
            .await
    }

    /// Alias for [`accept_new_fields`](Self::accept_new_fields).
    #[inline]
    pub async fn get_accept_new_fields(&self) -> Result<bool> {
        self.accept_new_fields().await
    }

    pub async fn update_accept_new_fields(&self, accept_new_fields: bool) -> Result<Update> {
        self.request()
            .post(&self.path("/settings/accept-new-fields"), &accept_new_fields)
            .await
    }

    pub async fn reset_accept_new_fields(&self) -> Result<Update> {
        self.request()
            .delete(&self.path("/settings/accept-new-fields"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Client;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn handle(server: &MockServer) -> Index {
        Client::new(server.uri()).index("movies_prod").await.unwrap()
    }

    fn ack(update_id: u64) -> ResponseTemplate {
        ResponseTemplate::new(202).set_body_json(serde_json::json!({ "updateId": update_id }))
    }

    #[tokio::test]
    async fn test_settings_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/indexes/movies_prod/settings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "rankingRules": ["typo", "words", "proximity", "attribute", "wordsPosition", "exactness"],
                "distinctAttribute": null,
                "searchableAttributes": null,
                "displayedAttributes": null,
                "stopWords": [],
                "synonyms": {},
                "acceptNewFields": true
            })))
            .mount(&server)
            .await;

        let index = handle(&server).await;
        let settings = index.settings().await.unwrap();
        assert_eq!(settings, Settings::server_defaults());
        assert_eq!(
            settings.ranking_rules.unwrap(),
            Settings::default_ranking_rules()
        );
    }

    #[tokio::test]
    async fn test_update_settings_serializes_only_supplied_keys() {
        let server = MockServer::start().await;
        // The merge contract at the wire level: a stop-words-only update
        // must not mention any other settings key
        Mock::given(method("POST"))
            .and(path("/indexes/movies_prod/settings"))
            .and(body_json(serde_json::json!({ "stopWords": ["the"] })))
            .respond_with(ack(12))
            .expect(1)
            .mount(&server)
            .await;

        let index = handle(&server).await;
        let update = index
            .update_settings(&Settings::new().with_stop_words("the"))
            .await
            .unwrap();
        assert_eq!(update.update_id, 12);
    }

    #[tokio::test]
    async fn test_update_settings_multiple_fields_at_once() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/indexes/movies_prod/settings"))
            .and(body_json(serde_json::json!({
                "rankingRules": ["asc(title)", "typo"],
                "distinctAttribute": "title"
            })))
            .respond_with(ack(13))
            .mount(&server)
            .await;

        let index = handle(&server).await;
        let update = index
            .update_settings(
                &Settings::new()
                    .with_ranking_rules(["asc(title)", "typo"])
                    .with_distinct_attribute("title"),
            )
            .await
            .unwrap();
        assert_eq!(update.update_id, 13);
    }

    #[tokio::test]
    async fn test_reset_settings() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/indexes/movies_prod/settings"))
            .respond_with(ack(14))
            .mount(&server)
            .await;

        let index = handle(&server).await;
        let update = index.reset_settings().await.unwrap();
        assert_eq!(update.update_id, 14);
    }

    #[tokio::test]
    async fn test_sub_resource_paths_are_kebab_case() {
        let server = MockServer::start().await;
        let sub_paths = [
            "ranking-rules",
            "distinct-attribute",
            "searchable-attributes",
            "displayed-attributes",
            "stop-words",
            "synonyms",
            "accept-new-fields",
        ];
        for sub in sub_paths {
            Mock::given(method("DELETE"))
                .and(path(format!("/indexes/movies_prod/settings/{sub}")))
                .respond_with(ack(1))
                .expect(1)
                .mount(&server)
                .await;
        }

        let index = handle(&server).await;
        index.reset_ranking_rules().await.unwrap();
        index.reset_distinct_attribute().await.unwrap();
        index.reset_searchable_attributes().await.unwrap();
        index.reset_displayed_attributes().await.unwrap();
        index.reset_stop_words().await.unwrap();
        index.reset_synonyms().await.unwrap();
        index.reset_accept_new_fields().await.unwrap();
    }

    #[tokio::test]
    async fn test_ranking_rules_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/indexes/movies_prod/settings/ranking-rules"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!(["asc(title)", "typo"])),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/indexes/movies_prod/settings/ranking-rules"))
            .and(body_json(serde_json::json!(["asc(title)", "typo"])))
            .respond_with(ack(2))
            .mount(&server)
            .await;

        let index = handle(&server).await;
        let update = index
            .update_ranking_rules(["asc(title)", "typo"])
            .await
            .unwrap();
        assert_eq!(update.update_id, 2);
        assert_eq!(
            index.ranking_rules().await.unwrap(),
            vec!["asc(title)", "typo"]
        );
    }

    #[tokio::test]
    async fn test_distinct_attribute_absent_by_default() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/indexes/movies_prod/settings/distinct-attribute"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::Value::Null))
            .mount(&server)
            .await;

        let index = handle(&server).await;
        assert!(index.distinct_attribute().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_stop_words_coerces_single_word() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/indexes/movies_prod/settings/stop-words"))
            .and(body_json(serde_json::json!(["the"])))
            .respond_with(ack(3))
            .expect(1)
            .mount(&server)
            .await;

        let index = handle(&server).await;
        index.update_stop_words("the").await.unwrap();
    }

    #[tokio::test]
    async fn test_update_stop_words_accepts_list() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/indexes/movies_prod/settings/stop-words"))
            .and(body_json(serde_json::json!(["the", "of", "to"])))
            .respond_with(ack(4))
            .mount(&server)
            .await;

        let index = handle(&server).await;
        index.update_stop_words(["the", "of", "to"]).await.unwrap();
    }

    #[tokio::test]
    async fn test_synonyms_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/indexes/movies_prod/settings/synonyms"))
            .and(body_json(serde_json::json!({
                "wolverine": ["logan", "xmen"]
            })))
            .respond_with(ack(5))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/indexes/movies_prod/settings/synonyms"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "wolverine": ["logan", "xmen"]
            })))
            .mount(&server)
            .await;

        let index = handle(&server).await;
        let mut synonyms = HashMap::new();
        synonyms.insert(
            "wolverine".to_string(),
            vec!["logan".to_string(), "xmen".to_string()],
        );
        index.update_synonyms(&synonyms).await.unwrap();
        assert_eq!(index.synonyms().await.unwrap(), synonyms);
    }

    #[tokio::test]
    async fn test_accept_new_fields_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/indexes/movies_prod/settings/accept-new-fields"))
            .and(body_json(serde_json::json!(false)))
            .respond_with(ack(6))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/indexes/movies_prod/settings/accept-new-fields"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(false)))
            .mount(&server)
            .await;

        let index = handle(&server).await;
        index.update_accept_new_fields(false).await.unwrap();
        assert!(!index.accept_new_fields().await.unwrap());
    }
}
