use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::{ClientError, Result};
use seekdb_core::ErrorResponse;

/// Header carrying the API key on every request
pub(crate) const API_KEY_HEADER: &str = "X-Seek-API-Key";

/// Shared HTTP capability behind both the [`Client`](crate::Client) and
/// [`Index`](crate::Index) facades.
///
/// Holds the immutable (base URL, API key) pair and a `reqwest::Client`;
/// clones are cheap and share the underlying connection pool. One public
/// operation maps to exactly one request, with no retries.
#[derive(Debug, Clone)]
pub(crate) struct HttpRequest {
    base_url: String,
    api_key: Option<String>,
    http: reqwest::Client,
}

impl HttpRequest {
    /// Trailing slashes are stripped from `base_url` once, here, so path
    /// assembly can always prepend `/`.
    pub(crate) fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        http: reqwest::Client,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            api_key,
            http,
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.dispatch("GET", path, self.http.get(self.url(path))).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.dispatch("POST", path, self.http.post(self.url(path)).json(body))
            .await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.dispatch("PUT", path, self.http.put(self.url(path)).json(body))
            .await
    }

    pub(crate) async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.dispatch("PATCH", path, self.http.patch(self.url(path)).json(body))
            .await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.dispatch("DELETE", path, self.http.delete(self.url(path)))
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        req: reqwest::RequestBuilder,
    ) -> Result<T> {
        debug!(method, path, "sending request");

        let req = match &self.api_key {
            Some(key) => req.header(API_KEY_HEADER, key),
            None => req,
        };
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(payload) => payload.message,
                Err(_) => body,
            };
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        if body.is_empty() {
            // 204 and empty 200 bodies decode as JSON null, so `()` and
            // `Option<_>` returns work without per-endpoint special cases
            Ok(serde_json::from_str("null")?)
        } else {
            Ok(serde_json::from_str(&body)?)
        }
    }
}

/// Percent-encode one path segment
pub(crate) fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Assemble a query string from (key, value) pairs, percent-encoding values
pub(crate) fn query_string<'a>(pairs: impl IntoIterator<Item = (&'a str, String)>) -> String {
    pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request_for(server: &MockServer, api_key: Option<&str>) -> HttpRequest {
        HttpRequest::new(
            server.uri(),
            api_key.map(|k| k.to_string()),
            reqwest::Client::new(),
        )
    }

    #[test]
    fn test_base_url_normalization() {
        let http = reqwest::Client::new();
        let request = HttpRequest::new("http://localhost:7700///", None, http);
        assert_eq!(request.base_url(), "http://localhost:7700");
    }

    #[test]
    fn test_query_string_encodes_values() {
        let qs = query_string([("q", "american pie".to_string()), ("limit", "2".to_string())]);
        assert_eq!(qs, "q=american%20pie&limit=2");
    }

    #[tokio::test]
    async fn test_api_key_header_sent_on_every_call() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/indexes"))
            .and(header(API_KEY_HEADER, "masterKey"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let request = request_for(&server, Some("masterKey"));
        let indexes: Vec<serde_json::Value> = request.get("/indexes").await.unwrap();
        assert!(indexes.is_empty());
    }

    #[tokio::test]
    async fn test_no_api_key_header_when_unset() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .and(header_exists(API_KEY_HEADER))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let request = request_for(&server, None);
        request.get::<()>("/health").await.unwrap();
    }

    #[tokio::test]
    async fn test_json_body_sent_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/indexes"))
            .and(body_json(serde_json::json!({ "name": "movies" })))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(serde_json::json!({ "ok": true })),
            )
            .mount(&server)
            .await;

        let request = request_for(&server, None);
        let response: serde_json::Value = request
            .post("/indexes", &serde_json::json!({ "name": "movies" }))
            .await
            .unwrap();
        assert_eq!(response["ok"], true);
    }

    #[tokio::test]
    async fn test_no_content_decodes_as_unit() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/indexes/movies_prod"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let request = request_for(&server, None);
        request.delete::<()>("/indexes/movies_prod").await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_body_decodes_as_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/indexes/movies_prod/schema"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        let request = request_for(&server, None);
        let schema: Option<serde_json::Value> =
            request.get("/indexes/movies_prod/schema").await.unwrap();
        assert!(schema.is_none());
    }

    #[tokio::test]
    async fn test_error_payload_message_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/indexes/gone"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "message": "Index gone not found"
            })))
            .mount(&server)
            .await;

        let request = request_for(&server, None);
        let err = request.get::<serde_json::Value>("/indexes/gone").await.unwrap_err();
        match err {
            ClientError::Server { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Index gone not found");
            }
            other => panic!("expected Server error, got: {other}"),
        }
    }

    #[tokio::test]
    async fn test_unparseable_error_body_passed_through_raw() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/keys"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let request = request_for(&server, None);
        let err = request.get::<serde_json::Value>("/keys").await.unwrap_err();
        assert_eq!(err.status(), Some(502));
        assert!(err.to_string().contains("bad gateway"));
    }
}
