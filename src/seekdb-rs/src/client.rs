use std::time::Duration;

use crate::index::Index;
use crate::request::HttpRequest;
use crate::{ClientError, Result};
use seekdb_core::{IndexInfo, IndexSelector, IndexSpec, Keys, ServerStats, Version};

/// SeekDb REST API client.
///
/// Root facade bound to a base URL and API key. Index-collection
/// operations and server-wide lookups live here; per-index operations live
/// on [`Index`] handles obtained from [`Client::index`] or
/// [`Client::create_index`].
#[derive(Debug, Clone)]
pub struct Client {
    request: HttpRequest,
}

impl Client {
    /// Create a new client connected to the given base URL, without an
    /// API key. Fine against servers running without a master key.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            request: HttpRequest::new(base_url, None, reqwest::Client::new()),
        }
    }

    /// Create a new client that authenticates every request with `api_key`.
    pub fn with_api_key(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            request: HttpRequest::new(base_url, Some(api_key.into()), reqwest::Client::new()),
        }
    }

    /// Returns a builder for configuring timeouts and TLS behavior.
    pub fn builder(base_url: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            base_url: base_url.into(),
            api_key: None,
            timeout: None,
            accept_invalid_certs: false,
            http: None,
        }
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        self.request.base_url()
    }

    /// List every index on the server, in server-listing order.
    pub async fn list_indexes(&self) -> Result<Vec<IndexInfo>> {
        self.request.get("/indexes").await
    }

    /// Create an index and return a handle bound to its uid.
    ///
    /// Accepts a bare name or a full [`IndexSpec`]:
    ///
    /// ```no_run
    /// # use seekdb_rs::{Client, IndexSpec};
    /// # async fn run(client: Client) -> seekdb_rs::Result<()> {
    /// client.create_index("movies").await?;
    /// client
    ///     .create_index(IndexSpec::new("movies").with_uid("movies_prod"))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// The handle's uid is whatever the server echoes back: the supplied
    /// uid when one was given, a server-assigned one otherwise.
    pub async fn create_index(&self, spec: impl Into<IndexSpec>) -> Result<Index> {
        let spec = spec.into();
        let info: IndexInfo = self.request.post("/indexes", &spec).await?;
        Ok(Index::new(info.uid, self.request.clone()))
    }

    /// Resolve `selector` to an [`Index`] handle.
    ///
    /// A uid resolves locally without any request; no existence check is
    /// performed. A name is resolved against the server listing and the
    /// first match in listing order wins; index names are not guaranteed
    /// unique, so prefer uids. An unmatched name fails with
    /// [`ClientError::IndexResolution`] before any further request.
    pub async fn index(&self, selector: impl Into<IndexSelector>) -> Result<Index> {
        let uid = self.resolve_uid(selector.into()).await?;
        Ok(Index::new(uid, self.request.clone()))
    }

    /// Alias for [`index`](Self::index).
    #[inline]
    pub async fn get_index(&self, selector: impl Into<IndexSelector>) -> Result<Index> {
        self.index(selector).await
    }

    /// Fetch metadata for one index without keeping a handle.
    pub async fn show_index(&self, uid: impl Into<String>) -> Result<IndexInfo> {
        Index::new(uid, self.request.clone()).show().await
    }

    /// Delete an index, resolving `selector` the same way as
    /// [`index`](Self::index).
    pub async fn delete_index(&self, selector: impl Into<IndexSelector>) -> Result<()> {
        self.index(selector).await?.delete().await
    }

    /// Fetch the server's `private`/`public` API key pair.
    ///
    /// Requires a privileged key; the server refuses public-key callers
    /// with a 403, surfaced verbatim.
    pub async fn keys(&self) -> Result<Keys> {
        self.request.get("/keys").await
    }

    /// Alias for [`keys`](Self::keys).
    #[inline]
    pub async fn get_keys(&self) -> Result<Keys> {
        self.keys().await
    }

    /// Health check
    pub async fn health(&self) -> Result<()> {
        self.request.get("/health").await
    }

    /// Server build information
    pub async fn version(&self) -> Result<Version> {
        self.request.get("/version").await
    }

    /// Whole-server stats, one entry per index
    pub async fn stats(&self) -> Result<ServerStats> {
        self.request.get("/stats").await
    }

    async fn resolve_uid(&self, selector: IndexSelector) -> Result<String> {
        match selector {
            IndexSelector::Uid(uid) => Ok(uid),
            IndexSelector::Name(name) => {
                let indexes = self.list_indexes().await?;
                indexes
                    .into_iter()
                    .find(|index| index.name == name)
                    .map(|index| index.uid)
                    .ok_or(ClientError::IndexResolution { name })
            }
        }
    }
}

/// Builder for [`Client`] configuration.
///
/// `build` is fallible because assembling a `reqwest::Client` with custom
/// TLS or timeout options can fail at TLS initialization.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Option<Duration>,
    accept_invalid_certs: bool,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Overall per-request timeout. The library sets none of its own;
    /// without this the transport's defaults apply.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Accept self-signed TLS certificates. Development servers only.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Use a caller-configured `reqwest::Client` instead of building one;
    /// timeout and TLS options set on this builder are then ignored.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn build(self) -> Result<Client> {
        let http = match self.http {
            Some(http) => http,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if self.accept_invalid_certs {
                    builder = builder.danger_accept_invalid_certs(true);
                }
                builder.build()?
            }
        };
        Ok(Client {
            request: HttpRequest::new(self.base_url, self.api_key, http),
        })
    }
}
