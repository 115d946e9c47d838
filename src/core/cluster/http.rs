//! REST implementation of [`IndexAdmin`]

use super::types::{ClusterInfo, IndexListing, ReindexReport, error_reason};
use super::IndexAdmin;
use crate::config::ClusterConfig;
use crate::utils::error::{MaintenanceError, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, Response, StatusCode};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Cluster handle speaking the Elasticsearch REST API
///
/// Holds no per-request state, so a failed call leaves it usable for the next.
#[derive(Debug, Clone)]
pub struct HttpClusterClient {
    client: Client,
    base_url: Url,
    credentials: Option<(String, String)>,
    request_timeout: Duration,
    reindex_timeout: Duration,
}

impl HttpClusterClient {
    /// Build the client without touching the network
    pub fn new(config: &ClusterConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .danger_accept_invalid_certs(!config.verify_certs)
            .connect_timeout(config.request_timeout())
            .user_agent(concat!("index-maintenance/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MaintenanceError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = Url::parse(&config.base_url()).map_err(|e| {
            MaintenanceError::config(format!("Invalid cluster host '{}': {}", config.host, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(MaintenanceError::config(format!(
                "Cluster host '{}' cannot be used as a base URL",
                config.host
            )));
        }

        Ok(Self {
            client,
            base_url,
            credentials: config
                .credentials()
                .map(|(user, pass)| (user.to_string(), pass.to_string())),
            request_timeout: config.request_timeout(),
            reindex_timeout: config.reindex_timeout(),
        })
    }

    /// Build the client and probe the root endpoint
    ///
    /// Any failure here is a connection error: nothing has been touched yet.
    pub async fn connect(config: &ClusterConfig) -> Result<(Self, ClusterInfo)> {
        let client = Self::new(config)?;
        let info = client.cluster_info().await.map_err(|e| {
            MaintenanceError::connection(format!("{}: {}", client.base_url, e))
        })?;
        info!(
            "Connected to cluster {} (version {})",
            info.cluster_name, info.version.number
        );
        Ok((client, info))
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Base URL extended with `segments`, each percent-encoded as a single path segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                MaintenanceError::config(format!(
                    "{} cannot be used as a base URL",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(
        &self,
        method: Method,
        segments: &[&str],
        timeout: Duration,
    ) -> Result<RequestBuilder> {
        let url = self.endpoint(segments)?;
        let mut request = self.client.request(method, url).timeout(timeout);

        if let Some((user, pass)) = &self.credentials {
            request = request.basic_auth(user, Some(pass));
        }

        Ok(request)
    }

    async fn send(&self, request: RequestBuilder, what: &str) -> Result<Response> {
        debug!("Sending {}", what);
        request.send().await.map_err(|e| {
            if e.is_timeout() {
                MaintenanceError::timeout(format!("{} timed out: {}", what, e))
            } else if e.is_connect() {
                MaintenanceError::connection(format!("{}: {}", what, e))
            } else {
                MaintenanceError::HttpClient(e)
            }
        })
    }

    /// Turn a non-2xx response into a cluster error carrying the server's reason
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(MaintenanceError::cluster(status.as_u16(), error_reason(&body)))
    }

    async fn send_checked(&self, request: RequestBuilder, what: &str) -> Result<Response> {
        let response = self.send(request, what).await?;
        Self::check(response).await
    }
}

#[async_trait]
impl IndexAdmin for HttpClusterClient {
    async fn index_exists(&self, name: &str) -> Result<bool> {
        let request = self.request(Method::HEAD, &[name], self.request_timeout)?;
        let response = self.send(request, &format!("HEAD {}", name)).await?;
        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(MaintenanceError::cluster(
                status.as_u16(),
                format!("existence check for '{}' failed", name),
            )),
        }
    }

    async fn create_index(&self, name: &str) -> Result<()> {
        let request = self.request(Method::PUT, &[name], self.request_timeout)?;
        self.send_checked(request, &format!("create index {}", name))
            .await?;
        Ok(())
    }

    async fn put_alias(&self, index: &str, alias: &str) -> Result<()> {
        let request = self.request(Method::PUT, &[index, "_alias", alias], self.request_timeout)?;
        self.send_checked(request, &format!("alias {} -> {}", alias, index))
            .await?;
        Ok(())
    }

    async fn put_settings(&self, index: &str, settings: &Value) -> Result<()> {
        let request = self
            .request(Method::PUT, &[index, "_settings"], self.request_timeout)?
            .json(settings);
        self.send_checked(request, &format!("update settings of {}", index))
            .await?;
        Ok(())
    }

    async fn reindex(&self, source: &str, dest: &str) -> Result<ReindexReport> {
        let body = json!({
            "source": { "index": source },
            "dest": { "index": dest }
        });
        let request = self
            .request(Method::POST, &["_reindex"], self.reindex_timeout)?
            .query(&[("wait_for_completion", "true")])
            .json(&body);
        let response = self
            .send_checked(request, &format!("reindex {} -> {}", source, dest))
            .await?;
        Ok(response.json::<ReindexReport>().await?)
    }

    async fn list_indices(&self, pattern: &str) -> Result<Vec<IndexListing>> {
        let request = self
            .request(Method::GET, &["_cat", "indices", pattern], self.request_timeout)?
            .query(&[
                ("format", "json"),
                ("h", "index,search.throttled"),
                ("expand_wildcards", "all"),
            ]);
        let response = self
            .send_checked(request, &format!("list indices {}", pattern))
            .await?;
        Ok(response.json::<Vec<IndexListing>>().await?)
    }

    async fn open_index(&self, name: &str) -> Result<()> {
        let request = self.request(Method::POST, &[name, "_unfreeze"], self.request_timeout)?;
        self.send_checked(request, &format!("unfreeze {}", name))
            .await?;
        Ok(())
    }

    async fn cluster_info(&self) -> Result<ClusterInfo> {
        let request = self.request(Method::GET, &[], self.request_timeout)?;
        let response = self.send_checked(request, "cluster info").await?;
        Ok(response.json::<ClusterInfo>().await?)
    }
}
