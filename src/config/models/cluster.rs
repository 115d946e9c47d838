//! Cluster connection configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// Connection settings for the search cluster
#[derive(Clone, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Cluster address; a bare `host:port` is treated as plain http
    #[serde(default = "default_host")]
    pub host: String,
    /// Basic auth username
    #[serde(default)]
    pub username: Option<String>,
    /// Basic auth password
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    /// Verify TLS certificates
    #[serde(default = "default_true")]
    pub verify_certs: bool,
    /// Timeout for administrative requests in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Timeout for a single blocking reindex in seconds
    #[serde(default = "default_reindex_timeout")]
    pub reindex_timeout_secs: u64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            username: None,
            password: None,
            verify_certs: true,
            request_timeout_secs: default_request_timeout(),
            reindex_timeout_secs: default_reindex_timeout(),
        }
    }
}

impl std::fmt::Debug for ClusterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClusterConfig")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("verify_certs", &self.verify_certs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("reindex_timeout_secs", &self.reindex_timeout_secs)
            .finish()
    }
}

impl ClusterConfig {
    /// Host with a scheme, `localhost:9200` becomes `http://localhost:9200`
    pub fn base_url(&self) -> String {
        let host = self.host.trim().trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("http://{}", host)
        }
    }

    /// Basic auth pair, only when both halves are present
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(user), Some(pass)) => Some((user, pass)),
            (Some(_), None) | (None, Some(_)) => {
                warn!("Only one of username/password supplied, connecting without authentication");
                None
            }
            (None, None) => None,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn reindex_timeout(&self) -> Duration {
        Duration::from_secs(self.reindex_timeout_secs)
    }
}
