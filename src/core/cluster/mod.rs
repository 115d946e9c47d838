//! Search cluster capability
//!
//! The operators only ever talk to the cluster through [`IndexAdmin`], which is
//! passed to them explicitly. [`HttpClusterClient`] is the production
//! implementation; tests substitute their own.

mod http;
mod types;

pub use http::HttpClusterClient;
pub use types::{ClusterInfo, ClusterVersion, IndexListing, ReindexReport, error_reason};

use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Index-management operations the maintenance workflows rely on
#[async_trait]
pub trait IndexAdmin: Send + Sync {
    /// Whether an index (or alias) with this name exists
    async fn index_exists(&self, name: &str) -> Result<bool>;

    /// Create an index with default settings
    async fn create_index(&self, name: &str) -> Result<()>;

    /// Point `alias` at `index`
    async fn put_alias(&self, index: &str, alias: &str) -> Result<()>;

    /// Apply a settings map to `index`
    async fn put_settings(&self, index: &str, settings: &Value) -> Result<()>;

    /// Copy every document from `source` into `dest`, blocking until done
    async fn reindex(&self, source: &str, dest: &str) -> Result<ReindexReport>;

    /// List indices matching `pattern` with their frozen flag
    async fn list_indices(&self, pattern: &str) -> Result<Vec<IndexListing>>;

    /// Reopen a frozen index for normal use
    async fn open_index(&self, name: &str) -> Result<()>;

    /// Cluster name and version
    async fn cluster_info(&self) -> Result<ClusterInfo>;
}
