//! Wire types exchanged with the cluster

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of a completed `_reindex` call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReindexReport {
    /// Server-side elapsed time in milliseconds
    #[serde(default)]
    pub took: u64,
    #[serde(default)]
    pub timed_out: bool,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub created: u64,
    #[serde(default)]
    pub updated: u64,
    #[serde(default)]
    pub version_conflicts: u64,
    /// Per-document failures reported alongside a 200 response
    #[serde(default)]
    pub failures: Vec<Value>,
}

/// One row of the cluster-wide index listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexListing {
    #[serde(rename = "index")]
    pub name: String,
    /// Raw `search.throttled` column; `"true"` for frozen indices
    #[serde(rename = "search.throttled", default)]
    pub frozen_flag: Option<String>,
}

impl IndexListing {
    pub fn new(name: impl Into<String>, frozen_flag: Option<&str>) -> Self {
        Self {
            name: name.into(),
            frozen_flag: frozen_flag.map(str::to_string),
        }
    }
}

/// Version block of the root endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterVersion {
    pub number: String,
}

/// Root endpoint response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterInfo {
    pub cluster_name: String,
    pub version: ClusterVersion,
}

impl ClusterInfo {
    /// Warning text when the reported version is outside `expected` (`major.minor`)
    pub fn version_warning(&self, expected: &str) -> Option<String> {
        let family = format!("{}.", expected);
        if self.version.number.starts_with(&family) {
            None
        } else {
            Some(format!(
                "This tool is designed for Elasticsearch {}.x but the cluster runs {}",
                expected, self.version.number
            ))
        }
    }
}

/// Extract a readable reason from an error body
///
/// Handles `{"error": {"type", "reason"}}`, `{"error": "..."}` and plain text.
pub fn error_reason(body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let reason = parsed.as_ref().and_then(|v| match v.get("error") {
        Some(Value::Object(error)) => {
            let kind = error.get("type").and_then(Value::as_str);
            let reason = error.get("reason").and_then(Value::as_str);
            match (kind, reason) {
                (Some(kind), Some(reason)) => Some(format!("{}: {}", kind, reason)),
                (None, Some(reason)) => Some(reason.to_string()),
                (Some(kind), None) => Some(kind.to_string()),
                (None, None) => None,
            }
        }
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    });

    reason.unwrap_or_else(|| {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            "empty response body".to_string()
        } else {
            trimmed.to_string()
        }
    })
}
