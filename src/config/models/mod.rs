//! Configuration data models
//!
//! This module defines all configuration structures used by the maintenance commands.

pub mod cluster;
pub mod logging;
pub mod migration;
pub mod unfreeze;

// Re-export all configuration types
pub use cluster::*;
pub use logging::*;
pub use migration::*;
pub use unfreeze::*;

/// Default cluster address
pub fn default_host() -> String {
    "http://localhost:9200".to_string()
}

/// Default timeout for administrative requests in seconds
pub fn default_request_timeout() -> u64 {
    30
}

/// Default timeout for a blocking reindex in seconds
pub fn default_reindex_timeout() -> u64 {
    3600
}

/// Default cluster version family the unfreeze command targets
pub fn default_expected_version() -> String {
    "7.17".to_string()
}

/// Default index pattern scanned for frozen indices
pub fn default_index_pattern() -> String {
    "*".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}
