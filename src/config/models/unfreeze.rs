//! Unfreeze configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Settings for the frozen index scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnfreezeConfig {
    /// Index pattern passed to the listing call
    #[serde(default = "default_index_pattern")]
    pub pattern: String,
    /// Cluster version family (`major.minor`) the command is written for
    #[serde(default = "default_expected_version")]
    pub expected_version: String,
}

impl Default for UnfreezeConfig {
    fn default() -> Self {
        Self {
            pattern: default_index_pattern(),
            expected_version: default_expected_version(),
        }
    }
}
