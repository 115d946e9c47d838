//! Migration configuration

use serde::{Deserialize, Serialize};

/// What to do when a destination index already exists before the reindex
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ExistingDestination {
    /// Reindex into the existing destination
    #[default]
    Reuse,
    /// Leave the item alone and record it as skipped
    Skip,
    /// Record the item as failed
    Fail,
}

impl std::fmt::Display for ExistingDestination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExistingDestination::Reuse => "reuse",
            ExistingDestination::Skip => "skip",
            ExistingDestination::Fail => "fail",
        };
        write!(f, "{}", name)
    }
}

/// Settings for range migration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MigrationConfig {
    /// Alias attached to every destination index
    #[serde(default)]
    pub alias: Option<String>,
    /// Policy for destinations left over from an earlier run
    #[serde(default)]
    pub existing_destination: ExistingDestination,
}
