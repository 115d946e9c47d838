//! Configuration management
//!
//! Settings come from an optional YAML file; command-line flags (which also read
//! `ES_*` environment variables) are applied on top by the command layer.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{MaintenanceError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub cluster: ClusterConfig,
    #[serde(default)]
    pub migration: MigrationConfig,
    #[serde(default)]
    pub unfreeze: UnfreezeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    ///
    /// Runs before the log subscriber exists, so problems are reported through
    /// the returned error only.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            MaintenanceError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| MaintenanceError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path).await,
            None => Ok(Self::default()),
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.cluster
            .validate()
            .map_err(|e| MaintenanceError::validation(format!("Cluster config error: {}", e)))?;
        self.migration
            .validate()
            .map_err(|e| MaintenanceError::validation(format!("Migration config error: {}", e)))?;
        self.unfreeze
            .validate()
            .map_err(|e| MaintenanceError::validation(format!("Unfreeze config error: {}", e)))?;
        self.logging
            .validate()
            .map_err(|e| MaintenanceError::validation(format!("Logging config error: {}", e)))?;

        Ok(())
    }
}
