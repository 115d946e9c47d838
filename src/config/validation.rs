//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.

use super::models::*;
use tracing::debug;
use url::Url;

/// Characters the cluster rejects in index and alias names
const FORBIDDEN_NAME_CHARS: &[char] = &['\\', '/', '*', '?', '"', '<', '>', '|', ',', '#', ':'];

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for ClusterConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating cluster configuration");

        if self.host.trim().is_empty() {
            return Err("Cluster host cannot be empty".to_string());
        }

        let url = Url::parse(&self.base_url())
            .map_err(|e| format!("Cluster host '{}' is not a valid URL: {}", self.host, e))?;
        if url.host_str().is_none() {
            return Err(format!("Cluster host '{}' has no host name", self.host));
        }

        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        if self.reindex_timeout_secs == 0 {
            return Err("reindex_timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for MigrationConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(alias) = &self.alias {
            if alias.trim().is_empty() {
                return Err("Alias cannot be empty".to_string());
            }
            if let Some(c) = alias
                .chars()
                .find(|c| c.is_whitespace() || FORBIDDEN_NAME_CHARS.contains(c))
            {
                return Err(format!(
                    "Alias '{}' contains illegal character '{}'",
                    alias, c
                ));
            }
            if alias.starts_with(['-', '_', '+']) || alias == "." || alias == ".." {
                return Err(format!("Alias '{}' is not a valid name", alias));
            }
        }
        Ok(())
    }
}

impl Validate for UnfreezeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.pattern.trim().is_empty() {
            return Err("Index pattern cannot be empty".to_string());
        }

        let mut parts = self.expected_version.split('.');
        let valid = matches!(
            (parts.next(), parts.next(), parts.next()),
            (Some(major), Some(minor), None)
                if major.parse::<u32>().is_ok() && minor.parse::<u32>().is_ok()
        );
        if !valid {
            return Err(format!(
                "expected_version '{}' must be in major.minor form",
                self.expected_version
            ));
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
