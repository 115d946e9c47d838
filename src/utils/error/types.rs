//! Error types for index maintenance

use thiserror::Error;

/// Result type alias for index maintenance operations
pub type Result<T> = std::result::Result<T, MaintenanceError>;

/// Main error type for index maintenance
#[derive(Error, Debug)]
pub enum MaintenanceError {
    /// Malformed `<prefix>-NNNNNN` identifier
    #[error("Invalid index format: {0}")]
    InvalidFormat(String),

    /// Unusable identifier range (start after end, mismatched prefixes)
    #[error("Invalid index range: {0}")]
    Range(String),

    /// Cluster could not be reached
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request exceeded its deadline
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Cluster answered with a non-success status
    #[error("Cluster error ({status}): {reason}")]
    Cluster { status: u16, reason: String },

    /// Cluster-wide index listing failed
    #[error("Index enumeration failed: {0}")]
    Enumeration(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration values rejected by validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
