//! Helper functions for creating specific error types

use super::types::MaintenanceError;

/// Helper functions for creating specific errors
impl MaintenanceError {
    pub fn invalid_format<S: Into<String>>(message: S) -> Self {
        Self::InvalidFormat(message.into())
    }

    pub fn range<S: Into<String>>(message: S) -> Self {
        Self::Range(message.into())
    }

    pub fn connection<S: Into<String>>(message: S) -> Self {
        Self::Connection(message.into())
    }

    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout(message.into())
    }

    pub fn cluster<S: Into<String>>(status: u16, reason: S) -> Self {
        Self::Cluster {
            status,
            reason: reason.into(),
        }
    }

    pub fn enumeration<S: Into<String>>(message: S) -> Self {
        Self::Enumeration(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Errors raised while checking user input, before any request is sent
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidFormat(_) | Self::Range(_) | Self::Config(_) | Self::Validation(_)
        )
    }
}
