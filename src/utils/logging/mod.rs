//! Log subscriber setup
//!
//! Per-item progress is emitted through `tracing`, so the subscriber installed
//! here is what the operator watches during a maintenance window. Logs go to
//! stderr; stdout carries only the final summary.

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{MaintenanceError, Result};
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Build the filter, `RUST_LOG` wins over the configured level
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            MaintenanceError::Config(format!("Invalid log level '{}': {}", config.level, e))
        }),
    }
}

/// Build a subscriber writing formatted events to `writer`
pub fn build_subscriber<W>(
    config: &LoggingConfig,
    writer: W,
) -> Result<Box<dyn Subscriber + Send + Sync>>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .with_thread_ids(false);

    Ok(match config.format {
        LogFormat::Text => Box::new(builder.finish()),
        LogFormat::Json => Box::new(builder.json().finish()),
    })
}

/// Install the global subscriber on stderr
pub fn init(config: &LoggingConfig) -> Result<()> {
    let subscriber = build_subscriber(config, std::io::stderr)?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| MaintenanceError::Config(format!("Failed to install logger: {}", e)))
}
