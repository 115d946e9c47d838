//! Sequential batch driver

use super::types::{BatchSummary, OutcomeRecord, OutcomeStatus};
use crate::utils::format_duration;
use futures::stream::{self, StreamExt};
use std::future::Future;
use std::time::Instant;
use tracing::{error, info, warn};

/// Runs a per-item operation over an ordered item list, one item at a time
///
/// The operation returns an [`OutcomeRecord`] rather than a `Result`, so there is
/// no error path that could end the fold early: every item is attempted.
/// Nothing is retried.
#[derive(Debug, Clone)]
pub struct BatchRunner {
    operation: String,
}

impl BatchRunner {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
        }
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Fold `operation` over `items` in order and summarise the outcomes
    pub async fn run<I, T, F, Fut>(&self, items: I, operation: F) -> BatchSummary
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> Fut,
        Fut: Future<Output = OutcomeRecord>,
    {
        let start = Instant::now();

        let mut summary = stream::iter(items)
            .then(operation)
            .fold(
                BatchSummary::new(self.operation.as_str()),
                |mut summary, record| async move {
                    log_outcome(summary.total + 1, &record);
                    summary.push(record);
                    summary
                },
            )
            .await;

        summary.elapsed_ms = start.elapsed().as_millis() as u64;
        info!(
            "{} (in {})",
            summary.summary_line(),
            format_duration(summary.elapsed_ms)
        );
        summary
    }
}

fn log_outcome(position: usize, record: &OutcomeRecord) {
    match record.status() {
        OutcomeStatus::Success => info!(item = record.item(), position, "{}", record.detail()),
        OutcomeStatus::Skipped => warn!(item = record.item(), position, "{}", record.detail()),
        OutcomeStatus::Failed => error!(item = record.item(), position, "{}", record.detail()),
    }
    for warning in record.warnings() {
        warn!(item = record.item(), "{}", warning);
    }
}
