//! Batch outcome types

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Classification of one processed item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// The operation completed
    Success,
    /// Nothing to do for this item (benign absence, policy skip)
    Skipped,
    /// The cluster rejected the operation or could not be reached
    Failed,
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OutcomeStatus::Success => "success",
            OutcomeStatus::Skipped => "skipped",
            OutcomeStatus::Failed => "failed",
        };
        write!(f, "{}", label)
    }
}

/// Immutable record of what happened to one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeRecord {
    item: String,
    status: OutcomeStatus,
    detail: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

impl OutcomeRecord {
    pub fn new(item: impl fmt::Display, status: OutcomeStatus, detail: impl Into<String>) -> Self {
        Self {
            item: item.to_string(),
            status,
            detail: detail.into(),
            warnings: Vec::new(),
        }
    }

    pub fn success(item: impl fmt::Display, detail: impl Into<String>) -> Self {
        Self::new(item, OutcomeStatus::Success, detail)
    }

    pub fn skipped(item: impl fmt::Display, detail: impl Into<String>) -> Self {
        Self::new(item, OutcomeStatus::Skipped, detail)
    }

    pub fn failed(item: impl fmt::Display, detail: impl Into<String>) -> Self {
        Self::new(item, OutcomeStatus::Failed, detail)
    }

    /// Attach non-fatal warnings gathered while processing the item
    pub fn with_warnings<I, S>(mut self, warnings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.warnings.extend(warnings.into_iter().map(Into::into));
        self
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn status(&self) -> OutcomeStatus {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Success
    }
}

/// Counts plus the ordered outcome list of one batch run
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub operation: String,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
    pub records: Vec<OutcomeRecord>,
}

impl BatchSummary {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            total: 0,
            succeeded: 0,
            failed: 0,
            skipped: 0,
            started_at: Utc::now(),
            elapsed_ms: 0,
            records: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, record: OutcomeRecord) {
        self.total += 1;
        match record.status() {
            OutcomeStatus::Success => self.succeeded += 1,
            OutcomeStatus::Skipped => self.skipped += 1,
            OutcomeStatus::Failed => self.failed += 1,
        }
        self.records.push(record);
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Records with the given status, in processing order
    pub fn with_status(&self, status: OutcomeStatus) -> impl Iterator<Item = &OutcomeRecord> {
        self.records.iter().filter(move |r| r.status() == status)
    }

    /// Look up the record for one item
    pub fn record(&self, item: &str) -> Option<&OutcomeRecord> {
        self.records.iter().find(|r| r.item() == item)
    }

    pub fn summary_line(&self) -> String {
        format!(
            "{}: {}/{} succeeded, {} failed, {} skipped",
            self.operation, self.succeeded, self.total, self.failed, self.skipped
        )
    }
}
