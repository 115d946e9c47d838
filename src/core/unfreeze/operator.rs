//! Frozen index scan and recovery

use crate::core::batch::{BatchRunner, BatchSummary, OutcomeRecord};
use crate::core::cluster::{IndexAdmin, IndexListing};
use crate::utils::error::{MaintenanceError, Result};
use serde::Serialize;
use tracing::info;

/// Value of the throttled column that marks an index as frozen
pub const FROZEN_SENTINEL: &str = "true";

/// Snapshot of one index's frozen state, rebuilt on every scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrozenIndexDescriptor {
    pub name: String,
    pub frozen: bool,
}

impl From<&IndexListing> for FrozenIndexDescriptor {
    fn from(listing: &IndexListing) -> Self {
        Self {
            name: listing.name.clone(),
            frozen: listing.frozen_flag.as_deref() == Some(FROZEN_SENTINEL),
        }
    }
}

/// What a scan-and-unfreeze pass found and did
#[derive(Debug, Clone, Serialize)]
pub struct UnfreezeReport {
    pub frozen: Vec<FrozenIndexDescriptor>,
    pub summary: BatchSummary,
}

impl UnfreezeReport {
    /// The scan found nothing to do
    pub fn none_found(&self) -> bool {
        self.frozen.is_empty()
    }

    pub fn summary_line(&self) -> String {
        if self.none_found() {
            "No frozen indices found in the cluster.".to_string()
        } else {
            format!(
                "Operation complete. Successfully unfroze {}/{} indices.",
                self.summary.succeeded, self.summary.total
            )
        }
    }
}

/// Finds frozen indices and reopens them one by one
pub struct UnfreezeOperator<'a> {
    cluster: &'a dyn IndexAdmin,
    pattern: String,
}

impl<'a> UnfreezeOperator<'a> {
    pub fn new(cluster: &'a dyn IndexAdmin, pattern: impl Into<String>) -> Self {
        Self {
            cluster,
            pattern: pattern.into(),
        }
    }

    /// Every index matching the pattern with its frozen state
    pub async fn snapshot(&self) -> Result<Vec<FrozenIndexDescriptor>> {
        let listings = self
            .cluster
            .list_indices(&self.pattern)
            .await
            .map_err(|e| MaintenanceError::enumeration(e.to_string()))?;
        Ok(listings.iter().map(FrozenIndexDescriptor::from).collect())
    }

    /// Only the frozen indices, in listing order
    pub async fn scan(&self) -> Result<Vec<FrozenIndexDescriptor>> {
        let frozen: Vec<_> = self
            .snapshot()
            .await?
            .into_iter()
            .filter(|index| index.frozen)
            .collect();
        Ok(frozen)
    }

    /// Reopen one index; a failure only affects this record
    pub async fn unfreeze(&self, index: &FrozenIndexDescriptor) -> OutcomeRecord {
        match self.cluster.open_index(&index.name).await {
            Ok(()) => OutcomeRecord::success(
                &index.name,
                format!("Successfully unfroze index: {}", index.name),
            ),
            Err(e) => OutcomeRecord::failed(
                &index.name,
                format!("Failed to unfreeze index {}: {}", index.name, e),
            ),
        }
    }

    /// Scan the cluster and unfreeze everything found
    ///
    /// Only a failed listing is an error; individual unfreeze failures are
    /// recorded in the summary.
    pub async fn scan_and_unfreeze(&self) -> Result<UnfreezeReport> {
        let frozen = self.scan().await?;
        let runner = BatchRunner::new("unfreeze");

        if frozen.is_empty() {
            info!("No frozen indices found in the cluster.");
            return Ok(UnfreezeReport {
                frozen,
                summary: BatchSummary::new(runner.operation()),
            });
        }

        info!("Found {} frozen indices:", frozen.len());
        for index in &frozen {
            info!(" - {}", index.name);
        }

        let summary = runner
            .run(frozen.iter(), |index| self.unfreeze(index))
            .await;

        Ok(UnfreezeReport { frozen, summary })
    }
}
