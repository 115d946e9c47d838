//! Range migration: create, tag and fill destination indices

use super::task::{MigrationTask, plan};
use crate::config::{ExistingDestination, MigrationConfig};
use crate::core::batch::{BatchRunner, BatchSummary, OutcomeRecord};
use crate::core::cluster::{IndexAdmin, ReindexReport};
use crate::core::index::IndexRange;
use crate::utils::error::Result;
use serde_json::{Map, Value};
use std::fmt;
use tracing::{debug, info};

/// Lifecycle setting marking an index as no longer written to
pub const INDEXING_COMPLETE_SETTING: &str = "index.lifecycle.indexing_complete";

/// Secondary step whose failure does not stop the migration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookkeepingStep {
    Alias,
    IndexingComplete,
    DocumentFailures,
}

/// Non-fatal problem met while migrating one index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepWarning {
    pub step: BookkeepingStep,
    pub message: String,
}

impl fmt::Display for StepWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Migrates source indices into `<source>-reindexed` destinations
pub struct MigrationOperator<'a> {
    cluster: &'a dyn IndexAdmin,
    config: MigrationConfig,
}

impl<'a> MigrationOperator<'a> {
    pub fn new(cluster: &'a dyn IndexAdmin, config: MigrationConfig) -> Self {
        Self { cluster, config }
    }

    pub fn config(&self) -> &MigrationConfig {
        &self.config
    }

    /// Migrate one index; errors are folded into the returned record
    pub async fn migrate(&self, task: &MigrationTask) -> OutcomeRecord {
        info!(
            "Starting reindex from {} to {}",
            task.source(),
            task.destination()
        );

        match self.try_migrate(task).await {
            Ok(record) => record,
            Err(e) => OutcomeRecord::failed(
                task.source(),
                format!(
                    "Error reindexing {} to {}: {}",
                    task.source(),
                    task.destination(),
                    e
                ),
            ),
        }
    }

    async fn try_migrate(&self, task: &MigrationTask) -> Result<OutcomeRecord> {
        let source = task.source_name();
        let destination = task.destination();

        if !self.cluster.index_exists(&source).await? {
            return Ok(OutcomeRecord::skipped(
                &source,
                format!("Source index {} does not exist", source),
            ));
        }

        if self.cluster.index_exists(destination).await? {
            match self.config.existing_destination {
                ExistingDestination::Reuse => {
                    debug!("Destination {} already exists, reusing it", destination);
                }
                ExistingDestination::Skip => {
                    return Ok(OutcomeRecord::skipped(
                        &source,
                        format!("Destination index {} already exists", destination),
                    ));
                }
                ExistingDestination::Fail => {
                    return Ok(OutcomeRecord::failed(
                        &source,
                        format!(
                            "Destination index {} already exists (existing_destination = fail)",
                            destination
                        ),
                    ));
                }
            }
        } else {
            self.cluster.create_index(destination).await?;
            info!("Created destination index {}", destination);
        }

        let mut warnings = match task.alias() {
            Some(alias) => self.apply_bookkeeping(destination, alias).await,
            None => Vec::new(),
        };

        let report = self.cluster.reindex(&source, destination).await?;
        warnings.extend(report_warnings(destination, &report));

        Ok(OutcomeRecord::success(
            &source,
            format!(
                "Reindexed {} to {}: {}ms, Created: {}, Updated: {}",
                source, destination, report.took, report.created, report.updated
            ),
        )
        .with_warnings(warnings.iter().map(ToString::to_string)))
    }

    /// Attach `alias` and set the indexing-complete flag on `destination`
    ///
    /// Both steps are attempted regardless of each other; failures come back as
    /// warnings instead of errors.
    pub async fn apply_bookkeeping(&self, destination: &str, alias: &str) -> Vec<StepWarning> {
        let mut warnings = Vec::new();

        match self.cluster.put_alias(destination, alias).await {
            Ok(()) => info!("Added alias {} to {}", alias, destination),
            Err(e) => warnings.push(StepWarning {
                step: BookkeepingStep::Alias,
                message: format!("Error adding alias {} to {}: {}", alias, destination, e),
            }),
        }

        let mut settings = Map::new();
        settings.insert(INDEXING_COMPLETE_SETTING.to_string(), Value::Bool(true));
        let settings = Value::Object(settings);
        match self.cluster.put_settings(destination, &settings).await {
            Ok(()) => info!("Set {}=true for {}", INDEXING_COMPLETE_SETTING, destination),
            Err(e) => warnings.push(StepWarning {
                step: BookkeepingStep::IndexingComplete,
                message: format!(
                    "Could not set {} for {}: {}",
                    INDEXING_COMPLETE_SETTING, destination, e
                ),
            }),
        }

        warnings
    }

    /// Migrate every index of `range` in ascending order
    pub async fn run(&self, range: &IndexRange) -> BatchSummary {
        let tasks = plan(range, self.config.alias.as_deref());
        info!(
            "Migrating {} indices from {} to {}",
            tasks.len(),
            range.start(),
            range.end()
        );

        BatchRunner::new("reindex")
            .run(tasks, |task| async move { self.migrate(&task).await })
            .await
    }
}

fn report_warnings(destination: &str, report: &ReindexReport) -> Vec<StepWarning> {
    let mut warnings = Vec::new();
    if !report.failures.is_empty() {
        warnings.push(StepWarning {
            step: BookkeepingStep::DocumentFailures,
            message: format!(
                "{} documents failed to copy into {}",
                report.failures.len(),
                destination
            ),
        });
    }
    if report.timed_out {
        warnings.push(StepWarning {
            step: BookkeepingStep::DocumentFailures,
            message: format!("Reindex into {} reported timed_out", destination),
        });
    }
    warnings
}
