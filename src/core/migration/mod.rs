//! Range migration workflow
//!
//! For each index of an expanded range: check the source, create the
//! destination if needed, optionally alias it and mark it indexing-complete,
//! then reindex. Per-item problems end up in that item's outcome record.

mod operator;
mod task;

pub use crate::config::ExistingDestination;
pub use operator::{BookkeepingStep, INDEXING_COMPLETE_SETTING, MigrationOperator, StepWarning};
pub use task::{DESTINATION_SUFFIX, MigrationTask, destination_for, plan};
