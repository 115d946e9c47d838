//! Per-index migration tasks

use crate::core::index::{IndexIdentifier, IndexRange};
use serde::Serialize;

/// Suffix appended to a source name to form its destination
pub const DESTINATION_SUFFIX: &str = "-reindexed";

/// Destination name for `source`; a pure function of the source name
pub fn destination_for(source: &IndexIdentifier) -> String {
    format!("{}{}", source, DESTINATION_SUFFIX)
}

/// One source index to copy into its derived destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationTask {
    source: IndexIdentifier,
    destination: String,
    alias: Option<String>,
}

impl MigrationTask {
    pub fn new(source: IndexIdentifier, alias: Option<String>) -> Self {
        let destination = destination_for(&source);
        Self {
            source,
            destination,
            alias,
        }
    }

    pub fn source(&self) -> &IndexIdentifier {
        &self.source
    }

    pub fn source_name(&self) -> String {
        self.source.to_string()
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }
}

/// One task per member of `range`, in ascending order
pub fn plan(range: &IndexRange, alias: Option<&str>) -> Vec<MigrationTask> {
    range
        .iter()
        .map(|source| MigrationTask::new(source, alias.map(str::to_string)))
        .collect()
}
