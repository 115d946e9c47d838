//! # index-maintenance
//!
//! Batch administrative operations for Elasticsearch-compatible clusters:
//!
//! - **Range reindexing**: expand `fg-009783 ..= fg-009789` into its members and
//!   copy each one into `<name>-reindexed`, creating the destination when absent
//!   and optionally aliasing it and marking it indexing-complete.
//! - **Unfreeze**: list every index with its frozen flag and reopen the frozen
//!   ones.
//!
//! Items are processed strictly one after another. A failure on one item is
//! recorded in its [`OutcomeRecord`] and the batch moves on; only bad input, an
//! unreachable cluster or a failed listing stop a run.
//!
//! ```rust,no_run
//! use index_maintenance::config::{ClusterConfig, MigrationConfig};
//! use index_maintenance::core::cluster::HttpClusterClient;
//! use index_maintenance::core::index::IndexRange;
//! use index_maintenance::core::migration::MigrationOperator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let range = IndexRange::parse("fg-009783", "fg-009789")?;
//!     let (client, _info) = HttpClusterClient::connect(&ClusterConfig::default()).await?;
//!
//!     let summary = MigrationOperator::new(&client, MigrationConfig::default())
//!         .run(&range)
//!         .await;
//!     println!("{}", summary.summary_line());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use crate::core::batch::{BatchRunner, BatchSummary, OutcomeRecord, OutcomeStatus};
pub use crate::core::cluster::{HttpClusterClient, IndexAdmin};
pub use crate::core::index::{IndexIdentifier, IndexRange, expand};
pub use crate::core::migration::{MigrationOperator, MigrationTask};
pub use crate::core::unfreeze::{FrozenIndexDescriptor, UnfreezeOperator, UnfreezeReport};
pub use utils::error::{MaintenanceError, Result};
