//! Batch orchestration core
//!
//! - **index**: `<prefix>-NNNNNN` identifiers and inclusive ranges
//! - **cluster**: the index-management capability the workflows consume
//! - **batch**: sequential runner and outcome aggregation
//! - **migration**: range reindexing into `-reindexed` destinations
//! - **unfreeze**: cluster-wide frozen index recovery

pub mod batch;
pub mod cluster;
pub mod index;
pub mod migration;
pub mod unfreeze;
