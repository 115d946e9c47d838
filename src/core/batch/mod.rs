//! Batch execution and outcome reporting
//!
//! Both maintenance workflows share this shape: an ordered item list, a
//! per-item operation that never fails outright, and a summary at the end.

mod runner;
mod types;


pub use runner::BatchRunner;
pub use types::{BatchSummary, OutcomeRecord, OutcomeStatus};
