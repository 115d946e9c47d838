//! Error handling for index maintenance
//!
//! Fatal errors (bad input, unreachable cluster, failed enumeration) travel as
//! `MaintenanceError`. Per-item failures never do: operators downgrade them to
//! outcome records at the item boundary.

mod helpers;
mod types;

pub use types::{MaintenanceError, Result};
