//! Backup module for fintrack
//!
//! Export the transaction file to a user-visible location and restore it.

pub mod manager;
pub mod restore;

pub use manager::{export, ExportResult};
pub use restore::{restore, RestoreResult};
