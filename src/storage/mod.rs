//! Storage layer for fintrack
//!
//! Transactions live in a single line-oriented text file that is rewritten
//! atomically on every change.

pub mod codec;
pub mod file_io;
pub mod transactions;

pub use codec::{Decoded, LineError, SkippedLine};
pub use file_io::{read_text_optional, write_text_atomic};
pub use transactions::TransactionStore;

use crate::config::paths::FintrackPaths;
use crate::error::FintrackError;

/// Main storage coordinator
pub struct Storage {
    paths: FintrackPaths,
    pub transactions: TransactionStore,
}

impl Storage {
    /// Create a storage instance, creating the data directories and loading
    /// the transaction file
    pub fn open(paths: FintrackPaths) -> Result<Self, FintrackError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionStore::open(paths.transactions_file())?,
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FintrackPaths {
        &self.paths
    }
}
