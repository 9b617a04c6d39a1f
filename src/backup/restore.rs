//! Backup restoration
//!
//! Replaces the current transactions with the valid records of a backup
//! file. Malformed lines are skipped and counted, as on a normal load.

use std::path::Path;

use tracing::{info, warn};

use crate::error::{FintrackError, FintrackResult};
use crate::storage::{codec, read_text_optional, TransactionStore};

/// Result of a restore operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreResult {
    /// Records now in the store
    pub restored: usize,
    /// Lines in the backup that could not be read
    pub skipped: usize,
}

impl RestoreResult {
    /// Get a summary of what was restored
    pub fn summary(&self) -> String {
        if self.skipped == 0 {
            format!("Restored {} transaction(s)", self.restored)
        } else {
            format!(
                "Restored {} transaction(s), skipped {} unreadable line(s)",
                self.restored, self.skipped
            )
        }
    }
}

/// Restore `store` from the backup at `source`.
///
/// The store is left untouched when the file is missing or holds no valid
/// record.
pub fn restore(source: &Path, store: &mut TransactionStore) -> FintrackResult<RestoreResult> {
    let contents = read_text_optional(source)?
        .ok_or_else(|| FintrackError::backup_not_found(source.display().to_string()))?;

    let decoded = codec::decode_all(&contents);
    if decoded.transactions.is_empty() {
        return Err(FintrackError::Restore(
            "No valid transactions found in backup file".into(),
        ));
    }
    if !decoded.skipped.is_empty() {
        warn!(
            path = %source.display(),
            skipped = decoded.skipped.len(),
            "backup contains unreadable lines"
        );
    }

    let result = RestoreResult {
        restored: decoded.transactions.len(),
        skipped: decoded.skipped.len(),
    };
    store.replace_all(decoded.transactions)?;

    info!(path = %source.display(), restored = result.restored, "restored backup");
    Ok(result)
}
