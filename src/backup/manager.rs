//! Backup export
//!
//! A backup is a copy of the transaction file in the same line format, with
//! dates at local midnight as the mobile app writes them, so a file exported
//! by fintrack can be restored by the app and vice versa when both run in the
//! same time zone.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{FintrackError, FintrackResult};
use crate::models::Transaction;
use crate::storage::{codec, write_text_atomic};

/// Outcome of an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    pub path: PathBuf,
    pub exported: usize,
}

/// Write `transactions` to `destination` in the stored line format.
///
/// Refuses an empty set so an export never produces an empty backup.
pub fn export(transactions: &[Transaction], destination: &Path) -> FintrackResult<ExportResult> {
    if transactions.is_empty() {
        return Err(FintrackError::Export("No transactions to export".into()));
    }

    let contents = codec::encode_all(transactions)?;
    write_text_atomic(destination, &contents)
        .map_err(|e| FintrackError::Export(format!("Failed to write backup: {}", e)))?;

    info!(
        path = %destination.display(),
        count = transactions.len(),
        "exported backup"
    );
    Ok(ExportResult {
        path: destination.to_path_buf(),
        exported: transactions.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionId, TransactionType};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_export_empty_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("backup.json");

        let err = export(&[], &path).unwrap_err();
        assert_eq!(err.to_string(), "Export error: No transactions to export");
        assert!(!path.exists());
    }

    #[test]
    fn test_export_writes_line_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("downloads").join("backup.json");
        let txns = vec![Transaction::new(
            TransactionId::from_raw(5),
            "Food",
            Money::from_cents(1000),
            NaiveDate::from_ymd_opt(1970, 1, 2).unwrap(),
            TransactionType::Expense,
        )];

        let result = export(&txns, &path).unwrap();
        assert_eq!(result.exported, 1);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "5,Food,10.00,EXPENSE,86400000"
        );
    }
}
