//! JSON export
//!
//! Exports the transaction list with schema versioning and summary metadata.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FintrackError, FintrackResult};
use crate::models::Transaction;
use crate::reports::sum_by_type;

use super::ExportRecord;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub transactions: Vec<ExportRecord>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub total_income: String,
    pub total_expense: String,
    /// Date range of transactions
    pub earliest_transaction: Option<String>,
    pub latest_transaction: Option<String>,
}

impl TransactionExport {
    pub fn new(transactions: &[Transaction]) -> Self {
        let totals = sum_by_type(transactions);

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            total_income: totals.income.to_string(),
            total_expense: totals.expense.to_string(),
            earliest_transaction: transactions.iter().map(|t| t.date).min().map(|d| d.to_string()),
            latest_transaction: transactions.iter().map(|t| t.date).max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions: transactions.iter().map(ExportRecord::from).collect(),
            metadata,
        }
    }
}

/// Export transactions as a JSON document
pub fn export_transactions_json<W: Write>(
    transactions: &[Transaction],
    mut writer: W,
    pretty: bool,
) -> FintrackResult<()> {
    let export = TransactionExport::new(transactions);

    let written = if pretty {
        serde_json::to_writer_pretty(&mut writer, &export)
    } else {
        serde_json::to_writer(&mut writer, &export)
    };
    written.map_err(|e| FintrackError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| FintrackError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionId, TransactionType};
    use chrono::NaiveDate;

    #[test]
    fn test_json_export() {
        let txns = vec![
            Transaction::new(
                TransactionId::from_raw(7),
                "Food",
                Money::from_cents(1250),
                NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
                TransactionType::Expense,
            ),
            Transaction::new(
                TransactionId::from_raw(8),
                "Salary",
                Money::from_cents(100000),
                NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
                TransactionType::Income,
            ),
        ];

        let mut output = Vec::new();
        export_transactions_json(&txns, &mut output, false).unwrap();

        let parsed: TransactionExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.transactions.len(), 2);
        assert_eq!(parsed.transactions[0].amount, "12.50");
        assert_eq!(parsed.metadata.total_income, "1000.00");
        assert_eq!(parsed.metadata.earliest_transaction.as_deref(), Some("2025-01-31"));
        assert_eq!(parsed.metadata.latest_transaction.as_deref(), Some("2025-02-01"));

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["transactions"][0]["type"], "EXPENSE");
    }
}
