//! CSV export
//!
//! Unlike the stored line format, categories here are properly quoted, so
//! any category text survives.

use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::models::Transaction;

use super::ExportRecord;

/// Export transactions as CSV with an `id,date,type,category,amount` header
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> FintrackResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    if transactions.is_empty() {
        // serialize() only emits the header alongside the first record
        csv_writer
            .write_record(["id", "date", "type", "category", "amount"])
            .map_err(|e| FintrackError::Export(e.to_string()))?;
    }

    for txn in transactions {
        csv_writer
            .serialize(ExportRecord::from(txn))
            .map_err(|e| FintrackError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FintrackError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionId, TransactionType};
    use chrono::NaiveDate;

    #[test]
    fn test_csv_export() {
        let txns = vec![
            Transaction::new(
                TransactionId::from_raw(1),
                "Food",
                Money::from_cents(1250),
                NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
                TransactionType::Expense,
            ),
            Transaction::new(
                TransactionId::from_raw(2),
                "Gifts, misc",
                Money::from_cents(5000),
                NaiveDate::from_ymd_opt(2025, 1, 16).unwrap(),
                TransactionType::Income,
            ),
        ];

        let mut output = Vec::new();
        export_transactions_csv(&txns, &mut output).unwrap();
        let csv_string = String::from_utf8(output).unwrap();

        let lines: Vec<&str> = csv_string.lines().collect();
        assert_eq!(lines[0], "id,date,type,category,amount");
        assert_eq!(lines[1], "1,2025-01-15,EXPENSE,Food,12.50");
        assert_eq!(lines[2], "2,2025-01-16,INCOME,\"Gifts, misc\",50.00");
    }

    #[test]
    fn test_csv_export_empty_has_header() {
        let mut output = Vec::new();
        export_transactions_csv(&[], &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "id,date,type,category,amount\n"
        );
    }
}
