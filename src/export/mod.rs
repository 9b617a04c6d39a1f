//! Export module for fintrack
//!
//! Writes the transaction list in interchange formats:
//! - CSV: one row per transaction with a header (spreadsheet-compatible)
//! - JSON: a document with metadata, machine-readable
//! - YAML: the same document with a comment header, human-readable
//!
//! These are one-way exports. The backup file (see `backup`) is the format
//! that can be restored.

pub mod csv;
pub mod json;
pub mod yaml;

use std::io::Write;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::FintrackResult;
use crate::models::{Transaction, TransactionType};

pub use self::csv::export_transactions_csv;
pub use json::{export_transactions_json, TransactionExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_transactions_yaml;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV with a header row
    Csv,
    /// JSON document with metadata
    Json,
    /// YAML document with metadata
    Yaml,
}

impl ExportFormat {
    /// Write `transactions` in this format
    pub fn write<W: Write>(&self, transactions: &[Transaction], writer: W) -> FintrackResult<()> {
        match self {
            Self::Csv => export_transactions_csv(transactions, writer),
            Self::Json => export_transactions_json(transactions, writer, true),
            Self::Yaml => export_transactions_yaml(transactions, writer),
        }
    }
}

/// One exported transaction
///
/// The amount is a plain decimal string so no precision is lost to floats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub amount: String,
}

impl From<&Transaction> for ExportRecord {
    fn from(txn: &Transaction) -> Self {
        Self {
            id: txn.id.as_i64(),
            date: txn.date,
            kind: txn.kind,
            category: txn.category.clone(),
            amount: txn.amount.to_string(),
        }
    }
}
