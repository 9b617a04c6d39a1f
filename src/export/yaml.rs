//! YAML export
//!
//! Same document as the JSON export, preceded by a comment header.

use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::models::Transaction;

use super::json::TransactionExport;

/// Export transactions as YAML
pub fn export_transactions_yaml<W: Write>(
    transactions: &[Transaction],
    mut writer: W,
) -> FintrackResult<()> {
    let export = TransactionExport::new(transactions);

    let header = format!(
        "# fintrack transaction export\n\
         # Generated: {}\n\
         # App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FintrackError::Export(e.to_string()))?;
    Ok(())
}
