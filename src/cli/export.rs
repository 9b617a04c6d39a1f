//! CLI command for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use crate::error::{FintrackError, FintrackResult};
use crate::export::ExportFormat;
use crate::models::Transaction;

/// Export arguments
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(transactions: &[Transaction], args: ExportArgs) -> FintrackResult<()> {
    match args.output {
        Some(output) => {
            let file = File::create(&output).map_err(|e| {
                FintrackError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            args.format.write(transactions, &mut writer)?;
            writer
                .flush()
                .map_err(|e| FintrackError::Export(e.to_string()))?;

            eprintln!(
                "Exported {} transaction(s) to: {}",
                transactions.len(),
                output.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            args.format.write(transactions, &mut writer)?;
            writer
                .flush()
                .map_err(|e| FintrackError::Export(e.to_string()))?;
        }
    }

    Ok(())
}
