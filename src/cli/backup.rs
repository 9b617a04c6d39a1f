//! CLI commands for backup management

use std::path::PathBuf;

use clap::Subcommand;

use crate::backup;
use crate::config::FintrackPaths;
use crate::error::FintrackResult;
use crate::storage::TransactionStore;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Export all transactions to a backup file
    Export {
        /// Output path (defaults to finance_tracker_backup.json in Downloads)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Replace all transactions with the contents of a backup file
    Restore {
        /// Backup path (defaults to finance_tracker_backup.json in Downloads)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

/// Handle a backup command
pub fn handle_backup_command(
    paths: &FintrackPaths,
    store: &mut TransactionStore,
    cmd: BackupCommands,
) -> FintrackResult<()> {
    match cmd {
        BackupCommands::Export { output } => {
            let destination = output.unwrap_or_else(|| paths.default_backup_file());
            let result = backup::export(store.all(), &destination)?;
            println!(
                "Exported {} transaction(s) to: {}",
                result.exported,
                result.path.display()
            );
        }
        BackupCommands::Restore { input } => {
            let source = input.unwrap_or_else(|| paths.default_backup_file());
            let result = backup::restore(&source, store)?;
            println!("{}", result.summary());
            println!("From: {}", source.display());
        }
    }

    Ok(())
}
