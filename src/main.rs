use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use fintrack::alerts::ConsoleAlerts;
use fintrack::cli::{
    handle_backup_command, handle_budget_command, handle_config_command, handle_export_command,
    handle_profile_command, handle_report_command, handle_transaction_command,
};
use fintrack::config::{FintrackPaths, Settings};
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    author = "Kaylee Beyene",
    version,
    about = "Personal income and expense tracker",
    long_about = "fintrack records income and expense transactions, summarizes them \
                  by week, month or year, and warns when spending approaches a budget."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(fintrack::cli::TransactionCommands),

    /// Summaries and breakdowns
    #[command(subcommand)]
    Report(fintrack::cli::ReportCommands),

    /// Budget limits and status
    #[command(subcommand)]
    Budget(fintrack::cli::BudgetCommands),

    /// Backup export and restore
    #[command(subcommand)]
    Backup(fintrack::cli::BackupCommands),

    /// Export transactions as CSV, JSON or YAML
    Export(fintrack::cli::ExportArgs),

    /// Show or change settings
    #[command(subcommand)]
    Config(fintrack::cli::ConfigCommands),

    /// Show or edit your profile
    #[command(subcommand)]
    Profile(fintrack::cli::ProfileCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    fintrack::logging::init(cli.verbose);

    // Initialize paths and settings
    let paths = FintrackPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    let Some(command) = cli.command else {
        println!("fintrack - personal income and expense tracker");
        println!();
        println!("Run 'fintrack --help' for usage information.");
        return Ok(());
    };

    // Initialize storage
    let mut storage = Storage::open(paths.clone())?;
    let skipped = storage.transactions.last_load_skipped().len();
    if skipped > 0 {
        eprintln!(
            "Warning: {} line(s) in {} could not be read and were skipped",
            skipped,
            paths.transactions_file().display()
        );
    }

    match command {
        Commands::Transaction(cmd) => {
            let mut alerts = ConsoleAlerts::stderr();
            handle_transaction_command(&mut storage.transactions, &settings, &mut alerts, cmd)?;
        }
        Commands::Report(cmd) => {
            handle_report_command(storage.transactions.all(), &settings, cmd)?;
        }
        Commands::Budget(cmd) => {
            handle_budget_command(&paths, &mut settings, storage.transactions.all(), cmd)?;
        }
        Commands::Backup(cmd) => {
            handle_backup_command(&paths, &mut storage.transactions, cmd)?;
        }
        Commands::Export(args) => {
            handle_export_command(storage.transactions.all(), args)?;
        }
        Commands::Config(cmd) => {
            handle_config_command(&paths, &mut settings, cmd)?;
        }
        Commands::Profile(cmd) => {
            handle_profile_command(&paths, &mut settings, cmd)?;
        }
    }

    Ok(())
}
