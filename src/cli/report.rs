//! Report CLI commands

use clap::Subcommand;

use super::{today, WindowArgs};
use crate::config::Settings;
use crate::display::{format_category_table, format_daily_table};
use crate::error::FintrackResult;
use crate::models::{Transaction, Window};
use crate::reports::Summary;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Income, expenses and balance (defaults to the current month)
    Summary {
        #[command(flatten)]
        window: WindowArgs,
    },
    /// Expenses by category
    Categories {
        #[command(flatten)]
        window: WindowArgs,
    },
    /// Expenses per day
    Daily {
        #[command(flatten)]
        window: WindowArgs,
    },
}

/// Handle a report command
pub fn handle_report_command(
    transactions: &[Transaction],
    settings: &Settings,
    cmd: ReportCommands,
) -> FintrackResult<()> {
    let reference = today();
    let current_month = Some(Window::month_of(reference));

    let summary_for = |args: &WindowArgs| {
        let window = args.resolve(current_month).unwrap_or(Window::Monthly);
        Summary::for_window(transactions, window, reference)
    };

    match cmd {
        ReportCommands::Summary { window } => {
            let summary = summary_for(&window);
            print!("{}", summary.format_terminal(settings.currency));
        }
        ReportCommands::Categories { window } => {
            let summary = summary_for(&window);
            println!("Expenses by category: {}", summary.window.title());
            print!(
                "{}",
                format_category_table(&summary.categories, settings.currency)
            );
        }
        ReportCommands::Daily { window } => {
            let summary = summary_for(&window);
            println!("Daily expenses: {}", summary.window.title());
            print!("{}", format_daily_table(&summary.daily, settings.currency));
        }
    }

    Ok(())
}
