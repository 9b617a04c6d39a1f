//! Transaction CLI commands
//!
//! Implements CLI commands for recording, listing and deleting transactions.

use std::collections::BTreeSet;

use clap::Subcommand;

use super::{parse_date, parse_positive_amount, today, WindowArgs};
use crate::alerts::{check_budgets, AlertChannel};
use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_table};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Transaction, TransactionId, TransactionType, SUGGESTED_CATEGORIES};
use crate::reports::filter_by_window;
use crate::storage::TransactionStore;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Amount, greater than zero (e.g. "12.50")
        amount: String,
        /// Category (see `transaction categories` for suggestions)
        category: String,
        /// income or expense
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: TransactionType,
        /// Transaction date (YYYY-MM-DD or MM/DD/YYYY), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions, newest first
    List {
        #[command(flatten)]
        window: WindowArgs,
        /// Maximum number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: TransactionId,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Show suggested and in-use categories
    Categories,
}

/// Handle a transaction command
pub fn handle_transaction_command(
    store: &mut TransactionStore,
    settings: &Settings,
    alerts: &mut dyn AlertChannel,
    cmd: TransactionCommands,
) -> FintrackResult<()> {
    let currency = settings.currency;

    match cmd {
        TransactionCommands::Add {
            amount,
            category,
            kind,
            date,
        } => {
            let amount = parse_positive_amount(&amount)?;
            let category = category.trim().to_string();
            if category.is_empty() {
                return Err(FintrackError::Validation(
                    "Category cannot be empty".into(),
                ));
            }
            let date = match date {
                Some(date_str) => parse_date(&date_str)?,
                None => today(),
            };

            let txn = store.add(category, amount, date, kind)?.clone();

            println!("Created transaction:");
            print!("{}", format_transaction_details(&txn, currency));

            if settings.transaction_alerts && txn.is_expense() {
                check_budgets(settings, store.all(), today(), alerts)?;
            }
        }

        TransactionCommands::List { window, limit } => {
            let mut transactions: Vec<&Transaction> = match window.resolve(None) {
                Some(window) => filter_by_window(store.all(), window, today()),
                None => store.all().iter().collect(),
            };

            // Newest first; same-day entries show the latest recorded first
            transactions.reverse();
            transactions.sort_by(|a, b| b.date.cmp(&a.date));

            let total = transactions.len();
            if let Some(limit) = limit {
                transactions.truncate(limit);
            }

            print!("{}", format_transaction_table(&transactions, currency));
            if transactions.len() < total {
                println!("Showing {} of {} transactions", transactions.len(), total);
            }
        }

        TransactionCommands::Delete { id, force } => {
            let txn = store
                .get(id)
                .ok_or_else(|| FintrackError::transaction_not_found(id.to_string()))?;

            if !force {
                print!("{}", format_transaction_details(txn, currency));
                println!();
                println!("To delete this transaction, run again with --force:");
                println!("  fintrack transaction delete {} --force", id);
                return Ok(());
            }

            let removed = store.remove(id)?;
            println!("Deleted transaction {} ({} record(s))", id, removed.len());
        }

        TransactionCommands::Categories => {
            println!("Suggested categories:");
            for category in SUGGESTED_CATEGORIES {
                println!("  {}", category);
            }

            let in_use: BTreeSet<&str> = store
                .all()
                .iter()
                .map(|t| t.category.as_str())
                .filter(|c| !SUGGESTED_CATEGORIES.contains(c))
                .collect();
            if !in_use.is_empty() {
                println!();
                println!("Other categories in use:");
                for category in in_use {
                    println!("  {}", category);
                }
            }
        }
    }

    Ok(())
}
