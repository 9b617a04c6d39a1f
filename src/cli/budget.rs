//! Budget CLI commands
//!
//! Budgets are spending limits per period, stored in the settings file.

use clap::Subcommand;

use super::{parse_positive_amount, today};
use crate::config::{FintrackPaths, Settings};
use crate::display::format_budget_table;
use crate::error::FintrackResult;
use crate::models::{BudgetPeriod, Transaction};
use crate::reports::BudgetStatus;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the spending limit for a period
    Set {
        /// weekly, monthly or yearly
        period: BudgetPeriod,
        /// Limit amount (e.g. "500.00")
        amount: String,
    },
    /// Remove the spending limit for a period
    Clear {
        /// weekly, monthly or yearly
        period: BudgetPeriod,
    },
    /// Show configured limits
    Show,
    /// Compare spending against limits
    Status {
        /// Only this period
        period: Option<BudgetPeriod>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    paths: &FintrackPaths,
    settings: &mut Settings,
    transactions: &[Transaction],
    cmd: BudgetCommands,
) -> FintrackResult<()> {
    let currency = settings.currency;

    match cmd {
        BudgetCommands::Set { period, amount } => {
            let limit = parse_positive_amount(&amount)?;
            settings.set_budget(period, Some(limit));
            settings.save(paths)?;
            println!("{} budget set to {}", period, currency.format(limit));
        }
        BudgetCommands::Clear { period } => {
            settings.set_budget(period, None);
            settings.save(paths)?;
            println!("{} budget cleared", period);
        }
        BudgetCommands::Show => {
            println!("Budgets:");
            for period in BudgetPeriod::ALL {
                let limit = settings
                    .budget_for(period)
                    .map(|l| currency.format(l))
                    .unwrap_or_else(|| "not set".to_string());
                println!("  {:<10} {}", format!("{}:", period), limit);
            }
            println!();
            println!(
                "Budget warnings: {}",
                if settings.budget_warnings { "on" } else { "off" }
            );
        }
        BudgetCommands::Status { period } => {
            let reference = today();
            let statuses: Vec<BudgetStatus> = match period {
                Some(period) => vec![BudgetStatus::evaluate(
                    period,
                    settings.budget_for(period),
                    transactions,
                    reference,
                )],
                None => BudgetStatus::evaluate_all(settings, transactions, reference),
            };
            print!("{}", format_budget_table(&statuses, currency));
        }
    }

    Ok(())
}
