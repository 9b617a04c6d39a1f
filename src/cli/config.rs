//! Configuration CLI commands

use clap::{Subcommand, ValueEnum};

use crate::config::{FintrackPaths, Settings};
use crate::error::{FintrackError, FintrackResult};
use crate::models::Currency;

/// Settings that can be changed from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigKey {
    /// Display currency (code, e.g. EUR)
    Currency,
    /// Check budgets after each recorded expense (on/off)
    TransactionAlerts,
    /// Raise budget warning and exceeded alerts (on/off)
    BudgetWarnings,
}

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show paths and current settings
    Show,
    /// Change a setting
    Set {
        #[arg(value_enum)]
        key: ConfigKey,
        value: String,
    },
    /// List supported currencies
    Currencies,
}

/// Handle a config command
pub fn handle_config_command(
    paths: &FintrackPaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> FintrackResult<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Default backup:    {}", paths.default_backup_file().display());
            println!();
            println!("Settings:");
            println!("  Currency:           {}", settings.currency);
            println!("  Transaction alerts: {}", on_off(settings.transaction_alerts));
            println!("  Budget warnings:    {}", on_off(settings.budget_warnings));
        }
        ConfigCommands::Set { key, value } => {
            match key {
                ConfigKey::Currency => {
                    settings.currency = value
                        .parse::<Currency>()
                        .map_err(FintrackError::Validation)?;
                    println!("Currency set to {}", settings.currency);
                }
                ConfigKey::TransactionAlerts => {
                    settings.transaction_alerts = parse_toggle(&value)?;
                    println!(
                        "Transaction alerts {}",
                        on_off(settings.transaction_alerts)
                    );
                }
                ConfigKey::BudgetWarnings => {
                    settings.budget_warnings = parse_toggle(&value)?;
                    println!("Budget warnings {}", on_off(settings.budget_warnings));
                }
            }
            settings.save(paths)?;
        }
        ConfigCommands::Currencies => {
            for currency in Currency::ALL {
                println!("  {}", currency);
            }
        }
    }

    Ok(())
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

fn parse_toggle(value: &str) -> FintrackResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(FintrackError::Validation(format!(
            "Invalid value: '{}'. Use on or off",
            value
        ))),
    }
}
