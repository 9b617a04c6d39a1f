//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the store, reports and settings.

pub mod backup;
pub mod budget;
pub mod config;
pub mod export;
pub mod profile;
pub mod report;
pub mod transaction;

pub use backup::{handle_backup_command, BackupCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use config::{handle_config_command, ConfigCommands};
pub use export::{handle_export_command, ExportArgs};
pub use profile::{handle_profile_command, ProfileCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;
use clap::Args;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, Window};

/// Accepted `--date` formats
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Time window selection shared by listing and report commands
#[derive(Args, Debug, Clone, Default)]
pub struct WindowArgs {
    /// Relative window: weekly, monthly or yearly (relative to today)
    #[arg(short, long, conflicts_with = "month")]
    pub window: Option<Window>,

    /// Calendar month (YYYY-MM)
    #[arg(short, long, value_parser = parse_month)]
    pub month: Option<Window>,
}

impl WindowArgs {
    /// The selected window, or `default` when none was given
    pub fn resolve(&self, default: Option<Window>) -> Option<Window> {
        self.month.or(self.window).or(default)
    }
}

fn parse_month(s: &str) -> Result<Window, String> {
    match s.parse::<Window>() {
        Ok(window @ Window::CalendarMonth { .. }) => Ok(window),
        Ok(_) => Err(format!("'{}' is not a month. Use YYYY-MM", s)),
        Err(e) => Err(e.to_string()),
    }
}

/// Today's local date, the reference for relative windows
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a user-entered date (`YYYY-MM-DD` or `MM/DD/YYYY`)
pub fn parse_date(s: &str) -> FintrackResult<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .ok_or_else(|| {
            FintrackError::Validation(format!(
                "Invalid date format: '{}'. Use YYYY-MM-DD or MM/DD/YYYY",
                s
            ))
        })
}

/// Parse a user-entered amount that must be greater than zero
pub fn parse_positive_amount(s: &str) -> FintrackResult<Money> {
    let amount = Money::parse(s).map_err(|e| {
        FintrackError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '50.00' or '100'. Error: {}",
            s, e
        ))
    })?;

    if !amount.is_positive() {
        return Err(FintrackError::Validation(format!(
            "Amount must be greater than 0, got {}",
            amount
        )));
    }
    if amount.exceeds_max() {
        return Err(FintrackError::Validation(format!(
            "Amount {} is larger than the maximum of {}",
            amount,
            Money::MAX
        )));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(parse_date("2025-03-07").unwrap(), expected);
        assert_eq!(parse_date("03/07/2025").unwrap(), expected);
        assert!(parse_date("7 March").unwrap_err().is_validation());
        assert!(parse_date("2025-02-30").is_err());
    }

    #[test]
    fn test_parse_positive_amount() {
        assert_eq!(parse_positive_amount("12.5").unwrap(), Money::from_cents(1250));
        assert!(parse_positive_amount("0").unwrap_err().is_validation());
        assert!(parse_positive_amount("-3").unwrap_err().is_validation());
        assert!(parse_positive_amount("abc").unwrap_err().is_validation());
        assert!(parse_positive_amount("1000000000000")
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(
            parse_month("2025-02").unwrap(),
            Window::CalendarMonth {
                year: 2025,
                month: 2
            }
        );
        assert!(parse_month("weekly").is_err());
        assert!(parse_month("2025-13").is_err());
    }

    #[test]
    fn test_window_args_resolve() {
        let args = WindowArgs::default();
        assert_eq!(args.resolve(None), None);
        assert_eq!(args.resolve(Some(Window::Yearly)), Some(Window::Yearly));

        let args = WindowArgs {
            window: Some(Window::Weekly),
            month: None,
        };
        assert_eq!(args.resolve(Some(Window::Yearly)), Some(Window::Weekly));
    }
}
