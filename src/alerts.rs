//! Budget alerts
//!
//! Alerts are delivered through an [`AlertChannel`]. The CLI uses
//! [`ConsoleAlerts`], which writes to stderr and logs through `tracing`.

use std::io::{self, Write};

use chrono::NaiveDate;
use tracing::warn;

use crate::config::Settings;
use crate::error::{FintrackError, FintrackResult};
use crate::models::Transaction;
use crate::reports::{AlertLevel, BudgetStatus};

/// A notification about budget spending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub level: AlertLevel,
    pub title: String,
    pub message: String,
}

impl Alert {
    /// Build an alert for a status, or `None` if the status is not alarming
    pub fn from_status(status: &BudgetStatus) -> Option<Self> {
        let title = match status.level {
            AlertLevel::Exceeded => "Budget Exceeded",
            AlertLevel::Warning => "Budget Warning",
            AlertLevel::Ok | AlertLevel::NoBudget => return None,
        };
        Some(Self {
            level: status.level,
            title: title.to_string(),
            message: status.message(),
        })
    }

    /// Prefix shown before the title
    pub fn icon(&self) -> &'static str {
        match self.level {
            AlertLevel::Exceeded => "x",
            _ => "!",
        }
    }
}

/// Somewhere alerts can be delivered
pub trait AlertChannel {
    fn send(&mut self, alert: &Alert) -> FintrackResult<()>;
}

/// Writes alerts as text lines, stderr by default
pub struct ConsoleAlerts<W: Write> {
    writer: W,
}

impl ConsoleAlerts<io::Stderr> {
    pub fn stderr() -> Self {
        Self {
            writer: io::stderr(),
        }
    }
}

impl<W: Write> ConsoleAlerts<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> AlertChannel for ConsoleAlerts<W> {
    fn send(&mut self, alert: &Alert) -> FintrackResult<()> {
        warn!(level = ?alert.level, "{}", alert.message);
        writeln!(
            self.writer,
            "[{}] {}: {}",
            alert.icon(),
            alert.title,
            alert.message
        )
        .map_err(|e| FintrackError::Io(format!("Failed to write alert: {}", e)))
    }
}

/// Evaluate every configured budget and deliver alerts for those at warning
/// or exceeded level.
///
/// Nothing is sent when budget warnings are disabled. Returns the number of
/// alerts delivered.
pub fn check_budgets(
    settings: &Settings,
    transactions: &[Transaction],
    reference: NaiveDate,
    channel: &mut dyn AlertChannel,
) -> FintrackResult<usize> {
    if !settings.budget_warnings {
        return Ok(0);
    }

    let mut sent = 0;
    for status in BudgetStatus::evaluate_all(settings, transactions, reference) {
        if let Some(alert) = Alert::from_status(&status) {
            channel.send(&alert)?;
            sent += 1;
        }
    }
    Ok(sent)
}
