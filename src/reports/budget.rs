//! Budget evaluation
//!
//! Compares expenses in a budget period's window against the configured
//! limit.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::aggregate::{filter_by_window, sum_by_type};
use crate::config::Settings;
use crate::models::{BudgetPeriod, Money, Transaction};

/// Percentage of the limit at which a warning is raised
pub const WARNING_THRESHOLD_PERCENT: i64 = 90;

/// How spending compares to a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    /// No limit configured (or a zero limit)
    NoBudget,
    Ok,
    /// At or above 90% of the limit
    Warning,
    /// At or above the limit
    Exceeded,
}

impl AlertLevel {
    /// Whether this level should notify the user
    pub fn is_alert(&self) -> bool {
        matches!(self, Self::Warning | Self::Exceeded)
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBudget => write!(f, "No budget"),
            Self::Ok => write!(f, "OK"),
            Self::Warning => write!(f, "Warning"),
            Self::Exceeded => write!(f, "Exceeded"),
        }
    }
}

/// Spending for one budget period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetStatus {
    pub period: BudgetPeriod,
    pub limit: Option<Money>,
    pub spent: Money,
    /// Spent as a whole-number percentage of the limit; 0 without a limit
    pub percentage: u32,
    pub level: AlertLevel,
}

impl BudgetStatus {
    /// Evaluate spending in the period containing `reference`
    pub fn evaluate(
        period: BudgetPeriod,
        limit: Option<Money>,
        transactions: &[Transaction],
        reference: NaiveDate,
    ) -> Self {
        let in_window = filter_by_window(transactions, period.window(), reference);
        let spent = sum_by_type(in_window).expense;
        Self::from_spent(period, limit, spent)
    }

    /// Evaluate every period against the configured limits
    pub fn evaluate_all(
        settings: &Settings,
        transactions: &[Transaction],
        reference: NaiveDate,
    ) -> Vec<Self> {
        BudgetPeriod::ALL
            .iter()
            .map(|&period| {
                Self::evaluate(period, settings.budget_for(period), transactions, reference)
            })
            .collect()
    }

    /// Classify an already-summed spend
    pub fn from_spent(period: BudgetPeriod, limit: Option<Money>, spent: Money) -> Self {
        let Some(budget) = limit.filter(|l| l.is_positive()) else {
            return Self {
                period,
                limit,
                spent,
                percentage: 0,
                level: AlertLevel::NoBudget,
            };
        };

        // Compare in i128 so large limits cannot overflow
        let spent_scaled = i128::from(spent.cents()) * 100;
        let warning_line = i128::from(budget.cents()) * i128::from(WARNING_THRESHOLD_PERCENT);

        let level = if spent >= budget {
            AlertLevel::Exceeded
        } else if spent_scaled >= warning_line {
            AlertLevel::Warning
        } else {
            AlertLevel::Ok
        };

        Self {
            period,
            limit,
            spent,
            percentage: spent.percent_of(budget),
            level,
        }
    }

    /// Amount left before the limit is reached; negative when over
    pub fn remaining(&self) -> Option<Money> {
        self.limit.map(|limit| limit - self.spent)
    }

    /// One-line description used for alerts
    pub fn message(&self) -> String {
        match (self.level, self.limit) {
            (AlertLevel::Exceeded, Some(limit)) => format!(
                "{} budget exceeded: spent {} of {} ({}%)",
                self.period, self.spent, limit, self.percentage
            ),
            (AlertLevel::Warning, Some(limit)) => format!(
                "{} budget warning: spent {} of {} ({}%)",
                self.period, self.spent, limit, self.percentage
            ),
            (AlertLevel::Ok, Some(limit)) => format!(
                "{} budget: spent {} of {} ({}%)",
                self.period, self.spent, limit, self.percentage
            ),
            _ => format!("{} budget: not set", self.period),
        }
    }
}
