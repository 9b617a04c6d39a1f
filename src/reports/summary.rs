//! Period summary
//!
//! Income, expense, balance and the expense breakdown by category for one
//! window.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::aggregate::{daily_expenses, filter_by_window, sum_by_category, sum_by_type};
use super::aggregate::{CategoryTotal, Totals};
use crate::models::{Currency, Money, Transaction, Window};

/// Summary of one window
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub window: Window,
    /// Inclusive date range covered
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub totals: Totals,
    /// Expense categories, largest first
    pub categories: Vec<CategoryTotal>,
    /// Expense total per day
    pub daily: BTreeMap<NaiveDate, Money>,
    pub transaction_count: usize,
}

impl Summary {
    /// Summarize the transactions that fall in `window`
    pub fn for_window(transactions: &[Transaction], window: Window, reference: NaiveDate) -> Self {
        let in_window = filter_by_window(transactions, window, reference);
        let bounds = window.bounds(reference);

        Self {
            window,
            start_date: bounds.map(|(start, _)| start),
            end_date: bounds.map(|(_, end)| end),
            totals: sum_by_type(in_window.iter().copied()),
            categories: sum_by_category(in_window.iter().copied()),
            daily: daily_expenses(in_window.iter().copied()),
            transaction_count: in_window.len(),
        }
    }

    pub fn balance(&self) -> Money {
        self.totals.balance()
    }

    pub fn is_empty(&self) -> bool {
        self.transaction_count == 0
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency: Currency) -> String {
        let mut output = String::new();

        output.push_str(&format!("Summary: {}", self.window.title()));
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            output.push_str(&format!(" ({} to {})", start, end));
        }
        output.push('\n');
        output.push_str(&"=".repeat(50));
        output.push('\n');

        output.push_str(&format!(
            "{:<20} {:>15}\n",
            "Income:",
            currency.format(self.totals.income)
        ));
        output.push_str(&format!(
            "{:<20} {:>15}\n",
            "Expenses:",
            currency.format(self.totals.expense)
        ));
        output.push_str(&format!(
            "{:<20} {:>15}\n",
            "Balance:",
            currency.format(self.balance())
        ));
        output.push_str(&format!(
            "{:<20} {:>15}\n",
            "Transactions:", self.transaction_count
        ));

        if !self.categories.is_empty() {
            output.push('\n');
            output.push_str("Expenses by category\n");
            output.push_str(&"-".repeat(50));
            output.push('\n');
            for category in &self.categories {
                output.push_str(&format!(
                    "{:<20} {:>15} {:>7.1}%\n",
                    category.category,
                    currency.format(category.total),
                    category.percentage(self.totals.expense)
                ));
            }
        }

        output
    }
}
