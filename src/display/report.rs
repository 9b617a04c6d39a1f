//! Report display formatting
//!
//! Category breakdowns and daily spending are drawn with text bars in place
//! of the pie and line charts of a graphical client.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{bar, truncate};
use crate::models::{Currency, Money};
use crate::reports::{BudgetStatus, CategoryTotal};

const BAR_WIDTH: usize = 30;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "%")]
    percentage: String,
    #[tabled(rename = "")]
    bar: String,
}

#[derive(Tabled)]
struct DailyRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "")]
    bar: String,
}

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Budget")]
    limit: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Expense breakdown by category with a proportional bar per row
pub fn format_category_table(categories: &[CategoryTotal], currency: Currency) -> String {
    if categories.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let overall: Money = categories.iter().map(|c| c.total).sum();
    let largest = categories.iter().map(|c| c.total.cents()).max().unwrap_or(0);

    let rows = categories.iter().map(|c| CategoryRow {
        category: truncate(&c.category, 24),
        amount: currency.format(c.total),
        count: c.count,
        percentage: format!("{:.1}", c.percentage(overall)),
        bar: bar(c.total.cents(), largest, BAR_WIDTH),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\nTotal: {}\n", table, currency.format(overall))
}

/// Expense total per day
pub fn format_daily_table(daily: &BTreeMap<NaiveDate, Money>, currency: Currency) -> String {
    if daily.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let largest = daily.values().map(Money::cents).max().unwrap_or(0);
    let rows = daily.iter().map(|(date, spent)| DailyRow {
        date: date.format("%Y-%m-%d").to_string(),
        spent: currency.format(*spent),
        bar: bar(spent.cents(), largest, BAR_WIDTH),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Budget status per period
pub fn format_budget_table(statuses: &[BudgetStatus], currency: Currency) -> String {
    let rows = statuses.iter().map(|s| BudgetRow {
        period: s.period.to_string(),
        limit: s
            .limit
            .map(|l| currency.format(l))
            .unwrap_or_else(|| "-".to_string()),
        spent: currency.format(s.spent),
        remaining: s
            .remaining()
            .map(|r| currency.format(r))
            .unwrap_or_else(|| "-".to_string()),
        used: if s.limit.is_some() {
            format!("{}%", s.percentage)
        } else {
            "-".to_string()
        },
        status: s.level.to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}
