//! Aggregation over in-memory transaction lists
//!
//! Pure functions; empty input yields zero totals and empty collections.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::models::{Money, Transaction, TransactionType, Window};

/// Income and expense totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
}

impl Totals {
    /// Income minus expense
    pub fn balance(&self) -> Money {
        self.income - self.expense
    }
}

/// Expense total for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    /// Number of transactions in the category
    pub count: usize,
}

impl CategoryTotal {
    /// Share of `overall` as a percentage
    pub fn percentage(&self, overall: Money) -> f64 {
        if !overall.is_positive() {
            return 0.0;
        }
        self.total.cents() as f64 / overall.cents() as f64 * 100.0
    }
}

/// Transactions whose date falls in `window`, in their original order
pub fn filter_by_window<'a>(
    transactions: &'a [Transaction],
    window: Window,
    reference: NaiveDate,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|t| window.contains(t.date, reference))
        .collect()
}

/// Sum income and expense separately
pub fn sum_by_type<'a, I>(transactions: I) -> Totals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .fold(Totals::default(), |mut totals, txn| {
            match txn.kind {
                TransactionType::Income => totals.income += txn.amount,
                TransactionType::Expense => totals.expense += txn.amount,
            }
            totals
        })
}

/// Expense totals per category, largest first; ties ordered by name
pub fn sum_by_category<'a, I>(transactions: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut by_category: HashMap<&str, (Money, usize)> = HashMap::new();
    for txn in transactions.into_iter().filter(|t| t.is_expense()) {
        let entry = by_category
            .entry(txn.category.as_str())
            .or_insert((Money::zero(), 0));
        entry.0 += txn.amount;
        entry.1 += 1;
    }

    let mut totals: Vec<CategoryTotal> = by_category
        .into_iter()
        .map(|(category, (total, count))| CategoryTotal {
            category: category.to_string(),
            total,
            count,
        })
        .collect();

    totals.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.category.cmp(&b.category))
    });
    totals
}

/// Expense total per day, in date order
pub fn daily_expenses<'a, I>(transactions: I) -> BTreeMap<NaiveDate, Money>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut daily = BTreeMap::new();
    for txn in transactions.into_iter().filter(|t| t.is_expense()) {
        *daily.entry(txn.date).or_insert_with(Money::zero) += txn.amount;
    }
    daily
}
