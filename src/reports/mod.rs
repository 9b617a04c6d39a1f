//! Reports module for fintrack
//!
//! Aggregation over transaction lists, per-window summaries and budget
//! evaluation.

pub mod aggregate;
pub mod budget;
pub mod summary;

pub use aggregate::{
    daily_expenses, filter_by_window, sum_by_category, sum_by_type, CategoryTotal, Totals,
};
pub use budget::{AlertLevel, BudgetStatus};
pub use summary::Summary;
