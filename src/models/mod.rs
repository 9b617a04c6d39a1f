//! Core data models for fintrack
//!
//! This module contains the data structures of the finance domain:
//! transactions, money amounts, currencies and time windows.

pub mod currency;
pub mod ids;
pub mod money;
pub mod transaction;
pub mod window;

pub use currency::Currency;
pub use ids::TransactionId;
pub use money::Money;
pub use transaction::{Transaction, TransactionType, SUGGESTED_CATEGORIES};
pub use window::{BudgetPeriod, Window};
