//! Transaction model
//!
//! A transaction is a single income or expense entry: an amount, a free-text
//! category and the calendar date the user assigned to it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;

/// Field delimiter of the stored line format
pub const FIELD_DELIMITER: char = ',';

/// Category suggestions offered when entering a transaction
pub const SUGGESTED_CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Entertainment",
    "Shopping",
    "Home",
    "Pets",
    "Other",
];

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Name used in the stored line format
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }

    /// Parse the exact stored name (`INCOME` / `EXPENSE`)
    pub fn from_stored(s: &str) -> Option<Self> {
        match s {
            "INCOME" => Some(Self::Income),
            "EXPENSE" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            _ => Err(format!("Invalid type: '{}'. Use income or expense", s)),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque identifier
    pub id: TransactionId,

    /// Free-text category label
    pub category: String,

    /// Always positive; direction comes from `kind`
    pub amount: Money,

    /// User-entered date
    pub date: NaiveDate,

    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        category: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        kind: TransactionType,
    ) -> Self {
        Self {
            id,
            category: category.into(),
            amount,
            date,
            kind,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Validate the transaction before it reaches storage
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if self.amount.exceeds_max() {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }

        if self
            .category
            .contains(|c: char| c == FIELD_DELIMITER || c == '\n' || c == '\r')
        {
            return Err(TransactionValidationError::CategoryContainsDelimiter(
                self.category.clone(),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    EmptyCategory,
    CategoryContainsDelimiter(String),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than 0 (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount {} is larger than the maximum of {}", amount, Money::MAX)
            }
            Self::EmptyCategory => write!(f, "Please select a category"),
            Self::CategoryContainsDelimiter(category) => write!(
                f,
                "Category '{}' must not contain '{}' or line breaks",
                category.escape_debug(),
                FIELD_DELIMITER
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
