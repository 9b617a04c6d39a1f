//! Transaction display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::truncate;
use crate::models::{Currency, Transaction, TransactionType};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, currency: Currency) -> Self {
        let signed = match txn.kind {
            TransactionType::Income => txn.amount,
            TransactionType::Expense => -txn.amount,
        };
        Self {
            id: txn.id.to_string(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            kind: txn.kind.to_string(),
            category: truncate(&txn.category, 24),
            amount: currency.format(signed),
        }
    }
}

/// Format a list of transactions as a table
pub fn format_transaction_table(transactions: &[&Transaction], currency: Currency) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions
        .iter()
        .map(|txn| TransactionRow::new(txn, currency));
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()));

    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, currency: Currency) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Amount:      {}\n", currency.format(txn.amount)));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionId};
    use chrono::NaiveDate;

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::new(
                TransactionId::from_raw(11),
                "Food",
                Money::from_cents(1250),
                NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
                TransactionType::Expense,
            ),
            Transaction::new(
                TransactionId::from_raw(12),
                "Salary",
                Money::from_cents(300000),
                NaiveDate::from_ymd_opt(2025, 1, 16).unwrap(),
                TransactionType::Income,
            ),
        ]
    }

    #[test]
    fn test_table_contents() {
        let txns = sample();
        let refs: Vec<&Transaction> = txns.iter().collect();
        let output = format_transaction_table(&refs, Currency::Eur);

        assert!(output.contains("Category"));
        assert!(output.contains("-€12.50"));
        assert!(output.contains("€3000.00"));
        assert!(output.contains("2025-01-16"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(
            format_transaction_table(&[], Currency::Usd),
            "No transactions found.\n"
        );
    }

    #[test]
    fn test_details() {
        let txns = sample();
        let output = format_transaction_details(&txns[0], Currency::Usd);
        assert!(output.contains("Transaction: 11"));
        assert!(output.contains("Amount:      $12.50"));
    }
}
