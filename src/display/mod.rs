//! Display formatting for terminal output
//!
//! Tables are rendered with `tabled`; amounts are shown with the configured
//! currency symbol.

pub mod report;
pub mod transaction;

pub use report::{format_budget_table, format_category_table, format_daily_table};
pub use transaction::{format_transaction_details, format_transaction_table};

/// Horizontal bar scaled so that `max` fills `width` cells
pub(crate) fn bar(value: i64, max: i64, width: usize) -> String {
    if value <= 0 || max <= 0 {
        return String::new();
    }
    let cells = (value as i128 * width as i128 / max as i128) as usize;
    "#".repeat(cells.clamp(1, width))
}

/// Truncate a string to a maximum number of characters
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
