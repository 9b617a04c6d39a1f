//! Line codec for the transaction file
//!
//! One record per line, five positional fields:
//!
//! ```text
//! <id>,<category>,<amount>,<INCOME|EXPENSE>,<date as epoch millis>
//! ```
//!
//! Categories are not escaped, so encoding refuses a category containing the
//! delimiter or a line break. Decoding is per line; a bad line never aborts
//! the whole file.
//!
//! Dates are stored as the epoch milliseconds of the day's local midnight,
//! the same instant the mobile app writes. The `_in` variants take an
//! explicit time zone; the plain ones use the system's local zone.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};
use thiserror::Error;

use crate::error::{FintrackError, FintrackResult};
use crate::models::transaction::FIELD_DELIMITER;
use crate::models::money::MoneyParseError;
use crate::models::{Money, Transaction, TransactionId, TransactionType};

/// Number of fields in a stored line
pub const FIELD_COUNT: usize = 5;

/// Why a stored line could not be decoded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("expected 5 fields, found {0}")]
    FieldCount(usize),

    #[error("invalid id '{0}'")]
    InvalidId(String),

    #[error("invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("amount must be greater than 0, found {0}")]
    NonPositiveAmount(Money),

    #[error("amount '{0}' is larger than 999999999999.99")]
    AmountTooLarge(String),

    #[error("invalid type '{0}'")]
    InvalidType(String),

    #[error("invalid date '{0}'")]
    InvalidDate(String),
}

/// A line that was dropped while decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the file
    pub line_number: usize,
    pub error: LineError,
}

/// Result of decoding a whole file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Records in file order
    pub transactions: Vec<Transaction>,
    pub skipped: Vec<SkippedLine>,
}

/// Encode one transaction as a stored line (without line terminator)
pub fn encode_line(txn: &Transaction) -> FintrackResult<String> {
    encode_line_in(txn, &Local)
}

/// Encode one transaction, writing its date as midnight in `tz`
pub fn encode_line_in<Tz: TimeZone>(txn: &Transaction, tz: &Tz) -> FintrackResult<String> {
    if txn
        .category
        .contains(|c: char| c == FIELD_DELIMITER || c == '\n' || c == '\r')
    {
        return Err(FintrackError::Validation(format!(
            "Transaction {}: category '{}' contains the field delimiter or a line break",
            txn.id,
            txn.category.escape_debug()
        )));
    }

    Ok(format!(
        "{}{d}{}{d}{}{d}{}{d}{}",
        txn.id,
        txn.category,
        txn.amount,
        txn.kind.as_str(),
        date_to_millis_in(txn.date, tz),
        d = FIELD_DELIMITER
    ))
}

/// Encode a whole collection, one line per transaction, newline-separated
pub fn encode_all(transactions: &[Transaction]) -> FintrackResult<String> {
    let lines = transactions
        .iter()
        .map(encode_line)
        .collect::<FintrackResult<Vec<_>>>()?;
    Ok(lines.join("\n"))
}

/// Decode one stored line
pub fn decode_line(line: &str) -> Result<Transaction, LineError> {
    decode_line_in(line, &Local)
}

/// Decode one stored line, reading its timestamp as a date in `tz`
pub fn decode_line_in<Tz: TimeZone>(line: &str, tz: &Tz) -> Result<Transaction, LineError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Err(LineError::FieldCount(fields.len()));
    }

    let id: i64 = fields[0]
        .parse()
        .map_err(|_| LineError::InvalidId(fields[0].to_string()))?;

    let amount = decode_amount(fields[2])?;
    if !amount.is_positive() {
        return Err(LineError::NonPositiveAmount(amount));
    }

    let kind = TransactionType::from_stored(fields[3])
        .ok_or_else(|| LineError::InvalidType(fields[3].to_string()))?;

    let date = fields[4]
        .parse::<i64>()
        .ok()
        .and_then(|millis| millis_to_date_in(millis, tz))
        .ok_or_else(|| LineError::InvalidDate(fields[4].to_string()))?;

    Ok(Transaction::new(
        TransactionId::from_raw(id),
        fields[1],
        amount,
        date,
        kind,
    ))
}

/// Decode every line of a file's contents, collecting skipped lines
pub fn decode_all(contents: &str) -> Decoded {
    let mut decoded = Decoded::default();

    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match decode_line(line) {
            Ok(txn) => decoded.transactions.push(txn),
            Err(error) => decoded.skipped.push(SkippedLine {
                line_number: index + 1,
                error,
            }),
        }
    }

    decoded
}

/// Plain unsigned decimals first, then a float fallback for values like
/// `1.0E7` that the mobile app's writer produced for large amounts.
///
/// Signs, currency symbols and surrounding whitespace never appear in a
/// stored amount and are rejected.
fn decode_amount(field: &str) -> Result<Money, LineError> {
    let invalid = || LineError::InvalidAmount(field.to_string());
    let too_large = || LineError::AmountTooLarge(field.to_string());

    let amount = if is_plain_decimal(field) {
        Money::parse(field).map_err(|e| match e {
            MoneyParseError::OutOfRange(_) => too_large(),
            MoneyParseError::InvalidFormat(_) => invalid(),
        })?
    } else if is_plain_scientific(field) {
        let value: f64 = field.parse().map_err(|_| invalid())?;
        let cents = (value * 100.0).round();
        if !cents.is_finite() || cents > Money::MAX.cents() as f64 {
            return Err(too_large());
        }
        Money::from_cents(cents as i64)
    } else {
        return Err(invalid());
    };

    if amount.exceeds_max() {
        return Err(too_large());
    }
    Ok(amount)
}

/// Digits with at most one decimal point, e.g. `12`, `12.5`, `.5`
fn is_plain_decimal(field: &str) -> bool {
    let (whole, fraction) = field.split_once('.').unwrap_or((field, ""));
    (!whole.is_empty() || !fraction.is_empty())
        && whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit())
}

/// A plain decimal mantissa with an `E`/`e` exponent, e.g. `1.0E7`
fn is_plain_scientific(field: &str) -> bool {
    let Some((mantissa, exponent)) = field.split_once(|c: char| c == 'e' || c == 'E') else {
        return false;
    };
    let exponent = exponent.strip_prefix('-').unwrap_or(exponent);
    is_plain_decimal(mantissa)
        && !exponent.is_empty()
        && exponent.bytes().all(|b| b.is_ascii_digit())
}

/// Epoch milliseconds of the date's local midnight
pub fn date_to_millis(date: NaiveDate) -> i64 {
    date_to_millis_in(date, &Local)
}

/// Epoch milliseconds of the date's midnight in `tz`.
///
/// When midnight falls in a daylight-saving gap the first valid hour of the
/// day is used.
pub fn date_to_millis_in<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> i64 {
    (0..4)
        .filter_map(|hour| date.and_hms_opt(hour, 0, 0))
        .find_map(|local| tz.from_local_datetime(&local).earliest())
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN).and_utc().timestamp_millis())
}

/// Local calendar date of an epoch-millisecond timestamp
pub fn millis_to_date(millis: i64) -> Option<NaiveDate> {
    millis_to_date_in(millis, &Local)
}

/// Calendar date in `tz` of an epoch-millisecond timestamp
pub fn millis_to_date_in<Tz: TimeZone>(millis: i64, tz: &Tz) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.with_timezone(tz).date_naive())
}
