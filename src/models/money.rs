//! Monetary amounts
//!
//! Amounts are whole cents in an `i64`. The stored line format writes them as
//! plain decimals (`12.50`); the settings file keeps raw cents. Arithmetic
//! saturates at the `i64` bounds instead of overflowing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};

/// An amount in cents
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount a single transaction or budget may hold: 999,999,999,999.99
    pub const MAX: Money = Money(99_999_999_999_999);

    /// Wrap a raw number of cents
    ///
    /// # Examples
    /// ```
    /// use fintrack::models::Money;
    /// let amount = Money::from_cents(1050);
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Whole units plus cents, e.g. `(10, 50)` for 10.50
    pub const fn from_units_cents(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// True when the amount is above [`Money::MAX`]
    pub const fn exceeds_max(&self) -> bool {
        self.0 > Self::MAX.0
    }

    /// Whole-number percentage of `self` relative to `total`, truncated.
    ///
    /// Returns 0 when either amount is not positive.
    pub fn percent_of(&self, total: Money) -> u32 {
        if total.0 <= 0 || self.0 <= 0 {
            return 0;
        }
        let pct = i128::from(self.0) * 100 / i128::from(total.0);
        u32::try_from(pct).unwrap_or(u32::MAX)
    }

    /// Parse a decimal amount such as `12.50`, `-3`, `.5` or `$10`.
    ///
    /// Digits past the second decimal place are dropped, not rounded.
    /// Exponents, thousands separators and explicit `+` signs are rejected.
    pub fn parse(input: &str) -> Result<Self, MoneyParseError> {
        let trimmed = input.trim();
        let invalid = || MoneyParseError::InvalidFormat(input.to_string());
        let out_of_range = || MoneyParseError::OutOfRange(input.to_string());

        let (sign, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, trimmed),
        };
        let digits = unsigned.strip_prefix('$').unwrap_or(unsigned);

        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(invalid());
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };

        // Pad or cut the fraction to exactly two digits
        let mut cents_text: String = fraction.chars().take(2).collect();
        while cents_text.len() < 2 {
            cents_text.push('0');
        }
        let cents: i64 = cents_text.parse().map_err(|_| invalid())?;

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(|total| Self(sign * total))
            .ok_or_else(out_of_range)
    }

    /// Render with a currency symbol, sign first: `-$3.20`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{}{}{}.{:02}", sign, symbol, abs / 100, abs % 100)
    }
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Plain decimal rendering without a currency symbol, e.g. `12.50`
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with_symbol(""))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, m| total + m)
    }
}

/// Why an amount could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "'{}' is not a valid amount", s),
            Self::OutOfRange(s) => write!(f, "'{}' is too large", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
