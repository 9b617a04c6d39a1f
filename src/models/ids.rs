//! Transaction identifiers
//!
//! Identifiers are plain integers on disk (the first field of every stored
//! line). New identifiers start from the current epoch-millisecond timestamp
//! and are bumped past any identifier already in use.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Strongly-typed transaction identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    /// Wrap a raw identifier value
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the underlying integer
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// Allocate an identifier that does not collide with `existing`.
    ///
    /// The candidate is `now_millis`; if any existing id is greater than or
    /// equal to it, the result is `max(existing) + 1`.
    pub fn allocate<'a, I>(now_millis: i64, existing: I) -> Self
    where
        I: IntoIterator<Item = &'a TransactionId>,
    {
        let max_existing = existing.into_iter().map(|id| id.0).max();
        match max_existing {
            Some(max) if max >= now_millis => Self(max.saturating_add(1)),
            _ => Self(now_millis),
        }
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TransactionId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl FromStr for TransactionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_uses_timestamp_when_free() {
        let existing = [TransactionId::from_raw(10), TransactionId::from_raw(20)];
        let id = TransactionId::allocate(1_000, existing.iter());
        assert_eq!(id.as_i64(), 1_000);
    }

    #[test]
    fn test_allocate_bumps_past_collision() {
        let existing = [TransactionId::from_raw(1_000)];
        let id = TransactionId::allocate(1_000, existing.iter());
        assert_eq!(id.as_i64(), 1_001);
    }

    #[test]
    fn test_allocate_rapid_inserts_never_collide() {
        let mut ids: Vec<TransactionId> = Vec::new();
        for _ in 0..5 {
            // Same millisecond every time
            let id = TransactionId::allocate(42, ids.iter());
            assert!(!ids.contains(&id));
            ids.push(id);
        }
        assert_eq!(ids.last().unwrap().as_i64(), 46);
    }

    #[test]
    fn test_allocate_with_no_existing() {
        let id = TransactionId::allocate(7, std::iter::empty());
        assert_eq!(id.as_i64(), 7);
    }

    #[test]
    fn test_parse_and_display() {
        let id: TransactionId = "1700000000123".parse().unwrap();
        assert_eq!(id.to_string(), "1700000000123");
        assert!("txn-1".parse::<TransactionId>().is_err());
    }
}
