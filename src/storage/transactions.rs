//! Transaction store backed by the line-format file
//!
//! The whole collection lives in memory and the whole file is rewritten on
//! every mutation. Records stay in file order, which is insertion order.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, Transaction, TransactionId, TransactionType};

use super::codec::{self, SkippedLine};
use super::file_io::{read_text_optional, write_text_atomic};

/// Load a transaction file without keeping a store around.
///
/// A missing file yields an empty result.
pub fn load_file(path: &Path) -> FintrackResult<codec::Decoded> {
    let Some(contents) = read_text_optional(path)? else {
        debug!(path = %path.display(), "transaction file missing, starting empty");
        return Ok(codec::Decoded::default());
    };

    let decoded = codec::decode_all(&contents);
    for skipped in &decoded.skipped {
        debug!(
            path = %path.display(),
            line = skipped.line_number,
            reason = %skipped.error,
            "skipped malformed line"
        );
    }
    if !decoded.skipped.is_empty() {
        warn!(
            path = %path.display(),
            skipped = decoded.skipped.len(),
            "some transaction lines could not be read and were skipped"
        );
    }
    debug!(
        path = %path.display(),
        loaded = decoded.transactions.len(),
        "loaded transactions"
    );
    Ok(decoded)
}

/// Write a transaction collection to a file, replacing it atomically
pub fn save_file(path: &Path, transactions: &[Transaction]) -> FintrackResult<()> {
    let contents = codec::encode_all(transactions)?;
    write_text_atomic(path, &contents)
}

/// Repository for transaction persistence
#[derive(Debug)]
pub struct TransactionStore {
    path: PathBuf,
    transactions: Vec<Transaction>,
    skipped: Vec<SkippedLine>,
}

impl TransactionStore {
    /// Create an empty store for `path` without touching the disk
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            transactions: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Create a store and load its file
    pub fn open(path: PathBuf) -> FintrackResult<Self> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reload transactions from disk, replacing the in-memory collection
    pub fn load(&mut self) -> FintrackResult<&[Transaction]> {
        let decoded = load_file(&self.path)?;
        self.transactions = decoded.transactions;
        self.skipped = decoded.skipped;
        Ok(&self.transactions)
    }

    /// Lines dropped by the most recent load
    pub fn last_load_skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    /// Write the whole collection to disk
    pub fn save(&self) -> FintrackResult<()> {
        save_file(&self.path, &self.transactions)?;
        debug!(count = self.transactions.len(), "saved transactions");
        Ok(())
    }

    /// All transactions in file order
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Identifier for a new transaction created now
    pub fn next_id(&self) -> TransactionId {
        self.next_id_at(Utc::now().timestamp_millis())
    }

    /// Identifier for a new transaction created at `now_millis`
    pub fn next_id_at(&self, now_millis: i64) -> TransactionId {
        TransactionId::allocate(now_millis, self.transactions.iter().map(|t| &t.id))
    }

    /// Record a new transaction under a freshly allocated id
    pub fn add(
        &mut self,
        category: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        kind: TransactionType,
    ) -> FintrackResult<&Transaction> {
        let id = self.next_id();
        self.insert(Transaction::new(id, category, amount, date, kind))
    }

    /// Validate, append and persist a transaction that already has an id.
    ///
    /// The in-memory collection is left unchanged if saving fails.
    pub fn insert(&mut self, txn: Transaction) -> FintrackResult<&Transaction> {
        txn.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.transactions.push(txn);
        if let Err(e) = self.save() {
            self.transactions.pop();
            return Err(e);
        }

        let added = &self.transactions[self.transactions.len() - 1];
        info!(id = %added.id, category = %added.category, "added transaction");
        Ok(added)
    }

    /// Remove every transaction with `id` and persist.
    ///
    /// Returns the removed records.
    pub fn remove(&mut self, id: TransactionId) -> FintrackResult<Vec<Transaction>> {
        let (removed, kept): (Vec<_>, Vec<_>) = self
            .transactions
            .iter()
            .cloned()
            .partition(|t| t.id == id);

        if removed.is_empty() {
            return Err(FintrackError::transaction_not_found(id.to_string()));
        }

        let previous = std::mem::replace(&mut self.transactions, kept);
        if let Err(e) = self.save() {
            self.transactions = previous;
            return Err(e);
        }

        info!(id = %id, count = removed.len(), "removed transaction");
        Ok(removed)
    }

    /// Replace the whole collection and persist
    pub fn replace_all(&mut self, transactions: Vec<Transaction>) -> FintrackResult<()> {
        save_file(&self.path, &transactions)?;
        self.transactions = transactions;
        self.skipped.clear();
        info!(count = self.transactions.len(), "replaced all transactions");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn txn(id: i64, category: &str, cents: i64, kind: TransactionType) -> Transaction {
        Transaction::new(
            TransactionId::from_raw(id),
            category,
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2025, 3, id as u32 % 28 + 1).unwrap(),
            kind,
        )
    }

    fn store_in(temp_dir: &TempDir) -> TransactionStore {
        TransactionStore::new(temp_dir.path().join("data").join("transactions.json"))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);

        assert!(store.load().unwrap().is_empty());
        assert!(store.last_load_skipped().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let transactions = vec![
            txn(3, "Food", 1000, TransactionType::Expense),
            txn(1, "Salary", 250000, TransactionType::Income),
            txn(2, "Transport", 705, TransactionType::Expense),
        ];

        let mut store = store_in(&temp_dir);
        store.replace_all(transactions.clone()).unwrap();

        let reopened = TransactionStore::open(store.path().to_path_buf()).unwrap();
        // File order preserved, no re-sort
        assert_eq!(reopened.all(), transactions.as_slice());
    }

    #[test]
    fn test_save_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);
        store
            .replace_all(vec![
                txn(1, "Food", 1000, TransactionType::Expense),
                txn(2, "Pets", 1999, TransactionType::Expense),
            ])
            .unwrap();

        let first = fs::read(store.path()).unwrap();
        store.save().unwrap();
        let second = fs::read(store.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_lines_are_skipped_and_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        fs::write(
            &path,
            "1,Food,10.0,EXPENSE,1735689600000\n\
             2,Food,5.0\n\
             3,Transport,7.0,EXPENSE,1735689600000\n\
             4,a,b,c,d,e,f\n\
             5,Salary,100.0,INCOME,1735689600000",
        )
        .unwrap();

        let store = TransactionStore::open(path).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.last_load_skipped().len(), 2);
        assert_eq!(store.last_load_skipped()[0].line_number, 2);
    }

    #[test]
    fn test_add_persists() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);

        let id = store.next_id_at(1_000);
        let added = store
            .insert(Transaction::new(
                id,
                "Food",
                Money::from_cents(1200),
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                TransactionType::Expense,
            ))
            .unwrap()
            .clone();
        assert_eq!(added.id.as_i64(), 1_000);

        let reopened = TransactionStore::open(store.path().to_path_buf()).unwrap();
        assert_eq!(reopened.all(), &[added]);
    }

    #[test]
    fn test_add_rejects_invalid_transaction() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);

        let err = store
            .insert(txn(1, "Food", 0, TransactionType::Expense))
            .unwrap_err();
        assert!(err.is_validation());

        let err = store
            .add(
                "Food,Drinks",
                Money::from_cents(100),
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                TransactionType::Expense,
            )
            .unwrap_err();
        assert!(err.is_validation());

        assert!(store.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_add_allocates_distinct_ids() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        let first = store
            .add("Food", Money::from_cents(100), date, TransactionType::Expense)
            .unwrap()
            .id;
        let second = store
            .add("Food", Money::from_cents(100), date, TransactionType::Expense)
            .unwrap()
            .id;
        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_next_id_never_collides() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);

        for _ in 0..3 {
            let id = store.next_id_at(500);
            store
                .insert(Transaction::new(
                    id,
                    "Food",
                    Money::from_cents(100),
                    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                    TransactionType::Expense,
                ))
                .unwrap();
        }

        let ids: Vec<i64> = store.all().iter().map(|t| t.id.as_i64()).collect();
        assert_eq!(ids, vec![500, 501, 502]);
    }

    #[test]
    fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);
        store
            .replace_all(vec![
                txn(1, "Food", 1000, TransactionType::Expense),
                txn(2, "Pets", 500, TransactionType::Expense),
            ])
            .unwrap();

        let removed = store.remove(TransactionId::from_raw(1)).unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(store.len(), 1);

        let reopened = TransactionStore::open(store.path().to_path_buf()).unwrap();
        assert_eq!(reopened.all()[0].category, "Pets");
    }

    #[test]
    fn test_remove_duplicates_and_missing() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);
        store
            .replace_all(vec![
                txn(7, "Food", 1000, TransactionType::Expense),
                txn(7, "Food", 1000, TransactionType::Expense),
            ])
            .unwrap();

        assert_eq!(store.remove(TransactionId::from_raw(7)).unwrap().len(), 2);
        assert!(store.is_empty());

        let err = store.remove(TransactionId::from_raw(7)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_replace_all_rejects_unencodable_category() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);
        store
            .replace_all(vec![txn(1, "Food", 1000, TransactionType::Expense)])
            .unwrap();

        let err = store
            .replace_all(vec![txn(2, "a,b", 100, TransactionType::Expense)])
            .unwrap_err();
        assert!(err.is_validation());
        // Previous contents untouched
        assert_eq!(store.len(), 1);
        let reopened = TransactionStore::open(store.path().to_path_buf()).unwrap();
        assert_eq!(reopened.all()[0].id.as_i64(), 1);
    }
}
