//! fintrack - personal income and expense tracker
//!
//! This library provides the core functionality for the fintrack command-line
//! application: recording transactions, summarizing them over time windows,
//! checking spending against budgets, and backing the data up.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution, user settings and profile
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, money, windows, currencies)
//! - `storage`: Line-format transaction file with atomic writes
//! - `reports`: Aggregation, summaries and budget evaluation
//! - `alerts`: Budget alert delivery
//! - `backup`: Backup export and restore
//! - `export`: CSV, JSON and YAML export
//! - `display`: Terminal tables
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::{FintrackPaths, Settings};
//! use fintrack::storage::Storage;
//!
//! let paths = FintrackPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(paths)?;
//! ```

pub mod alerts;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{FintrackError, FintrackResult};
