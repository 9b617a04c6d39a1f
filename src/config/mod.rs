//! Configuration module for fintrack
//!
//! This module provides configuration management including:
//! - platform path resolution
//! - user settings persistence
//! - the user profile kept inside the settings

pub mod paths;
pub mod profile;
pub mod settings;

pub use paths::FintrackPaths;
pub use profile::{Profile, ProfileField};
pub use settings::{BudgetLimits, Settings};
