//! User settings for fintrack
//!
//! Manages user preferences: display currency, per-period budget limits, the
//! alert toggles and the user profile. Settings are an explicit object handed
//! to whatever needs them, persisted as `config.json`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::FintrackPaths;
use super::profile::Profile;
use crate::error::FintrackError;
use crate::models::{BudgetPeriod, Currency, Money};
use crate::storage::{read_text_optional, write_text_atomic};

/// Spending limits per budget period; `None` means no budget set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BudgetLimits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yearly: Option<Money>,
}

/// User settings for fintrack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency used when displaying amounts
    #[serde(default)]
    pub currency: Currency,

    #[serde(default)]
    pub budgets: BudgetLimits,

    /// Check budgets right after a transaction is recorded
    #[serde(default = "default_true")]
    pub transaction_alerts: bool,

    /// Raise warning/exceeded alerts when spending approaches a budget
    #[serde(default = "default_true")]
    pub budget_warnings: bool,

    #[serde(default)]
    pub profile: Profile,
}

fn default_schema_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: Currency::default(),
            budgets: BudgetLimits::default(),
            transaction_alerts: true,
            budget_warnings: true,
            profile: Profile::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, FintrackError> {
        let settings_path = paths.settings_file();

        let Some(contents) = read_text_optional(&settings_path)? else {
            // Not persisted until the caller saves
            return Ok(Settings::default());
        };

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            FintrackError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        debug!(path = %settings_path.display(), "loaded settings");
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FintrackError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FintrackError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        write_text_atomic(&settings_path, &contents)?;

        debug!(path = %settings_path.display(), "saved settings");
        Ok(())
    }

    /// The configured limit for a period, if any
    pub fn budget_for(&self, period: BudgetPeriod) -> Option<Money> {
        match period {
            BudgetPeriod::Weekly => self.budgets.weekly,
            BudgetPeriod::Monthly => self.budgets.monthly,
            BudgetPeriod::Yearly => self.budgets.yearly,
        }
    }

    /// Set or clear the limit for a period
    pub fn set_budget(&mut self, period: BudgetPeriod, limit: Option<Money>) {
        let slot = match period {
            BudgetPeriod::Weekly => &mut self.budgets.weekly,
            BudgetPeriod::Monthly => &mut self.budgets.monthly,
            BudgetPeriod::Yearly => &mut self.budgets.yearly,
        };
        *slot = limit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency, Currency::Usd);
        assert!(settings.transaction_alerts);
        assert!(settings.budget_warnings);
        assert_eq!(settings.budget_for(BudgetPeriod::Monthly), None);
    }

    #[test]
    fn test_load_missing_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency = Currency::Eur;
        settings.budget_warnings = false;
        settings.set_budget(BudgetPeriod::Monthly, Some(Money::from_cents(50000)));
        settings
            .profile
            .set(crate::config::ProfileField::Email, "ada@example.com")
            .unwrap();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(
            loaded.budget_for(BudgetPeriod::Monthly),
            Some(Money::from_cents(50000))
        );
    }

    #[test]
    fn test_set_budget_clears() {
        let mut settings = Settings::default();
        settings.set_budget(BudgetPeriod::Weekly, Some(Money::from_cents(100)));
        settings.set_budget(BudgetPeriod::Weekly, None);
        assert_eq!(settings.budget_for(BudgetPeriod::Weekly), None);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency":"GBP"}"#).unwrap();
        assert_eq!(settings.currency, Currency::Gbp);
        assert!(settings.transaction_alerts);
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FintrackError::Config(_)));
    }

    #[test]
    fn test_unreadable_settings_path_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::create_dir_all(paths.settings_file()).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FintrackError::Storage(_)));
    }
}
