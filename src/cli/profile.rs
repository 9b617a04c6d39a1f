//! Profile CLI commands

use clap::Subcommand;

use crate::config::{FintrackPaths, ProfileField, Settings};
use crate::error::FintrackResult;

/// Profile subcommands
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the profile
    Show,
    /// Change one field; an empty value clears it
    Set {
        #[arg(value_enum)]
        field: ProfileField,
        value: String,
    },
    /// Remove every profile field
    Clear,
}

/// Handle a profile command
pub fn handle_profile_command(
    paths: &FintrackPaths,
    settings: &mut Settings,
    cmd: ProfileCommands,
) -> FintrackResult<()> {
    match cmd {
        ProfileCommands::Show => {
            println!("Profile");
            println!("=======");
            for field in ProfileField::ALL {
                println!(
                    "  {:<11} {}",
                    format!("{}:", field.label()),
                    settings.profile.get(field).unwrap_or("Not set")
                );
            }
        }
        ProfileCommands::Set { field, value } => {
            settings.profile.set(field, &value)?;
            settings.save(paths)?;
            match settings.profile.get(field) {
                Some(value) => println!("{} set to {}", field.label(), value),
                None => println!("{} cleared", field.label()),
            }
        }
        ProfileCommands::Clear => {
            settings.profile.clear();
            settings.save(paths)?;
            println!("Profile cleared");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn set(
        paths: &FintrackPaths,
        settings: &mut Settings,
        field: ProfileField,
        value: &str,
    ) -> FintrackResult<()> {
        handle_profile_command(
            paths,
            settings,
            ProfileCommands::Set {
                field,
                value: value.into(),
            },
        )
    }

    #[test]
    fn test_set_persists() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        set(&paths, &mut settings, ProfileField::Name, "Ada Lovelace").unwrap();
        set(&paths, &mut settings, ProfileField::Phone, "555-0100").unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.profile.get(ProfileField::Name), Some("Ada Lovelace"));
        assert_eq!(loaded.profile.get(ProfileField::Phone), Some("555-0100"));
    }

    #[test]
    fn test_clear_persists() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();
        settings.currency = crate::models::Currency::Eur;

        set(&paths, &mut settings, ProfileField::Email, "ada@example.com").unwrap();
        handle_profile_command(&paths, &mut settings, ProfileCommands::Clear).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(loaded.profile.is_empty());
        assert_eq!(loaded.currency, crate::models::Currency::Eur);
    }

    #[test]
    fn test_invalid_email_not_saved() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        let err = set(&paths, &mut settings, ProfileField::Email, "nope").unwrap_err();
        assert!(err.is_validation());
        assert!(!paths.settings_file().exists());
    }
}
