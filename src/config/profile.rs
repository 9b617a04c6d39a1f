//! User profile
//!
//! Contact details stored with the settings. Every field is optional; an
//! empty value clears it.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::FintrackError;

/// Profile fields that can be set from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Location,
}

impl ProfileField {
    pub const ALL: [ProfileField; 4] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Location,
    ];

    /// Label used when displaying the profile
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Location => "Location",
        }
    }
}

/// The user's contact details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Profile {
    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Set a field to the trimmed `value`; a blank value clears it
    pub fn set(&mut self, field: ProfileField, value: &str) -> Result<(), FintrackError> {
        let value = value.trim();
        if value.contains(|c: char| c.is_control()) {
            return Err(FintrackError::Validation(format!(
                "{} must be a single line of text",
                field.label()
            )));
        }
        if field == ProfileField::Email && !value.is_empty() && !value.contains('@') {
            return Err(FintrackError::Validation(format!(
                "'{}' is not an email address",
                value
            )));
        }

        *self.slot_mut(field) = (!value.is_empty()).then(|| value.to_string());
        Ok(())
    }

    /// Forget every field
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        ProfileField::ALL.iter().all(|f| self.get(*f).is_none())
    }

    fn slot(&self, field: ProfileField) -> &Option<String> {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Location => &self.location,
        }
    }

    fn slot_mut(&mut self, field: ProfileField) -> &mut Option<String> {
        match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Location => &mut self.location,
        }
    }
}
