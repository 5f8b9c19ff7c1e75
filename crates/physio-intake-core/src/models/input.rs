//! Form input and validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Field values captured from an intake form, before a serial is assigned.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientInput {
    pub date: String,
    pub name: String,
    pub gender: String,
    pub phone: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Rejected form input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

impl PatientInput {
    /// Trim every field and check that the required ones are present.
    ///
    /// Empty optional fields normalize to `None`.
    pub fn validate(self) -> Result<Self, ValidationError> {
        let input = Self {
            date: self.date.trim().to_string(),
            name: self.name.trim().to_string(),
            gender: self.gender.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            referral_source: trim_optional(self.referral_source),
            notes: trim_optional(self.notes),
        };

        if input.name.is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if input.gender.is_empty() {
            return Err(ValidationError::MissingField("gender"));
        }
        if input.phone.is_empty() {
            return Err(ValidationError::MissingField("phone"));
        }
        if input.address.is_empty() {
            return Err(ValidationError::MissingField("address"));
        }

        Ok(input)
    }
}

fn trim_optional(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
