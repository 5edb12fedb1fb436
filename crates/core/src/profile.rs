//! User profile rules: demographic field validation and derived age.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::fields::{limit_text, require_text};
use crate::types::Date;

pub const MAX_FIRSTNAME_LENGTH: usize = 50;
pub const MAX_SURNAME_LENGTH: usize = 200;
pub const MAX_LOCALITY_LENGTH: usize = 50;
pub const MAX_ADDRESS_LENGTH: usize = 100;
pub const MAX_ADDRESS_NUMBER_LENGTH: usize = 3;
pub const MAX_ADDRESS_LETTER_LENGTH: usize = 2;
pub const MAX_NID_LENGTH: usize = 200;
pub const MAX_PHONE_DIGITS: usize = 9;
pub const MAX_INTEREST_LENGTH: usize = 50;

/// Gender codes stored on the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Gender::Male),
            "F" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// Age in whole years on `today`, or `None` if the birthdate is unknown.
///
/// A birthdate in the future yields `Some(0)`.
pub fn age_on(birthdate: Option<Date>, today: Date) -> Option<i32> {
    let birthdate = birthdate?;
    let mut years = today.year() - birthdate.year();
    if (today.month(), today.day()) < (birthdate.month(), birthdate.day()) {
        years -= 1;
    }
    Some(years.max(0))
}

/// Phone numbers are at most nine digits.
pub fn validate_phone(field: &str, phone: &str) -> Result<(), String> {
    if phone.is_empty() {
        return Ok(());
    }
    if !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("{field} must contain digits only"));
    }
    if phone.len() > MAX_PHONE_DIGITS {
        return Err(format!("{field} must have at most {MAX_PHONE_DIGITS} digits"));
    }
    Ok(())
}

/// Validate one of the locality fields (province, region, neighborhood).
pub fn validate_locality(field: &str, value: &str) -> Result<(), String> {
    limit_text(field, value, MAX_LOCALITY_LENGTH)
}

pub fn validate_interest(item: &str) -> Result<(), String> {
    require_text("Interest", item, MAX_INTEREST_LENGTH)
}
