//! Fighter profile validation and age derivation.

use chrono::Datelike;

use crate::types::Date;

/// Maximum length of a first or last name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Age in whole years on `today`, using calendar-correct subtraction.
///
/// The year difference is decremented by one when `today`'s month/day
/// precedes the birth month/day.
pub fn age_on(date_of_birth: Date, today: Date) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

/// Validate a single name field.
pub fn validate_name(field: &str, value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    if trimmed.len() > MAX_NAME_LENGTH {
        return Err(format!("{field} exceeds maximum length of {MAX_NAME_LENGTH}"));
    }
    Ok(())
}

/// A date of birth cannot be in the future.
pub fn validate_date_of_birth(date_of_birth: Date, today: Date) -> Result<(), String> {
    if date_of_birth > today {
        return Err(format!("date_of_birth ({date_of_birth}) is in the future"));
    }
    Ok(())
}
