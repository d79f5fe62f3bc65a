//! Suspension statuses and validation.
//!
//! An active suspension short-circuits eligibility evaluation entirely.

use crate::types::Date;

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_LIFTED: &str = "lifted";

/// All valid suspension statuses.
pub const VALID_SUSPENSION_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_LIFTED];

/// Whether a suspension with the given status and end date is in force on
/// `today`. A suspension ending today still applies.
///
/// This is the only definition of an active suspension; the repository
/// filters with it rather than in SQL.
pub fn is_in_force(status: &str, end_date: Option<Date>, today: Date) -> bool {
    status == STATUS_ACTIVE && end_date.map_or(true, |end| end >= today)
}

/// Validate a new suspension's reason and date range.
pub fn validate_suspension(
    reason: &str,
    start_date: Date,
    end_date: Option<Date>,
) -> Result<(), String> {
    if reason.trim().is_empty() {
        return Err("Suspension reason must not be empty".to_string());
    }
    if let Some(end) = end_date {
        if end < start_date {
            return Err(format!(
                "end_date ({end}) must not be before start_date ({start_date})"
            ));
        }
    }
    Ok(())
}

/// Only active suspensions can be lifted.
pub fn validate_liftable(status: &str) -> Result<(), String> {
    if status == STATUS_ACTIVE {
        Ok(())
    } else {
        Err(format!("Suspension is not active (status '{status}')"))
    }
}
