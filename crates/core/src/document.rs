//! Fighter document types, review statuses, and validation.
//!
//! Documents are uploaded by or for a fighter and reviewed by a commission
//! official. Only approved, non-deleted, latest documents count toward
//! eligibility.

use crate::types::Date;

// ---------------------------------------------------------------------------
// Document types
// ---------------------------------------------------------------------------

pub const TYPE_MEDICAL_CLEARANCE: &str = "medical_clearance";
pub const TYPE_PHYSICAL_EXAM: &str = "physical_exam";
pub const TYPE_BLOOD_WORK: &str = "blood_work";
pub const TYPE_EYE_EXAM: &str = "eye_exam";
pub const TYPE_MRI_SCAN: &str = "mri_scan";
pub const TYPE_EKG: &str = "ekg";
pub const TYPE_PHOTO_ID: &str = "photo_id";
pub const TYPE_PASSPORT: &str = "passport";
pub const TYPE_FIGHT_LICENSE: &str = "fight_license";
pub const TYPE_INSURANCE: &str = "insurance";

/// All valid document types.
pub const VALID_DOCUMENT_TYPES: &[&str] = &[
    TYPE_MEDICAL_CLEARANCE,
    TYPE_PHYSICAL_EXAM,
    TYPE_BLOOD_WORK,
    TYPE_EYE_EXAM,
    TYPE_MRI_SCAN,
    TYPE_EKG,
    TYPE_PHOTO_ID,
    TYPE_PASSPORT,
    TYPE_FIGHT_LICENSE,
    TYPE_INSURANCE,
];

// ---------------------------------------------------------------------------
// Review statuses
// ---------------------------------------------------------------------------

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";

/// All valid document statuses.
pub const VALID_DOCUMENT_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_APPROVED, STATUS_REJECTED];

/// Maximum length of a reviewer's note.
pub const MAX_REVIEW_NOTE_LENGTH: usize = 2000;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a document type is one of the known types.
pub fn validate_document_type(document_type: &str) -> Result<(), String> {
    if VALID_DOCUMENT_TYPES.contains(&document_type) {
        Ok(())
    } else {
        Err(format!(
            "Invalid document type '{document_type}'. Must be one of: {}",
            VALID_DOCUMENT_TYPES.join(", ")
        ))
    }
}

/// Validate that an explicit expiration date does not precede the issue date.
pub fn validate_document_dates(
    issue_date: Option<Date>,
    expiration_date: Option<Date>,
) -> Result<(), String> {
    match (issue_date, expiration_date) {
        (Some(issued), Some(expires)) if expires < issued => Err(format!(
            "expiration_date ({expires}) must not be before issue_date ({issued})"
        )),
        _ => Ok(()),
    }
}

/// Only pending documents can be approved or rejected.
pub fn validate_reviewable(status: &str) -> Result<(), String> {
    if status == STATUS_PENDING {
        Ok(())
    } else {
        Err(format!(
            "Document has already been reviewed (status '{status}')"
        ))
    }
}

/// A rejection must carry a non-blank note explaining why.
pub fn validate_rejection_note(note: Option<&str>) -> Result<(), String> {
    let note = note.map(str::trim).unwrap_or_default();
    if note.is_empty() {
        return Err("A rejection note is required".to_string());
    }
    if note.len() > MAX_REVIEW_NOTE_LENGTH {
        return Err(format!(
            "Rejection note exceeds maximum length of {MAX_REVIEW_NOTE_LENGTH}"
        ));
    }
    Ok(())
}
