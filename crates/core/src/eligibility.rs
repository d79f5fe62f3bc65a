//! Fighter eligibility evaluation.
//!
//! Evaluates a fighter's approved documents and suspensions against an
//! ordered list of ruleset requirements and derives a compliance status,
//! a fulfillment score, and a validity cutoff date. This is a pure function
//! over pre-loaded data; loading and persistence live in the API layer.

use chrono::Days;
use serde::{Deserialize, Serialize};

use crate::fighter::age_on;
use crate::ruleset::parse_condition;
use crate::types::{Date, DbId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const STATUS_ELIGIBLE: &str = "eligible";
pub const STATUS_CONDITIONAL: &str = "conditional";
pub const STATUS_INCOMPLETE: &str = "incomplete";
pub const STATUS_SUSPENDED: &str = "suspended";

/// All valid eligibility status strings.
pub const VALID_ELIGIBILITY_STATUSES: &[&str] = &[
    STATUS_ELIGIBLE,
    STATUS_CONDITIONAL,
    STATUS_INCOMPLETE,
    STATUS_SUSPENDED,
];

/// A fulfilled document expiring within this many days makes the fighter
/// conditionally eligible.
pub const EXPIRING_SOON_DAYS: i64 = 30;

/// Note recorded when the ruleset's expiration window has elapsed.
pub const NOTE_WINDOW_EXPIRED: &str = "document expired based on ruleset requirements";

/// Note recorded when the document's own expiration date has passed.
pub const NOTE_DOCUMENT_EXPIRED: &str = "document has passed its expiration date";

/// Maximum length of an override reason.
pub const MAX_OVERRIDE_REASON_LENGTH: usize = 2000;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Overall eligibility of a fighter under one ruleset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityStatus {
    Eligible,
    Conditional,
    Incomplete,
    Suspended,
}

impl EligibilityStatus {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            STATUS_ELIGIBLE => Ok(Self::Eligible),
            STATUS_CONDITIONAL => Ok(Self::Conditional),
            STATUS_INCOMPLETE => Ok(Self::Incomplete),
            STATUS_SUSPENDED => Ok(Self::Suspended),
            _ => Err(format!(
                "Invalid eligibility status '{s}'. Must be one of: {}",
                VALID_ELIGIBILITY_STATUSES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eligible => STATUS_ELIGIBLE,
            Self::Conditional => STATUS_CONDITIONAL,
            Self::Incomplete => STATUS_INCOMPLETE,
            Self::Suspended => STATUS_SUSPENDED,
        }
    }
}

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// One ruleset requirement, in the ruleset's sort order.
#[derive(Debug, Clone)]
pub struct RequirementRule {
    pub name: String,
    pub document_type: String,
    pub is_required: bool,
    /// Validity window in days, counted from the document's issue date.
    pub expiration_days: Option<i32>,
    /// Raw condition expression as stored, e.g. `{"age_over": 35}`.
    pub condition: Option<String>,
}

/// An approved, non-deleted, latest document belonging to the fighter.
#[derive(Debug, Clone)]
pub struct ApprovedDocument {
    pub id: DbId,
    pub document_type: String,
    pub issue_date: Option<Date>,
    pub expiration_date: Option<Date>,
    pub created_at: Timestamp,
}

/// Everything the evaluator needs about one fighter and one ruleset.
#[derive(Debug, Clone, Copy)]
pub struct EligibilityInput<'a> {
    pub date_of_birth: Date,
    pub has_active_suspension: bool,
    pub requirements: &'a [RequirementRule],
    pub documents: &'a [ApprovedDocument],
}

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Per-requirement result embedded in an eligibility check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementResult {
    pub requirement_name: String,
    pub document_type: String,
    pub is_required: bool,
    pub is_fulfilled: bool,
    pub document_id: Option<DbId>,
    pub document_expiration: Option<Date>,
    pub note: Option<String>,
}

/// Result of one evaluation run.
#[derive(Debug, Clone)]
pub struct EligibilityOutcome {
    pub status: EligibilityStatus,
    pub overall_score: i32,
    /// Earliest expiration among required, fulfilled requirements.
    pub valid_until: Option<Date>,
    /// Results for evaluated requirements, in ruleset order.
    pub requirements: Vec<RequirementResult>,
    /// Names of requirements whose condition excluded them.
    pub skipped: Vec<String>,
    /// Names of requirements whose condition could not be parsed and was
    /// treated as satisfied.
    pub malformed_conditions: Vec<String>,
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Compute the fulfillment score as a rounded percentage.
///
/// Returns 0 if nothing was evaluated.
pub fn compute_score(evaluated: usize, fulfilled: usize) -> i32 {
    if evaluated == 0 {
        return 0;
    }
    let pct = (fulfilled as f64 / evaluated as f64 * 100.0).round() as i32;
    pct.min(100)
}

/// Whether a date falls inside the expiring-soon window relative to `today`.
pub fn expires_soon(expiration: Date, today: Date) -> bool {
    let days = (expiration - today).num_days();
    days > 0 && days <= EXPIRING_SOON_DAYS
}

/// Evaluate a fighter against a ruleset as of `today`.
pub fn evaluate(input: EligibilityInput<'_>, today: Date) -> EligibilityOutcome {
    if input.has_active_suspension {
        return EligibilityOutcome {
            status: EligibilityStatus::Suspended,
            overall_score: 0,
            valid_until: None,
            requirements: Vec::new(),
            skipped: Vec::new(),
            malformed_conditions: Vec::new(),
        };
    }

    let age = age_on(input.date_of_birth, today);
    let mut results = Vec::with_capacity(input.requirements.len());
    let mut skipped = Vec::new();
    let mut malformed = Vec::new();

    for rule in input.requirements {
        if let Some(text) = rule.condition.as_deref() {
            match parse_condition(text) {
                Ok(condition) if !condition.applies_to_age(age) => {
                    skipped.push(rule.name.clone());
                    continue;
                }
                Ok(_) => {}
                // Unparseable conditions are treated as satisfied.
                Err(_) => malformed.push(rule.name.clone()),
            }
        }
        results.push(evaluate_requirement(rule, input.documents, today));
    }

    let fulfilled = results.iter().filter(|r| r.is_fulfilled).count();
    let overall_score = compute_score(results.len(), fulfilled);

    let status = if results.iter().any(|r| r.is_required && !r.is_fulfilled) {
        EligibilityStatus::Incomplete
    } else if results
        .iter()
        .filter_map(|r| r.document_expiration)
        .any(|exp| expires_soon(exp, today))
    {
        EligibilityStatus::Conditional
    } else {
        EligibilityStatus::Eligible
    };

    let valid_until = results
        .iter()
        .filter(|r| r.is_required && r.is_fulfilled)
        .filter_map(|r| r.document_expiration)
        .min();

    EligibilityOutcome {
        status,
        overall_score,
        valid_until,
        requirements: results,
        skipped,
        malformed_conditions: malformed,
    }
}

/// Evaluate a single requirement against the fighter's documents.
fn evaluate_requirement(
    rule: &RequirementRule,
    documents: &[ApprovedDocument],
    today: Date,
) -> RequirementResult {
    let matched = documents
        .iter()
        .filter(|d| d.document_type == rule.document_type)
        .max_by_key(|d| (d.created_at, d.id));

    let mut result = RequirementResult {
        requirement_name: rule.name.clone(),
        document_type: rule.document_type.clone(),
        is_required: rule.is_required,
        is_fulfilled: false,
        document_id: None,
        document_expiration: None,
        note: None,
    };

    let Some(doc) = matched else {
        return result;
    };
    result.document_id = Some(doc.id);

    match (rule.expiration_days, doc.issue_date, doc.expiration_date) {
        (Some(days), Some(issued), _) => {
            let expires = issued
                .checked_add_days(Days::new(days.max(0) as u64))
                .unwrap_or(Date::MAX);
            result.document_expiration = Some(expires);
            result.is_fulfilled = expires > today;
            if !result.is_fulfilled {
                result.note = Some(NOTE_WINDOW_EXPIRED.to_string());
            }
        }
        (_, _, Some(expires)) => {
            result.document_expiration = Some(expires);
            result.is_fulfilled = expires > today;
            if !result.is_fulfilled {
                result.note = Some(NOTE_DOCUMENT_EXPIRED.to_string());
            }
        }
        _ => result.is_fulfilled = true,
    }

    result
}

// ---------------------------------------------------------------------------
// Override validation
// ---------------------------------------------------------------------------

/// Validate an override reason.
pub fn validate_override_reason(reason: &str) -> Result<(), String> {
    let trimmed = reason.trim();
    if trimmed.is_empty() {
        return Err("Override reason must not be empty".to_string());
    }
    if trimmed.len() > MAX_OVERRIDE_REASON_LENGTH {
        return Err(format!(
            "Override reason exceeds maximum length of {MAX_OVERRIDE_REASON_LENGTH}"
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
