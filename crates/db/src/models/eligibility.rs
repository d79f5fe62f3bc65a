//! Eligibility check model.
//!
//! Each evaluation inserts a new row. Only the override columns are ever
//! updated afterwards.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use combatid_core::eligibility::RequirementResult;
use combatid_core::types::{Date, DbId, Timestamp};

/// A row from the `eligibility_checks` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EligibilityCheck {
    pub id: DbId,
    pub fighter_id: DbId,
    pub ruleset_id: DbId,
    pub status: String,
    pub overall_score: i32,
    pub valid_until: Option<Date>,
    pub requirements: Json<Vec<RequirementResult>>,
    pub checked_at: Timestamp,
    pub is_overridden: bool,
    pub overridden_by: Option<DbId>,
    pub override_reason: Option<String>,
    pub overridden_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One page of a fighter's check history plus the total number of checks.
#[derive(Debug, Clone, Serialize)]
pub struct EligibilityHistoryPage {
    pub items: Vec<EligibilityCheck>,
    pub total: i64,
}

/// DTO for inserting the result of one evaluation run.
#[derive(Debug, Clone)]
pub struct CreateEligibilityCheck {
    pub fighter_id: DbId,
    pub ruleset_id: DbId,
    pub status: String,
    pub overall_score: i32,
    pub valid_until: Option<Date>,
    pub requirements: Vec<RequirementResult>,
}

/// DTO for an administrative override of the latest check.
#[derive(Debug, Clone)]
pub struct OverrideEligibility {
    pub status: String,
    pub overridden_by: DbId,
    pub reason: String,
}

/// Request body for `POST /fighters/{id}/eligibility/check`.
///
/// Either `ruleset_id`, or `commission_id` + `discipline` to use the pair's
/// active ruleset.
#[derive(Debug, Default, Deserialize)]
pub struct CheckEligibilityRequest {
    pub ruleset_id: Option<DbId>,
    pub commission_id: Option<DbId>,
    pub discipline: Option<String>,
}

/// Request body for `POST /fighters/{id}/eligibility/override`.
#[derive(Debug, Deserialize)]
pub struct OverrideEligibilityRequest {
    pub status: String,
    pub reason: String,
}
