//! Ruleset and requirement models.
//!
//! Rulesets are append-only: a requirements change inserts a new ruleset
//! version and deactivates the previous one. Neither rulesets nor
//! requirements are edited in place.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use combatid_core::eligibility::RequirementRule;
use combatid_core::types::{DbId, Timestamp};

/// A row from the `rulesets` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Ruleset {
    pub id: DbId,
    pub commission_id: DbId,
    pub discipline: String,
    pub name: String,
    pub version: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `requirements` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Requirement {
    pub id: DbId,
    pub ruleset_id: DbId,
    pub name: String,
    pub document_type: String,
    pub is_required: bool,
    pub expiration_days: Option<i32>,
    pub condition: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Requirement {
    /// Project this row into the evaluator's input shape.
    pub fn to_rule(&self) -> RequirementRule {
        RequirementRule {
            name: self.name.clone(),
            document_type: self.document_type.clone(),
            is_required: self.is_required,
            expiration_days: self.expiration_days,
            condition: self.condition.clone(),
        }
    }
}

/// A ruleset together with its requirements in sort order.
#[derive(Debug, Clone, Serialize)]
pub struct RulesetWithRequirements {
    #[serde(flatten)]
    pub ruleset: Ruleset,
    pub requirements: Vec<Requirement>,
}

fn default_true() -> bool {
    true
}

/// DTO for one requirement inside a create/update request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRequirement {
    pub name: String,
    pub document_type: String,
    #[serde(default = "default_true")]
    pub is_required: bool,
    pub expiration_days: Option<i32>,
    /// Either a JSON object such as `{"age_over": 35}` or the same as a string.
    pub condition: Option<serde_json::Value>,
    /// Defaults to the requirement's position in the submitted list.
    pub sort_order: Option<i32>,
}

impl CreateRequirement {
    /// The condition as it is stored: JSON text, or `None`.
    pub fn condition_text(&self) -> Option<String> {
        match &self.condition {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    }
}

/// DTO for creating version 1 of a ruleset.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRuleset {
    pub commission_id: DbId,
    pub discipline: String,
    pub name: String,
    #[serde(default)]
    pub requirements: Vec<CreateRequirement>,
}

/// DTO for replacing a ruleset's requirements (creates a new version).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRequirements {
    /// New display name; keeps the previous name when absent.
    pub name: Option<String>,
    pub requirements: Vec<CreateRequirement>,
}

/// Filter parameters for ruleset lookups.
#[derive(Debug, Default, Deserialize)]
pub struct RulesetQuery {
    pub commission_id: Option<DbId>,
    pub discipline: Option<String>,
}
