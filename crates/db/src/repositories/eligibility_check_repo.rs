//! Repository for the `eligibility_checks` table.
//!
//! Checks are append-only history. The only update is an override, which
//! rewrites the status and records who overrode it and why.

use sqlx::types::Json;
use sqlx::PgPool;
use combatid_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use combatid_core::types::DbId;

use crate::models::eligibility::{CreateEligibilityCheck, EligibilityCheck, OverrideEligibility};

/// Column list for eligibility check queries.
const COLUMNS: &str = "id, fighter_id, ruleset_id, status, overall_score, valid_until, \
                       requirements, checked_at, is_overridden, overridden_by, \
                       override_reason, overridden_at, created_at, updated_at";

/// Provides insert, history, and override operations for eligibility checks.
pub struct EligibilityCheckRepo;

impl EligibilityCheckRepo {
    /// Insert the result of an evaluation run.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEligibilityCheck,
    ) -> Result<EligibilityCheck, sqlx::Error> {
        let query = format!(
            "INSERT INTO eligibility_checks
                (fighter_id, ruleset_id, status, overall_score, valid_until, requirements)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EligibilityCheck>(&query)
            .bind(input.fighter_id)
            .bind(input.ruleset_id)
            .bind(&input.status)
            .bind(input.overall_score)
            .bind(input.valid_until)
            .bind(Json(&input.requirements))
            .fetch_one(pool)
            .await
    }

    /// Find the most recent check for a fighter.
    pub async fn find_latest_for_fighter(
        pool: &PgPool,
        fighter_id: DbId,
    ) -> Result<Option<EligibilityCheck>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM eligibility_checks
             WHERE fighter_id = $1
             ORDER BY checked_at DESC, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, EligibilityCheck>(&query)
            .bind(fighter_id)
            .fetch_optional(pool)
            .await
    }

    /// List a fighter's checks, most recent first.
    pub async fn list_for_fighter(
        pool: &PgPool,
        fighter_id: DbId,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<EligibilityCheck>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM eligibility_checks
             WHERE fighter_id = $1
             ORDER BY checked_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, EligibilityCheck>(&query)
            .bind(fighter_id)
            .bind(clamp_limit(limit, DEFAULT_LIMIT, MAX_LIMIT))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// Count all checks recorded for a fighter.
    pub async fn count_for_fighter(pool: &PgPool, fighter_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM eligibility_checks WHERE fighter_id = $1",
        )
        .bind(fighter_id)
        .fetch_one(pool)
        .await
    }

    /// Apply an override to a check. Requirement results are left untouched.
    pub async fn apply_override(
        pool: &PgPool,
        id: DbId,
        input: &OverrideEligibility,
    ) -> Result<Option<EligibilityCheck>, sqlx::Error> {
        let query = format!(
            "UPDATE eligibility_checks SET
                status = $2,
                is_overridden = TRUE,
                overridden_by = $3,
                override_reason = $4,
                overridden_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EligibilityCheck>(&query)
            .bind(id)
            .bind(&input.status)
            .bind(input.overridden_by)
            .bind(input.reason.trim())
            .fetch_optional(pool)
            .await
    }
}
