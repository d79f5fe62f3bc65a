//! Repository for the `suspensions` table.

use sqlx::PgPool;
use combatid_core::suspension::{is_in_force, STATUS_ACTIVE, STATUS_LIFTED};
use combatid_core::types::{Date, DbId};

use crate::models::suspension::{CreateSuspension, Suspension};

/// Column list for suspension queries.
const COLUMNS: &str = "id, fighter_id, commission_id, reason, status, start_date, end_date, \
                       issued_by, lifted_by, lifted_at, created_at, updated_at";

/// Provides CRUD operations for suspensions.
pub struct SuspensionRepo;

impl SuspensionRepo {
    /// Issue a new active suspension.
    pub async fn create(
        pool: &PgPool,
        fighter_id: DbId,
        issued_by: DbId,
        input: &CreateSuspension,
    ) -> Result<Suspension, sqlx::Error> {
        let query = format!(
            "INSERT INTO suspensions
                (fighter_id, commission_id, reason, status, start_date, end_date, issued_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Suspension>(&query)
            .bind(fighter_id)
            .bind(input.commission_id)
            .bind(input.reason.trim())
            .bind(STATUS_ACTIVE)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(issued_by)
            .fetch_one(pool)
            .await
    }

    /// Find a suspension by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Suspension>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM suspensions WHERE id = $1");
        sqlx::query_as::<_, Suspension>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all suspensions for a fighter, most recent first.
    pub async fn list_for_fighter(
        pool: &PgPool,
        fighter_id: DbId,
    ) -> Result<Vec<Suspension>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM suspensions
             WHERE fighter_id = $1
             ORDER BY start_date DESC, id DESC"
        );
        sqlx::query_as::<_, Suspension>(&query)
            .bind(fighter_id)
            .fetch_all(pool)
            .await
    }

    /// List the suspensions in force on `today`, as decided by
    /// [`is_in_force`].
    pub async fn list_active_for_fighter(
        pool: &PgPool,
        fighter_id: DbId,
        today: Date,
    ) -> Result<Vec<Suspension>, sqlx::Error> {
        let suspensions = Self::list_for_fighter(pool, fighter_id).await?;
        Ok(suspensions
            .into_iter()
            .filter(|s| is_in_force(&s.status, s.end_date, today))
            .collect())
    }

    /// Lift an active suspension. Returns `None` if it does not exist or is
    /// not active.
    pub async fn lift(
        pool: &PgPool,
        id: DbId,
        lifted_by: DbId,
    ) -> Result<Option<Suspension>, sqlx::Error> {
        let query = format!(
            "UPDATE suspensions SET
                status = $2,
                lifted_by = $3,
                lifted_at = NOW()
             WHERE id = $1 AND status = $4
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Suspension>(&query)
            .bind(id)
            .bind(STATUS_LIFTED)
            .bind(lifted_by)
            .bind(STATUS_ACTIVE)
            .fetch_optional(pool)
            .await
    }
}
