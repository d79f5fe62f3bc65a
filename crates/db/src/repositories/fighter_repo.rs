//! Repository for the `fighters` table.

use sqlx::PgPool;
use combatid_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use combatid_core::types::DbId;

use crate::models::fighter::{CreateFighter, Fighter, FighterQuery, UpdateFighter};

/// Column list for fighter queries.
const COLUMNS: &str = "id, first_name, last_name, date_of_birth, nationality, \
                       eligibility_status, created_at, updated_at";

/// Provides CRUD operations for fighters.
pub struct FighterRepo;

impl FighterRepo {
    /// Insert a new fighter, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFighter) -> Result<Fighter, sqlx::Error> {
        let query = format!(
            "INSERT INTO fighters (first_name, last_name, date_of_birth, nationality)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Fighter>(&query)
            .bind(input.first_name.trim())
            .bind(input.last_name.trim())
            .bind(input.date_of_birth)
            .bind(&input.nationality)
            .fetch_one(pool)
            .await
    }

    /// Find a fighter by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Fighter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fighters WHERE id = $1");
        sqlx::query_as::<_, Fighter>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a fighter with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM fighters WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List fighters ordered by last name, then first name, with optional
    /// name search and pagination.
    pub async fn list(pool: &PgPool, params: &FighterQuery) -> Result<Vec<Fighter>, sqlx::Error> {
        let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
        let offset = clamp_offset(params.offset);
        let pattern = params
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{s}%"));

        let query = format!(
            "SELECT {COLUMNS} FROM fighters
             WHERE $1::TEXT IS NULL OR first_name ILIKE $1 OR last_name ILIKE $1
             ORDER BY last_name ASC, first_name ASC, id ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Fighter>(&query)
            .bind(pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a fighter's profile fields. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFighter,
    ) -> Result<Option<Fighter>, sqlx::Error> {
        let query = format!(
            "UPDATE fighters SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                date_of_birth = COALESCE($4, date_of_birth),
                nationality = COALESCE($5, nationality)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Fighter>(&query)
            .bind(id)
            .bind(input.first_name.as_deref().map(str::trim))
            .bind(input.last_name.as_deref().map(str::trim))
            .bind(input.date_of_birth)
            .bind(&input.nationality)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the denormalized eligibility status. Returns `true` if the
    /// fighter exists.
    pub async fn update_eligibility_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE fighters SET eligibility_status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
