//! Repository for the `commissions` table.

use sqlx::PgPool;
use combatid_core::types::DbId;

use crate::models::commission::{Commission, CreateCommission};

/// Column list for commission queries.
const COLUMNS: &str = "id, name, jurisdiction, created_at, updated_at";

/// Provides CRUD operations for commissions.
pub struct CommissionRepo;

impl CommissionRepo {
    /// Insert a new commission, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCommission) -> Result<Commission, sqlx::Error> {
        let query = format!(
            "INSERT INTO commissions (name, jurisdiction)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Commission>(&query)
            .bind(input.name.trim())
            .bind(&input.jurisdiction)
            .fetch_one(pool)
            .await
    }

    /// Find a commission by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Commission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM commissions WHERE id = $1");
        sqlx::query_as::<_, Commission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all commissions ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Commission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM commissions ORDER BY name ASC");
        sqlx::query_as::<_, Commission>(&query).fetch_all(pool).await
    }
}
