//! Repository for the `rulesets` and `requirements` tables.
//!
//! Requirement changes never edit rows in place: [`RulesetRepo::create_version`]
//! deactivates the current version and inserts a new ruleset with its own
//! requirement rows, all in one transaction.

use sqlx::{PgConnection, PgPool};
use combatid_core::types::DbId;

use crate::models::ruleset::{
    CreateRequirement, CreateRuleset, Requirement, Ruleset, RulesetQuery,
    RulesetWithRequirements,
};

// ---------------------------------------------------------------------------
// Column lists
// ---------------------------------------------------------------------------

/// Column list for `rulesets` queries.
const COLUMNS: &str = "id, commission_id, discipline, name, version, is_active, created_at, updated_at";

/// Column list for `requirements` queries.
const REQUIREMENT_COLUMNS: &str = "id, ruleset_id, name, document_type, is_required, \
                                   expiration_days, condition, sort_order, created_at, updated_at";

// ---------------------------------------------------------------------------
// RulesetRepo
// ---------------------------------------------------------------------------

/// Provides versioned create and lookup operations for rulesets.
pub struct RulesetRepo;

impl RulesetRepo {
    /// Create version 1 of a ruleset together with its requirements.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRuleset,
    ) -> Result<RulesetWithRequirements, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO rulesets (commission_id, discipline, name, version, is_active)
             VALUES ($1, $2, $3, 1, TRUE)
             RETURNING {COLUMNS}"
        );
        let ruleset = sqlx::query_as::<_, Ruleset>(&query)
            .bind(input.commission_id)
            .bind(&input.discipline)
            .bind(input.name.trim())
            .fetch_one(&mut *tx)
            .await?;

        let requirements = insert_requirements(&mut tx, ruleset.id, &input.requirements).await?;

        tx.commit().await?;
        Ok(RulesetWithRequirements {
            ruleset,
            requirements,
        })
    }

    /// Create the next version for `base`'s (commission, discipline) pair.
    ///
    /// Deactivates whichever version is currently active, then inserts the
    /// new version as active with the given requirements.
    pub async fn create_version(
        pool: &PgPool,
        base: &Ruleset,
        name: &str,
        requirements: &[CreateRequirement],
    ) -> Result<RulesetWithRequirements, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let deactivated = sqlx::query(
            "UPDATE rulesets SET is_active = FALSE
             WHERE commission_id = $1 AND discipline = $2 AND is_active",
        )
        .bind(base.commission_id)
        .bind(&base.discipline)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let query = format!(
            "INSERT INTO rulesets (commission_id, discipline, name, version, is_active)
             SELECT $1, $2, $3, COALESCE(MAX(version), 0) + 1, TRUE
             FROM rulesets
             WHERE commission_id = $1 AND discipline = $2
             RETURNING {COLUMNS}"
        );
        let ruleset = sqlx::query_as::<_, Ruleset>(&query)
            .bind(base.commission_id)
            .bind(&base.discipline)
            .bind(name.trim())
            .fetch_one(&mut *tx)
            .await?;

        let requirements = insert_requirements(&mut tx, ruleset.id, requirements).await?;

        tx.commit().await?;
        tracing::debug!(
            commission_id = ruleset.commission_id,
            discipline = %ruleset.discipline,
            version = ruleset.version,
            deactivated,
            "Ruleset version created"
        );
        Ok(RulesetWithRequirements {
            ruleset,
            requirements,
        })
    }

    /// Find a ruleset by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Ruleset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rulesets WHERE id = $1");
        sqlx::query_as::<_, Ruleset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the active ruleset for a (commission, discipline) pair.
    pub async fn find_active(
        pool: &PgPool,
        commission_id: DbId,
        discipline: &str,
    ) -> Result<Option<Ruleset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rulesets
             WHERE commission_id = $1 AND discipline = $2 AND is_active"
        );
        sqlx::query_as::<_, Ruleset>(&query)
            .bind(commission_id)
            .bind(discipline)
            .fetch_optional(pool)
            .await
    }

    /// List rulesets, optionally filtered by commission and/or discipline,
    /// newest version first.
    pub async fn list(pool: &PgPool, params: &RulesetQuery) -> Result<Vec<Ruleset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rulesets
             WHERE ($1::BIGINT IS NULL OR commission_id = $1)
               AND ($2::TEXT IS NULL OR discipline = $2)
             ORDER BY commission_id ASC, discipline ASC, version DESC"
        );
        sqlx::query_as::<_, Ruleset>(&query)
            .bind(params.commission_id)
            .bind(&params.discipline)
            .fetch_all(pool)
            .await
    }

    /// List a ruleset's requirements in evaluation order.
    pub async fn list_requirements(
        pool: &PgPool,
        ruleset_id: DbId,
    ) -> Result<Vec<Requirement>, sqlx::Error> {
        let query = format!(
            "SELECT {REQUIREMENT_COLUMNS} FROM requirements
             WHERE ruleset_id = $1
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, Requirement>(&query)
            .bind(ruleset_id)
            .fetch_all(pool)
            .await
    }

    /// Find a ruleset and its ordered requirements.
    pub async fn find_with_requirements(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RulesetWithRequirements>, sqlx::Error> {
        let Some(ruleset) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let requirements = Self::list_requirements(pool, id).await?;
        Ok(Some(RulesetWithRequirements {
            ruleset,
            requirements,
        }))
    }
}

/// Insert requirement rows for a freshly created ruleset version.
///
/// `sort_order` defaults to the requirement's position in `requirements`.
async fn insert_requirements(
    conn: &mut PgConnection,
    ruleset_id: DbId,
    requirements: &[CreateRequirement],
) -> Result<Vec<Requirement>, sqlx::Error> {
    let query = format!(
        "INSERT INTO requirements
            (ruleset_id, name, document_type, is_required, expiration_days, condition, sort_order)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING {REQUIREMENT_COLUMNS}"
    );

    let mut rows = Vec::with_capacity(requirements.len());
    for (index, req) in requirements.iter().enumerate() {
        let row = sqlx::query_as::<_, Requirement>(&query)
            .bind(ruleset_id)
            .bind(req.name.trim())
            .bind(&req.document_type)
            .bind(req.is_required)
            .bind(req.expiration_days)
            .bind(req.condition_text())
            .bind(req.sort_order.unwrap_or(index as i32))
            .fetch_one(&mut *conn)
            .await?;
        rows.push(row);
    }

    rows.sort_by_key(|r| (r.sort_order, r.id));
    Ok(rows)
}
