//! Repository for the `documents` table.

use sqlx::PgPool;
use combatid_core::document::{STATUS_APPROVED, STATUS_PENDING, STATUS_REJECTED};
use combatid_core::types::DbId;

use crate::models::document::{CreateDocument, Document};

/// Column list for document queries.
const COLUMNS: &str = "id, fighter_id, document_type, status, version, is_latest, \
                       issue_date, expiration_date, storage_key, reviewed_by, \
                       reviewed_at, review_note, deleted_at, created_at, updated_at";

/// Provides CRUD and review operations for fighter documents.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Register a new pending document.
    ///
    /// The version is one past the highest existing version of the same type
    /// for this fighter. The document does not become `is_latest` until it is
    /// approved.
    pub async fn create(
        pool: &PgPool,
        fighter_id: DbId,
        input: &CreateDocument,
    ) -> Result<Document, sqlx::Error> {
        let query = format!(
            "INSERT INTO documents
                (fighter_id, document_type, status, version, issue_date, expiration_date, storage_key)
             SELECT $1, $2, $3, COALESCE(MAX(version), 0) + 1, $4, $5, $6
             FROM documents
             WHERE fighter_id = $1 AND document_type = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(fighter_id)
            .bind(&input.document_type)
            .bind(STATUS_PENDING)
            .bind(input.issue_date)
            .bind(input.expiration_date)
            .bind(&input.storage_key)
            .fetch_one(pool)
            .await
    }

    /// Find a non-deleted document by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM documents WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a fighter's non-deleted documents, newest version first per type.
    pub async fn list_for_fighter(
        pool: &PgPool,
        fighter_id: DbId,
    ) -> Result<Vec<Document>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM documents
             WHERE fighter_id = $1 AND deleted_at IS NULL
             ORDER BY document_type ASC, version DESC"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(fighter_id)
            .fetch_all(pool)
            .await
    }

    /// List the documents that count toward eligibility: approved,
    /// non-deleted, and the latest of their type.
    pub async fn list_current_approved(
        pool: &PgPool,
        fighter_id: DbId,
    ) -> Result<Vec<Document>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM documents
             WHERE fighter_id = $1
               AND status = $2
               AND is_latest
               AND deleted_at IS NULL
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(fighter_id)
            .bind(STATUS_APPROVED)
            .fetch_all(pool)
            .await
    }

    /// Approve a pending document and make it the latest of its type.
    ///
    /// Runs in one transaction. Every row of the same fighter and type is
    /// locked in id order, the document is checked to still be pending, the
    /// old latest flag is cleared and only then does the approved row take
    /// it. Concurrent approvals for the same fighter and type therefore run
    /// one after the other and the last to commit is latest.
    /// `uq_documents_latest` enforces the same rule in the schema. Returns
    /// `None` if the document does not exist or is no longer pending.
    pub async fn approve(
        pool: &PgPool,
        id: DbId,
        reviewed_by: DbId,
        note: Option<&str>,
    ) -> Result<Option<Document>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let target: Option<(DbId, String)> = sqlx::query_as(
            "SELECT fighter_id, document_type FROM documents
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((fighter_id, document_type)) = target else {
            return Ok(None);
        };

        sqlx::query(
            "SELECT id FROM documents
             WHERE fighter_id = $1 AND document_type = $2
             ORDER BY id
             FOR UPDATE",
        )
        .bind(fighter_id)
        .bind(&document_type)
        .execute(&mut *tx)
        .await?;

        let still_pending: Option<(DbId,)> = sqlx::query_as(
            "SELECT id FROM documents
             WHERE id = $1 AND status = $2 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(STATUS_PENDING)
        .fetch_optional(&mut *tx)
        .await?;

        if still_pending.is_none() {
            return Ok(None);
        }

        sqlx::query(
            "UPDATE documents SET is_latest = FALSE
             WHERE fighter_id = $1 AND document_type = $2 AND id <> $3 AND is_latest",
        )
        .bind(fighter_id)
        .bind(&document_type)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let query = format!(
            "UPDATE documents SET
                status = $2,
                is_latest = TRUE,
                reviewed_by = $3,
                reviewed_at = NOW(),
                review_note = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let approved = sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .bind(STATUS_APPROVED)
            .bind(reviewed_by)
            .bind(note)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(approved))
    }

    /// Reject a pending document. Returns `None` if the document does not
    /// exist or is no longer pending.
    pub async fn reject(
        pool: &PgPool,
        id: DbId,
        reviewed_by: DbId,
        note: &str,
    ) -> Result<Option<Document>, sqlx::Error> {
        let query = format!(
            "UPDATE documents SET
                status = $2,
                reviewed_by = $3,
                reviewed_at = NOW(),
                review_note = $4
             WHERE id = $1 AND status = $5 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .bind(STATUS_REJECTED)
            .bind(reviewed_by)
            .bind(note)
            .bind(STATUS_PENDING)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a document. A deleted document never counts as latest.
    /// Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE documents SET deleted_at = NOW(), is_latest = FALSE
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
