//! Fighter document model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use combatid_core::eligibility::ApprovedDocument;
use combatid_core::types::{Date, DbId, Timestamp};

/// A row from the `documents` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Document {
    pub id: DbId,
    pub fighter_id: DbId,
    pub document_type: String,
    pub status: String,
    pub version: i32,
    pub is_latest: bool,
    pub issue_date: Option<Date>,
    pub expiration_date: Option<Date>,
    pub storage_key: Option<String>,
    pub reviewed_by: Option<DbId>,
    pub reviewed_at: Option<Timestamp>,
    pub review_note: Option<String>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Document {
    /// Project this row into the evaluator's input shape.
    pub fn to_approved(&self) -> ApprovedDocument {
        ApprovedDocument {
            id: self.id,
            document_type: self.document_type.clone(),
            issue_date: self.issue_date,
            expiration_date: self.expiration_date,
            created_at: self.created_at,
        }
    }
}

/// DTO for registering a new document for a fighter.
#[derive(Debug, Deserialize)]
pub struct CreateDocument {
    pub document_type: String,
    pub issue_date: Option<Date>,
    pub expiration_date: Option<Date>,
    /// Object-store key of the uploaded file.
    pub storage_key: Option<String>,
}

/// Request body for the approve/reject endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewDocument {
    pub note: Option<String>,
}
