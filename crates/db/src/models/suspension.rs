//! Fighter suspension model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use combatid_core::types::{Date, DbId, Timestamp};

/// A row from the `suspensions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Suspension {
    pub id: DbId,
    pub fighter_id: DbId,
    pub commission_id: Option<DbId>,
    pub reason: String,
    pub status: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub issued_by: Option<DbId>,
    pub lifted_by: Option<DbId>,
    pub lifted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for issuing a suspension.
#[derive(Debug, Deserialize)]
pub struct CreateSuspension {
    pub commission_id: Option<DbId>,
    pub reason: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
}
