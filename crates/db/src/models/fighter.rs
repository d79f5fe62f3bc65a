//! Fighter profile model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use combatid_core::types::{Date, DbId, Timestamp};

/// A row from the `fighters` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Fighter {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Date,
    pub nationality: Option<String>,
    /// Status of the most recent eligibility check, if any.
    pub eligibility_status: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a fighter.
#[derive(Debug, Deserialize)]
pub struct CreateFighter {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Date,
    pub nationality: Option<String>,
}

/// DTO for updating a fighter. All fields optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateFighter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<Date>,
    pub nationality: Option<String>,
}

/// Filter parameters for listing fighters.
#[derive(Debug, Default, Deserialize)]
pub struct FighterQuery {
    /// Case-insensitive substring match on first or last name.
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
