//! Athletic commission model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use combatid_core::types::{DbId, Timestamp};

/// A row from the `commissions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Commission {
    pub id: DbId,
    pub name: String,
    pub jurisdiction: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a commission.
#[derive(Debug, Deserialize)]
pub struct CreateCommission {
    pub name: String,
    pub jurisdiction: Option<String>,
}
