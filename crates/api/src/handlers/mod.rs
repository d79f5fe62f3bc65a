//! HTTP handlers, one module per resource.

pub mod commission;
pub mod document;
pub mod eligibility;
pub mod fighter;
pub mod ruleset;
pub mod suspension;

use combatid_core::types::DbId;
use combatid_db::repositories::FighterRepo;

use crate::error::{AppError, AppResult};

/// Fail with 404 unless the fighter exists.
pub(crate) async fn ensure_fighter_exists(
    pool: &combatid_db::DbPool,
    fighter_id: DbId,
) -> AppResult<()> {
    if FighterRepo::exists(pool, fighter_id).await? {
        Ok(())
    } else {
        Err(AppError::not_found("Fighter", fighter_id))
    }
}
