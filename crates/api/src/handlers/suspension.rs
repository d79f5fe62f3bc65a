//! Handlers for fighter suspensions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use combatid_core::error::CoreError;
use combatid_core::suspension::{validate_liftable, validate_suspension};
use combatid_core::types::DbId;
use combatid_db::models::suspension::CreateSuspension;
use combatid_db::repositories::{CommissionRepo, SuspensionRepo};

use super::ensure_fighter_exists;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireOfficial;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/fighters/{fighter_id}/suspensions
///
/// All suspensions for the fighter, active and lifted, latest start first.
pub async fn list_suspensions(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(fighter_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_fighter_exists(&state.pool, fighter_id).await?;
    let suspensions = SuspensionRepo::list_for_fighter(&state.pool, fighter_id).await?;
    Ok(Json(DataResponse { data: suspensions }))
}

/// POST /api/v1/fighters/{fighter_id}/suspensions
pub async fn create_suspension(
    RequireOfficial(official): RequireOfficial,
    State(state): State<AppState>,
    Path(fighter_id): Path<DbId>,
    Json(input): Json<CreateSuspension>,
) -> AppResult<impl IntoResponse> {
    validate_suspension(&input.reason, input.start_date, input.end_date)
        .map_err(AppError::validation)?;
    ensure_fighter_exists(&state.pool, fighter_id).await?;
    if let Some(commission_id) = input.commission_id {
        CommissionRepo::find_by_id(&state.pool, commission_id)
            .await?
            .ok_or(AppError::not_found("Commission", commission_id))?;
    }

    let suspension = SuspensionRepo::create(
        &state.pool,
        fighter_id,
        official.user_id,
        &CreateSuspension {
            reason: input.reason.trim().to_string(),
            ..input
        },
    )
    .await?;

    tracing::info!(
        suspension_id = suspension.id,
        fighter_id,
        user_id = official.user_id,
        "Suspension issued",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: suspension })))
}

/// POST /api/v1/suspensions/{id}/lift
pub async fn lift_suspension(
    RequireOfficial(official): RequireOfficial,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = SuspensionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Suspension", id))?;
    validate_liftable(&existing.status).map_err(AppError::validation)?;

    let suspension = SuspensionRepo::lift(&state.pool, id, official.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Suspension was lifted concurrently".into(),
            ))
        })?;

    tracing::info!(
        suspension_id = id,
        fighter_id = suspension.fighter_id,
        user_id = official.user_id,
        "Suspension lifted",
    );

    Ok(Json(DataResponse { data: suspension }))
}
