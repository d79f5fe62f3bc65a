//! Handlers for fighter profiles.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use combatid_core::fighter::{validate_date_of_birth, validate_name};
use combatid_core::types::DbId;
use combatid_db::models::fighter::{CreateFighter, FighterQuery, UpdateFighter};
use combatid_db::repositories::FighterRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/fighters
///
/// Paginated list with an optional `search` on first or last name.
pub async fn list_fighters(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<FighterQuery>,
) -> AppResult<impl IntoResponse> {
    let fighters = FighterRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: fighters }))
}

/// POST /api/v1/fighters
pub async fn create_fighter(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateFighter>,
) -> AppResult<impl IntoResponse> {
    validate_name("first_name", &input.first_name).map_err(AppError::validation)?;
    validate_name("last_name", &input.last_name).map_err(AppError::validation)?;
    validate_date_of_birth(input.date_of_birth, Utc::now().date_naive())
        .map_err(AppError::validation)?;

    let fighter = FighterRepo::create(
        &state.pool,
        &CreateFighter {
            first_name: input.first_name.trim().to_string(),
            last_name: input.last_name.trim().to_string(),
            ..input
        },
    )
    .await?;

    tracing::info!(fighter_id = fighter.id, user_id = auth.user_id, "Fighter created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: fighter })))
}

/// GET /api/v1/fighters/{id}
pub async fn get_fighter(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let fighter = FighterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Fighter", id))?;
    Ok(Json(DataResponse { data: fighter }))
}

/// PUT /api/v1/fighters/{id}
///
/// Partial update; absent fields keep their current values. The eligibility
/// status is not writable here.
pub async fn update_fighter(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFighter>,
) -> AppResult<impl IntoResponse> {
    if let Some(first_name) = &input.first_name {
        validate_name("first_name", first_name).map_err(AppError::validation)?;
    }
    if let Some(last_name) = &input.last_name {
        validate_name("last_name", last_name).map_err(AppError::validation)?;
    }
    if let Some(dob) = input.date_of_birth {
        validate_date_of_birth(dob, Utc::now().date_naive()).map_err(AppError::validation)?;
    }

    let fighter = FighterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Fighter", id))?;

    tracing::info!(fighter_id = id, user_id = auth.user_id, "Fighter updated");

    Ok(Json(DataResponse { data: fighter }))
}
