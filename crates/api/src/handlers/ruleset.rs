//! Handlers for commission rulesets.
//!
//! Rulesets are append-only. Changing requirements creates a new version
//! for the same (commission, discipline) pair and deactivates the old one.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use combatid_core::ruleset::{
    validate_discipline, validate_requirement, validate_requirement_count,
    validate_ruleset_name,
};
use combatid_core::types::DbId;
use combatid_db::models::ruleset::{
    CreateRequirement, CreateRuleset, RulesetQuery, UpdateRequirements,
};
use combatid_db::repositories::{CommissionRepo, RulesetRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireOfficial;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /rulesets/active`.
#[derive(Debug, Deserialize)]
pub struct ActiveRulesetParams {
    pub commission_id: DbId,
    pub discipline: String,
}

/// Validate a submitted requirement list entry by entry.
fn validate_requirements(requirements: &[CreateRequirement]) -> AppResult<()> {
    validate_requirement_count(requirements.len()).map_err(AppError::validation)?;
    for (index, req) in requirements.iter().enumerate() {
        let condition = req.condition_text();
        validate_requirement(
            index,
            &req.name,
            &req.document_type,
            req.expiration_days,
            condition.as_deref(),
        )
        .map_err(AppError::validation)?;
    }
    Ok(())
}

/// POST /api/v1/rulesets
///
/// Create version 1 for a (commission, discipline) pair. Fails with 400 if
/// the pair already has an active ruleset; use
/// `PUT /rulesets/{id}/requirements` to publish a new version instead.
pub async fn create_ruleset(
    RequireOfficial(official): RequireOfficial,
    State(state): State<AppState>,
    Json(input): Json<CreateRuleset>,
) -> AppResult<impl IntoResponse> {
    validate_discipline(&input.discipline).map_err(AppError::validation)?;
    validate_ruleset_name(&input.name).map_err(AppError::validation)?;
    validate_requirements(&input.requirements)?;

    CommissionRepo::find_by_id(&state.pool, input.commission_id)
        .await?
        .ok_or(AppError::not_found("Commission", input.commission_id))?;

    if let Some(active) =
        RulesetRepo::find_active(&state.pool, input.commission_id, &input.discipline).await?
    {
        return Err(AppError::BadRequest(format!(
            "An active ruleset (id {}) already exists for this commission and discipline",
            active.id
        )));
    }

    // A concurrent create still trips uq_rulesets_active and maps to 409.
    let created = RulesetRepo::create(
        &state.pool,
        &CreateRuleset {
            name: input.name.trim().to_string(),
            ..input
        },
    )
    .await?;

    tracing::info!(
        ruleset_id = created.ruleset.id,
        commission_id = created.ruleset.commission_id,
        discipline = %created.ruleset.discipline,
        requirement_count = created.requirements.len(),
        user_id = official.user_id,
        "Ruleset created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// PUT /api/v1/rulesets/{id}/requirements
///
/// Publish a new version with the given requirements. The referenced
/// ruleset identifies the (commission, discipline) pair; whichever version is
/// active for that pair is deactivated.
pub async fn update_requirements(
    RequireOfficial(official): RequireOfficial,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRequirements>,
) -> AppResult<impl IntoResponse> {
    let base = RulesetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Ruleset", id))?;

    let name = input
        .name
        .as_deref()
        .map(str::trim)
        .unwrap_or(base.name.as_str());
    validate_ruleset_name(name).map_err(AppError::validation)?;
    validate_requirements(&input.requirements)?;

    let created = RulesetRepo::create_version(&state.pool, &base, name, &input.requirements).await?;

    tracing::info!(
        ruleset_id = created.ruleset.id,
        previous_ruleset_id = id,
        version = created.ruleset.version,
        requirement_count = created.requirements.len(),
        user_id = official.user_id,
        "Ruleset version published",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/rulesets/{id}
pub async fn get_ruleset(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let ruleset = RulesetRepo::find_with_requirements(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Ruleset", id))?;
    Ok(Json(DataResponse { data: ruleset }))
}

/// GET /api/v1/rulesets?commission_id=&discipline=
///
/// Every version matching the filters, newest version first per pair.
pub async fn list_rulesets(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<RulesetQuery>,
) -> AppResult<impl IntoResponse> {
    let rulesets = RulesetRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: rulesets }))
}

/// GET /api/v1/rulesets/active?commission_id=&discipline=
pub async fn get_active_ruleset(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ActiveRulesetParams>,
) -> AppResult<impl IntoResponse> {
    validate_discipline(&params.discipline).map_err(AppError::validation)?;

    let active = RulesetRepo::find_active(&state.pool, params.commission_id, &params.discipline)
        .await?
        .ok_or(AppError::not_found(
            "Active ruleset for commission",
            params.commission_id,
        ))?;

    let ruleset = RulesetRepo::find_with_requirements(&state.pool, active.id)
        .await?
        .ok_or(AppError::not_found("Ruleset", active.id))?;
    Ok(Json(DataResponse { data: ruleset }))
}
