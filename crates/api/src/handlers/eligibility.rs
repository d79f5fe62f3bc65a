//! Eligibility evaluation, override, and history handlers.
//!
//! A check loads the fighter's current approved documents and active
//! suspensions, evaluates them against one ruleset version with
//! [`combatid_core::eligibility::evaluate`], stores the result as a new
//! check row, and copies the status onto the fighter.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use combatid_core::eligibility::{
    evaluate, validate_override_reason, EligibilityInput, EligibilityStatus,
};
use combatid_core::ruleset::validate_discipline;
use combatid_core::types::DbId;
use combatid_db::models::document::Document;
use combatid_db::models::eligibility::{
    CheckEligibilityRequest, CreateEligibilityCheck, EligibilityHistoryPage, OverrideEligibility,
    OverrideEligibilityRequest,
};
use combatid_db::models::ruleset::{Requirement, Ruleset};
use combatid_db::repositories::{
    DocumentRepo, EligibilityCheckRepo, FighterRepo, RulesetRepo, SuspensionRepo,
};
use combatid_db::DbPool;

use super::ensure_fighter_exists;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireOfficial;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Resolve the ruleset a check runs against: an explicit id, or the active
/// version for a (commission, discipline) pair.
async fn resolve_ruleset(pool: &DbPool, input: &CheckEligibilityRequest) -> AppResult<Ruleset> {
    match (input.ruleset_id, input.commission_id, input.discipline.as_deref()) {
        (Some(ruleset_id), _, _) => RulesetRepo::find_by_id(pool, ruleset_id)
            .await?
            .ok_or(AppError::not_found("Ruleset", ruleset_id)),
        (None, Some(commission_id), Some(discipline)) => {
            validate_discipline(discipline).map_err(AppError::validation)?;
            RulesetRepo::find_active(pool, commission_id, discipline)
                .await?
                .ok_or(AppError::not_found(
                    "Active ruleset for commission",
                    commission_id,
                ))
        }
        _ => Err(AppError::BadRequest(
            "Provide either ruleset_id or both commission_id and discipline".into(),
        )),
    }
}

/// POST /api/v1/fighters/{fighter_id}/eligibility/check
///
/// Evaluate the fighter now and record the result. Every call inserts a
/// new check; earlier checks are kept as history.
pub async fn check_eligibility(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(fighter_id): Path<DbId>,
    Json(input): Json<CheckEligibilityRequest>,
) -> AppResult<impl IntoResponse> {
    let ruleset = resolve_ruleset(&state.pool, &input).await?;
    let today = Utc::now().date_naive();

    let (fighter, documents, suspensions, requirements) = tokio::try_join!(
        FighterRepo::find_by_id(&state.pool, fighter_id),
        DocumentRepo::list_current_approved(&state.pool, fighter_id),
        SuspensionRepo::list_active_for_fighter(&state.pool, fighter_id, today),
        RulesetRepo::list_requirements(&state.pool, ruleset.id),
    )?;
    let fighter = fighter.ok_or(AppError::not_found("Fighter", fighter_id))?;

    let rules: Vec<_> = requirements.iter().map(Requirement::to_rule).collect();
    let approved: Vec<_> = documents.iter().map(Document::to_approved).collect();

    let outcome = evaluate(
        EligibilityInput {
            date_of_birth: fighter.date_of_birth,
            has_active_suspension: !suspensions.is_empty(),
            requirements: &rules,
            documents: &approved,
        },
        today,
    );

    if !outcome.malformed_conditions.is_empty() {
        tracing::warn!(
            ruleset_id = ruleset.id,
            requirements = ?outcome.malformed_conditions,
            "Unparseable requirement conditions treated as satisfied",
        );
    }

    let status = outcome.status.as_str();
    let check = EligibilityCheckRepo::create(
        &state.pool,
        &CreateEligibilityCheck {
            fighter_id,
            ruleset_id: ruleset.id,
            status: status.to_string(),
            overall_score: outcome.overall_score,
            valid_until: outcome.valid_until,
            requirements: outcome.requirements,
        },
    )
    .await?;

    FighterRepo::update_eligibility_status(&state.pool, fighter_id, status).await?;

    tracing::info!(
        check_id = check.id,
        fighter_id,
        ruleset_id = ruleset.id,
        status,
        score = check.overall_score,
        skipped = outcome.skipped.len(),
        user_id = auth.user_id,
        "Eligibility evaluated",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: check })))
}

/// POST /api/v1/fighters/{fighter_id}/eligibility/override
///
/// Replace the status of the fighter's latest check. Requirement results
/// and score are left as evaluated. Official or admin only.
pub async fn override_eligibility(
    RequireOfficial(official): RequireOfficial,
    State(state): State<AppState>,
    Path(fighter_id): Path<DbId>,
    Json(input): Json<OverrideEligibilityRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_fighter_exists(&state.pool, fighter_id).await?;

    let status = EligibilityStatus::from_str_value(&input.status).map_err(AppError::validation)?;
    validate_override_reason(&input.reason).map_err(AppError::validation)?;

    let latest = EligibilityCheckRepo::find_latest_for_fighter(&state.pool, fighter_id)
        .await?
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "Fighter {fighter_id} has no eligibility check to override"
            ))
        })?;

    let check = EligibilityCheckRepo::apply_override(
        &state.pool,
        latest.id,
        &OverrideEligibility {
            status: status.as_str().to_string(),
            overridden_by: official.user_id,
            reason: input.reason,
        },
    )
    .await?
    .ok_or(AppError::not_found("EligibilityCheck", latest.id))?;

    FighterRepo::update_eligibility_status(&state.pool, fighter_id, status.as_str()).await?;

    tracing::info!(
        check_id = check.id,
        fighter_id,
        previous_status = %latest.status,
        status = status.as_str(),
        user_id = official.user_id,
        "Eligibility overridden",
    );

    Ok(Json(DataResponse { data: check }))
}

/// GET /api/v1/fighters/{fighter_id}/eligibility/history
///
/// One page of checks for the fighter, most recent first, with the total
/// number of checks on record.
pub async fn get_eligibility_history(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(fighter_id): Path<DbId>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    ensure_fighter_exists(&state.pool, fighter_id).await?;
    let (items, total) = tokio::try_join!(
        EligibilityCheckRepo::list_for_fighter(
            &state.pool,
            fighter_id,
            params.limit,
            params.offset,
        ),
        EligibilityCheckRepo::count_for_fighter(&state.pool, fighter_id),
    )?;
    Ok(Json(DataResponse {
        data: EligibilityHistoryPage { items, total },
    }))
}

/// GET /api/v1/fighters/{fighter_id}/eligibility
///
/// The latest check, or `null` if the fighter has never been evaluated.
pub async fn get_latest_eligibility(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(fighter_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_fighter_exists(&state.pool, fighter_id).await?;
    let latest = EligibilityCheckRepo::find_latest_for_fighter(&state.pool, fighter_id).await?;
    Ok(Json(DataResponse { data: latest }))
}
