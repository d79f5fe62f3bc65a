//! Handlers for fighter documents and their review.
//!
//! Uploads land as `pending`. Approval makes a document the latest of its
//! type for the fighter; only approved latest documents count toward
//! eligibility.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use combatid_core::document::{
    validate_document_dates, validate_document_type, validate_rejection_note,
    validate_reviewable, MAX_REVIEW_NOTE_LENGTH,
};
use combatid_core::error::CoreError;
use combatid_core::types::DbId;
use combatid_db::models::document::{CreateDocument, ReviewDocument};
use combatid_db::repositories::DocumentRepo;

use super::ensure_fighter_exists;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireOfficial;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/fighters/{fighter_id}/documents
pub async fn list_documents(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(fighter_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_fighter_exists(&state.pool, fighter_id).await?;
    let documents = DocumentRepo::list_for_fighter(&state.pool, fighter_id).await?;
    Ok(Json(DataResponse { data: documents }))
}

/// POST /api/v1/fighters/{fighter_id}/documents
///
/// Register an uploaded document. It starts as `pending` with the next
/// version number for its type.
pub async fn create_document(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(fighter_id): Path<DbId>,
    Json(input): Json<CreateDocument>,
) -> AppResult<impl IntoResponse> {
    validate_document_type(&input.document_type).map_err(AppError::validation)?;
    validate_document_dates(input.issue_date, input.expiration_date)
        .map_err(AppError::validation)?;
    ensure_fighter_exists(&state.pool, fighter_id).await?;

    let document = DocumentRepo::create(&state.pool, fighter_id, &input).await?;

    tracing::info!(
        document_id = document.id,
        fighter_id,
        document_type = %document.document_type,
        version = document.version,
        user_id = auth.user_id,
        "Document registered",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: document })))
}

/// GET /api/v1/documents/{id}
pub async fn get_document(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let document = DocumentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Document", id))?;
    Ok(Json(DataResponse { data: document }))
}

/// DELETE /api/v1/documents/{id}
///
/// Soft delete. The document stops counting toward eligibility immediately.
pub async fn delete_document(
    RequireOfficial(official): RequireOfficial,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !DocumentRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::not_found("Document", id));
    }

    tracing::info!(document_id = id, user_id = official.user_id, "Document deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/documents/{id}/approve
///
/// The body is optional; `{"note": ...}` attaches a review note.
pub async fn approve_document(
    RequireOfficial(official): RequireOfficial,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    input: Option<Json<ReviewDocument>>,
) -> AppResult<impl IntoResponse> {
    let input = input.map(|Json(body)| body).unwrap_or_default();
    let note = input.note.as_deref().map(str::trim).filter(|n| !n.is_empty());
    if note.is_some_and(|n| n.len() > MAX_REVIEW_NOTE_LENGTH) {
        return Err(AppError::validation(format!(
            "Review note exceeds maximum length of {MAX_REVIEW_NOTE_LENGTH}"
        )));
    }

    let existing = DocumentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Document", id))?;
    validate_reviewable(&existing.status).map_err(AppError::validation)?;

    let document = DocumentRepo::approve(&state.pool, id, official.user_id, note)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Document was reviewed concurrently".into(),
            ))
        })?;

    tracing::info!(
        document_id = id,
        fighter_id = document.fighter_id,
        user_id = official.user_id,
        "Document approved",
    );

    Ok(Json(DataResponse { data: document }))
}

/// POST /api/v1/documents/{id}/reject
///
/// A non-blank `note` is required, so a missing body fails validation.
pub async fn reject_document(
    RequireOfficial(official): RequireOfficial,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    input: Option<Json<ReviewDocument>>,
) -> AppResult<impl IntoResponse> {
    let input = input.map(|Json(body)| body).unwrap_or_default();
    validate_rejection_note(input.note.as_deref()).map_err(AppError::validation)?;
    let note = input.note.as_deref().map(str::trim).unwrap_or_default();

    let existing = DocumentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Document", id))?;
    validate_reviewable(&existing.status).map_err(AppError::validation)?;

    let document = DocumentRepo::reject(&state.pool, id, official.user_id, note)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Document was reviewed concurrently".into(),
            ))
        })?;

    tracing::info!(
        document_id = id,
        fighter_id = document.fighter_id,
        user_id = official.user_id,
        "Document rejected",
    );

    Ok(Json(DataResponse { data: document }))
}
