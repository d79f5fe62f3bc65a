//! Handlers for athletic commissions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use combatid_core::types::DbId;
use combatid_db::models::commission::CreateCommission;
use combatid_db::repositories::CommissionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum length of a commission name.
const MAX_NAME_LENGTH: usize = 200;

/// GET /api/v1/commissions
pub async fn list_commissions(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let commissions = CommissionRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: commissions }))
}

/// POST /api/v1/commissions
///
/// Register a commission. Admin only. Names are unique.
pub async fn create_commission(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCommission>,
) -> AppResult<impl IntoResponse> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::validation(
            "Commission name must not be empty".into(),
        ));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(AppError::validation(format!(
            "Commission name exceeds maximum length of {MAX_NAME_LENGTH}"
        )));
    }

    let commission = CommissionRepo::create(
        &state.pool,
        &CreateCommission {
            name: name.to_string(),
            jurisdiction: input.jurisdiction,
        },
    )
    .await?;

    tracing::info!(
        commission_id = commission.id,
        user_id = admin.user_id,
        "Commission created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: commission })))
}

/// GET /api/v1/commissions/{id}
pub async fn get_commission(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let commission = CommissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Commission", id))?;
    Ok(Json(DataResponse { data: commission }))
}
