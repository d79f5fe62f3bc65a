//! Role-based access control extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does
//! not meet the minimum requirement with 403.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use combatid_core::error::CoreError;
use combatid_core::roles::{is_commission_role, ROLE_ADMIN};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role.
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}

/// Requires a commission role: `official` or `admin`.
///
/// ```ignore
/// async fn lift(RequireOfficial(official): RequireOfficial) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireOfficial(pub AuthUser);

impl FromRequestParts<AppState> for RequireOfficial {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !is_commission_role(&user.role) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Official or Admin role required".into(),
            )));
        }
        Ok(RequireOfficial(user))
    }
}
