use axum::routing::get;
use axum::Router;

use crate::handlers::commission;
use crate::state::AppState;

/// Commission routes mounted at `/commissions`.
///
/// ```text
/// GET    /        -> list_commissions
/// POST   /        -> create_commission (admin)
/// GET    /{id}    -> get_commission
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(commission::list_commissions).post(commission::create_commission),
        )
        .route("/{id}", get(commission::get_commission))
}
