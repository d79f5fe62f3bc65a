use axum::routing::post;
use axum::Router;

use crate::handlers::suspension;
use crate::state::AppState;

/// Suspension routes mounted at `/suspensions`.
///
/// Listing and issuing are fighter-scoped; see the fighter router.
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/lift", post(suspension::lift_suspension))
}
