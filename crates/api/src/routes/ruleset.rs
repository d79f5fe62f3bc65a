use axum::routing::{get, put};
use axum::Router;

use crate::handlers::ruleset;
use crate::state::AppState;

/// Ruleset routes mounted at `/rulesets`.
///
/// ```text
/// GET    /                      -> list_rulesets
/// POST   /                      -> create_ruleset (official)
/// GET    /active                -> get_active_ruleset
/// GET    /{id}                  -> get_ruleset
/// PUT    /{id}/requirements     -> update_requirements (official)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ruleset::list_rulesets).post(ruleset::create_ruleset))
        .route("/active", get(ruleset::get_active_ruleset))
        .route("/{id}", get(ruleset::get_ruleset))
        .route("/{id}/requirements", put(ruleset::update_requirements))
}
