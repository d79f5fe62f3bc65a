//! Fighter routes, including the fighter-scoped document, suspension and
//! eligibility sub-resources.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{document, eligibility, fighter, suspension};
use crate::state::AppState;

/// Fighter routes mounted at `/fighters`.
///
/// ```text
/// GET    /                                    -> list_fighters
/// POST   /                                    -> create_fighter
/// GET    /{id}                                -> get_fighter
/// PUT    /{id}                                -> update_fighter
/// GET    /{id}/documents                      -> list_documents
/// POST   /{id}/documents                      -> create_document
/// GET    /{id}/suspensions                    -> list_suspensions
/// POST   /{id}/suspensions                    -> create_suspension
/// GET    /{id}/eligibility                    -> get_latest_eligibility
/// POST   /{id}/eligibility/check              -> check_eligibility
/// POST   /{id}/eligibility/override           -> override_eligibility
/// GET    /{id}/eligibility/history            -> get_eligibility_history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fighter::list_fighters).post(fighter::create_fighter))
        .route("/{id}", get(fighter::get_fighter).put(fighter::update_fighter))
        .route(
            "/{id}/documents",
            get(document::list_documents).post(document::create_document),
        )
        .route(
            "/{id}/suspensions",
            get(suspension::list_suspensions).post(suspension::create_suspension),
        )
        .route("/{id}/eligibility", get(eligibility::get_latest_eligibility))
        .route("/{id}/eligibility/check", post(eligibility::check_eligibility))
        .route(
            "/{id}/eligibility/override",
            post(eligibility::override_eligibility),
        )
        .route(
            "/{id}/eligibility/history",
            get(eligibility::get_eligibility_history),
        )
}
