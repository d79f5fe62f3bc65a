//! Route tree definitions.

pub mod commission;
pub mod document;
pub mod fighter;
pub mod health;
pub mod ruleset;
pub mod suspension;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /commissions                                     list, create (admin)
/// /commissions/{id}                                get
///
/// /fighters                                        list, create
/// /fighters/{id}                                   get, update
/// /fighters/{fighter_id}/documents                 list, register
/// /fighters/{fighter_id}/suspensions               list, issue (official)
/// /fighters/{fighter_id}/eligibility               latest check
/// /fighters/{fighter_id}/eligibility/check         evaluate (POST)
/// /fighters/{fighter_id}/eligibility/override      override latest (official)
/// /fighters/{fighter_id}/eligibility/history       paginated history
///
/// /documents/{id}                                  get, soft delete (official)
/// /documents/{id}/approve                          approve (official)
/// /documents/{id}/reject                           reject (official)
///
/// /suspensions/{id}/lift                           lift (official)
///
/// /rulesets                                        list, create (official)
/// /rulesets/active                                 active version for a pair
/// /rulesets/{id}                                   get with requirements
/// /rulesets/{id}/requirements                      publish new version (PUT, official)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/commissions", commission::router())
        .nest("/fighters", fighter::router())
        .nest("/documents", document::router())
        .nest("/suspensions", suspension::router())
        .nest("/rulesets", ruleset::router())
}
