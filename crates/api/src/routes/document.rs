use axum::routing::{get, post};
use axum::Router;

use crate::handlers::document;
use crate::state::AppState;

/// Document routes mounted at `/documents`.
///
/// ```text
/// GET    /{id}            -> get_document
/// DELETE /{id}            -> delete_document (official)
/// POST   /{id}/approve    -> approve_document (official)
/// POST   /{id}/reject     -> reject_document (official)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(document::get_document).delete(document::delete_document),
        )
        .route("/{id}/approve", post(document::approve_document))
        .route("/{id}/reject", post(document::reject_document))
}
