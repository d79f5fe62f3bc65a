//! HTTP-level integration tests for commissions, fighters, documents, and
//! suspensions.

mod common;

use axum::http::StatusCode;
use chrono::{Days, Utc};
use common::{
    admin_token, body_json, build_test_app, delete_auth, get_auth, official_token, post_auth,
    post_json_auth, put_json_auth, viewer_token,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_fighter(pool: &PgPool) -> i64 {
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/fighters",
        json!({
            "first_name": " Amara ",
            "last_name": "Nwosu",
            "date_of_birth": "1996-07-14",
            "nationality": "NG"
        }),
        &viewer_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn upload(pool: &PgPool, fighter_id: i64, document_type: &str) -> i64 {
    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/fighters/{fighter_id}/documents"),
        json!({ "document_type": document_type, "issue_date": "2026-01-05" }),
        &viewer_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Commissions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_commission_create_requires_admin(pool: PgPool) {
    let body = json!({ "name": "Texas Department of Licensing", "jurisdiction": "TX" });

    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/commissions",
        body.clone(),
        &official_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/commissions",
        body.clone(),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    // Names are unique.
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/commissions",
        body,
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = get_auth(
        build_test_app(pool),
        &format!("/api/v1/commissions/{id}"),
        &viewer_token(),
    )
    .await;
    assert_eq!(body_json(response).await["data"]["jurisdiction"], "TX");
}

// ---------------------------------------------------------------------------
// Fighters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_fighter_create_get_update(pool: PgPool) {
    let fighter_id = create_fighter(&pool).await;

    let response = get_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/fighters/{fighter_id}"),
        &viewer_token(),
    )
    .await;
    let fighter = body_json(response).await["data"].clone();
    assert_eq!(fighter["first_name"], "Amara");
    assert!(fighter["eligibility_status"].is_null());

    let response = put_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/fighters/{fighter_id}"),
        json!({ "nationality": "GB" }),
        &viewer_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let fighter = body_json(response).await["data"].clone();
    assert_eq!(fighter["nationality"], "GB");
    assert_eq!(fighter["last_name"], "Nwosu");

    let response = get_auth(
        build_test_app(pool),
        "/api/v1/fighters?search=nwo",
        &viewer_token(),
    )
    .await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_fighter_validation(pool: PgPool) {
    let tomorrow = Utc::now()
        .date_naive()
        .checked_add_days(Days::new(1))
        .unwrap();

    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/fighters",
        json!({ "first_name": "", "last_name": "Nwosu", "date_of_birth": "1996-07-14" }),
        &viewer_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/fighters",
        json!({ "first_name": "Amara", "last_name": "Nwosu", "date_of_birth": tomorrow.to_string() }),
        &viewer_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get_auth(build_test_app(pool), "/api/v1/fighters/999999", &viewer_token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_document_review_flow(pool: PgPool) {
    let fighter_id = create_fighter(&pool).await;
    let doc_id = upload(&pool, fighter_id, "blood_work").await;

    // Viewers cannot review.
    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/documents/{doc_id}/approve"),
        json!({}),
        &viewer_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/documents/{doc_id}/approve"),
        json!({ "note": "Panel complete" }),
        &official_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let doc = body_json(response).await["data"].clone();
    assert_eq!(doc["status"], "approved");
    assert_eq!(doc["is_latest"], true);

    // Already reviewed.
    let response = post_json_auth(
        build_test_app(pool),
        &format!("/api/v1/documents/{doc_id}/reject"),
        json!({ "note": "Too late" }),
        &official_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_document_reject_requires_note(pool: PgPool) {
    let fighter_id = create_fighter(&pool).await;
    let doc_id = upload(&pool, fighter_id, "eye_exam").await;
    let uri = format!("/api/v1/documents/{doc_id}/reject");

    let response =
        post_json_auth(build_test_app(pool.clone()), &uri, json!({}), &official_token()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        build_test_app(pool),
        &uri,
        json!({ "note": "Scan is illegible" }),
        &official_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "rejected");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_document_review_without_body(pool: PgPool) {
    let fighter_id = create_fighter(&pool).await;
    let approve_id = upload(&pool, fighter_id, "mri_scan").await;
    let reject_id = upload(&pool, fighter_id, "ekg").await;

    let response = post_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/documents/{approve_id}/approve"),
        &official_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let doc = body_json(response).await["data"].clone();
    assert_eq!(doc["status"], "approved");
    assert!(doc["review_note"].is_null());

    let response = post_auth(
        build_test_app(pool),
        &format!("/api/v1/documents/{reject_id}/reject"),
        &official_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_document_validation_and_delete(pool: PgPool) {
    let fighter_id = create_fighter(&pool).await;

    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/fighters/{fighter_id}/documents"),
        json!({ "document_type": "library_card" }),
        &viewer_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/fighters/{fighter_id}/documents"),
        json!({
            "document_type": "passport",
            "issue_date": "2026-03-01",
            "expiration_date": "2026-02-01"
        }),
        &viewer_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let doc_id = upload(&pool, fighter_id, "passport").await;
    let response = delete_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/documents/{doc_id}"),
        &official_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(
        build_test_app(pool),
        &format!("/api/v1/documents/{doc_id}"),
        &viewer_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Suspensions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_suspension_issue_and_lift(pool: PgPool) {
    let fighter_id = create_fighter(&pool).await;
    let uri = format!("/api/v1/fighters/{fighter_id}/suspensions");
    let body = json!({ "reason": "Failed weigh-in medical", "start_date": "2026-02-01" });

    let response =
        post_json_auth(build_test_app(pool.clone()), &uri, body.clone(), &viewer_token()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response =
        post_json_auth(build_test_app(pool.clone()), &uri, body, &official_token()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let suspension = body_json(response).await["data"].clone();
    assert_eq!(suspension["status"], "active");
    let lift_uri = format!("/api/v1/suspensions/{}/lift", suspension["id"]);

    let response =
        post_json_auth(build_test_app(pool.clone()), &lift_uri, json!({}), &official_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "lifted");

    // Lifting twice is a bad request.
    let response =
        post_json_auth(build_test_app(pool.clone()), &lift_uri, json!({}), &official_token()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get_auth(build_test_app(pool), &uri, &viewer_token()).await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_suspension_validation(pool: PgPool) {
    let fighter_id = create_fighter(&pool).await;
    let uri = format!("/api/v1/fighters/{fighter_id}/suspensions");

    let response = post_json_auth(
        build_test_app(pool.clone()),
        &uri,
        json!({ "reason": "Cut", "start_date": "2026-02-01", "end_date": "2026-01-01" }),
        &official_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        build_test_app(pool),
        &uri,
        json!({ "reason": "Cut", "start_date": "2026-02-01", "commission_id": 999_999 }),
        &official_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
