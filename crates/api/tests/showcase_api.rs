//! HTTP-level integration tests for showcase submission and listing.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, get, post_json, post_json_auth, signup_and_login};
use sqlx::PgPool;

fn submit_body(user_id: i64) -> serde_json::Value {
    serde_json::json!({
        "userId": user_id,
        "promptText": "a lighthouse in a storm, 35mm",
        "rating": 4,
        "imageUrl": null,
        "toolUsed": null,
    })
}

async fn authed_app(pool: PgPool) -> (Router, i64, String) {
    let app = common::build_test_app(pool);
    let (user_id, token) = signup_and_login(app.clone(), "artist@test.com", "hunter22").await;
    (app, user_id, token)
}

/// A valid authenticated submission returns 201 with the created entry.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_submit_success(pool: PgPool) {
    let (app, user_id, token) = authed_app(pool).await;

    let response = post_json_auth(app, "/api/showcase", &token, submit_body(user_id)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["userId"], user_id);
    assert_eq!(json["promptText"], "a lighthouse in a storm, 35mm");
    assert_eq!(json["rating"], 4);
    assert_eq!(json["imageUrl"], serde_json::Value::Null);
    assert_eq!(json["toolUsed"], serde_json::Value::Null);
}

/// Submitting without a token is 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_submit_requires_auth(pool: PgPool) {
    let (app, user_id, _token) = authed_app(pool).await;

    let response = post_json(app, "/api/showcase", submit_body(user_id)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A body userId different from the token subject is 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_submit_user_mismatch(pool: PgPool) {
    let (app, user_id, token) = authed_app(pool).await;

    let response = post_json_auth(app, "/api/showcase", &token, submit_body(user_id + 1)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Empty prompt text and out-of-range ratings are 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_submit_validation(pool: PgPool) {
    let (app, user_id, token) = authed_app(pool).await;

    let mut body = submit_body(user_id);
    body["promptText"] = serde_json::json!("   ");
    let response = post_json_auth(app.clone(), "/api/showcase", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut body = submit_body(user_id);
    body["rating"] = serde_json::json!(6);
    let response = post_json_auth(app.clone(), "/api/showcase", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut body = submit_body(user_id);
    body["rating"] = serde_json::json!(0);
    let response = post_json_auth(app, "/api/showcase", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Empty-string optional fields are stored and echoed as explicit null.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_blank_optionals_stored_as_null(pool: PgPool) {
    let (app, user_id, token) = authed_app(pool).await;

    let mut body = submit_body(user_id);
    body["imageUrl"] = serde_json::json!("");
    body["toolUsed"] = serde_json::json!("  ");
    let response = post_json_auth(app, "/api/showcase", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["imageUrl"], serde_json::Value::Null);
    assert_eq!(json["toolUsed"], serde_json::Value::Null);
}

/// tool_used is free text: names outside the catalog are accepted.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_tool_used_is_free_text(pool: PgPool) {
    let (app, user_id, token) = authed_app(pool).await;

    let mut body = submit_body(user_id);
    body["toolUsed"] = serde_json::json!("Some Unlisted Tool");
    let response = post_json_auth(app, "/api/showcase", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["toolUsed"], "Some Unlisted Tool");
}

/// The public listing returns entries newest first.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_listing_newest_first(pool: PgPool) {
    let (app, user_id, token) = authed_app(pool).await;

    for prompt in ["first prompt", "second prompt"] {
        let mut body = submit_body(user_id);
        body["promptText"] = serde_json::json!(prompt);
        let response = post_json_auth(app.clone(), "/api/showcase", &token, body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app, "/api/showcase").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let prompts: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["promptText"].as_str().unwrap())
        .collect();
    assert_eq!(prompts, vec!["second prompt", "first prompt"]);
}
