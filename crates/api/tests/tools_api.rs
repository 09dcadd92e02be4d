//! HTTP-level integration tests for the catalog endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, seed_tools};
use sqlx::PgPool;

/// The image catalog returns rows sorted ascending by name.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_image_tools_sorted(pool: PgPool) {
    seed_tools(&pool, "image_tools", &["Zeta", "Alpha", "Mid"]).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/tools/image").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .expect("response must be an array")
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
}

/// The video catalog is served from its own table.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_video_tools_independent(pool: PgPool) {
    seed_tools(&pool, "image_tools", &["Midjourney"]).await;
    seed_tools(&pool, "video_tools", &["Runway", "Pika"]).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/tools/video").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Pika", "Runway"]);
}

/// An empty catalog is a 200 with an empty array, not an error.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_empty_catalog_ok(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/tools/image").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!([]));
}

/// A storage failure surfaces as 500 with the category-specific message.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_storage_failure_is_500(pool: PgPool) {
    // Dropping the table simulates the storage layer failing mid-flight.
    sqlx::query("DROP TABLE image_tools")
        .execute(&pool)
        .await
        .expect("drop should succeed");
    let app = common::build_test_app(pool);

    let response = get(app, "/api/tools/image").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Failed to fetch image tools");
}
