//! Integration tests for `POST /api/analyze-pet-photo`.
//!
//! The endpoint's contract is "always 200 with a non-empty caption". The
//! test app points the captioning client at an unroutable endpoint, so the
//! vendor-call failure path runs for real.

mod common;

use axum::http::StatusCode;
use axum::http::{header::CONTENT_TYPE, Method, Request};
use axum::body::Body;
use common::{body_json, post_json};
use sqlx::PgPool;
use tower::ServiceExt;

const FALLBACK_CAPTION: &str = "I'm having a great day and feeling loved! 🐾";

#[sqlx::test(migrations = "../db/migrations")]
async fn unreachable_captioning_api_still_returns_200_with_fallback(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(
        app,
        "/api/analyze-pet-photo",
        serde_json::json!({ "imageUrl": "https://example.com/rover.png" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["caption"], FALLBACK_CAPTION);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_body_still_returns_200_with_fallback(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/analyze-pet-photo")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from("this is not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["caption"], FALLBACK_CAPTION);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_image_url_field_still_returns_200_with_fallback(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(
        app,
        "/api/analyze-pet-photo",
        serde_json::json!({ "somethingElse": true }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["caption"], FALLBACK_CAPTION);
}
