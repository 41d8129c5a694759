//! HTTP-level integration tests for the photo journal.
//!
//! Upload tests exercise the validation gate only: a rejected file must
//! never reach storage or the captioning API (both point at an unroutable
//! endpoint here, so reaching them would fail loudly anyway).

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, mint_token, multipart_file, post_multipart_auth};
use petride_db::models::journal::CreateJournalEntry;
use petride_db::repositories::JournalRepo;
use sqlx::PgPool;
use uuid::Uuid;

const BOUNDARY: &str = "x-test-boundary-7MA4YWxkTrZu0gW";

/// PNG magic bytes -- enough for format sniffing.
const PNG_HEADER: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

// ---------------------------------------------------------------------------
// Feed
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_starts_empty(pool: PgPool) {
    let token = mint_token(Uuid::new_v4(), "jessica@petride.com");
    let app = common::build_test_app(pool).await;

    let response = get_auth(app, "/api/v1/journal", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_returns_own_entries_newest_first(pool: PgPool) {
    let user_id = Uuid::new_v4();
    for caption in ["first photo", "second photo"] {
        JournalRepo::create(
            &pool,
            &CreateJournalEntry {
                user_id,
                image_url: "https://pet-photos.s3.us-east-1.amazonaws.com/a.png".to_string(),
                ai_caption: caption.to_string(),
            },
        )
        .await
        .unwrap();
    }
    // Someone else's entry must not leak into the feed.
    JournalRepo::create(
        &pool,
        &CreateJournalEntry {
            user_id: Uuid::new_v4(),
            image_url: "https://pet-photos.s3.us-east-1.amazonaws.com/b.png".to_string(),
            ai_caption: "not yours".to_string(),
        },
    )
    .await
    .unwrap();

    let token = mint_token(user_id, "jessica@petride.com");
    let app = common::build_test_app(pool).await;

    let response = get_auth(app, "/api/v1/journal", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    let captions: Vec<&str> = data
        .iter()
        .map(|e| e["ai_caption"].as_str().unwrap())
        .collect();
    assert!(captions.contains(&"first photo"));
    assert!(captions.contains(&"second photo"));
    assert!(!captions.contains(&"not yours"));
}

// ---------------------------------------------------------------------------
// Upload validation gate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_rejects_non_image_content_type(pool: PgPool) {
    let token = mint_token(Uuid::new_v4(), "jessica@petride.com");
    let app = common::build_test_app(pool).await;

    let body = multipart_file(BOUNDARY, "notes.txt", "text/plain", b"hello");
    let response =
        post_multipart_auth(app, "/api/v1/journal/photos", BOUNDARY, body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Please select an image file");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_rejects_fake_image_content(pool: PgPool) {
    let token = mint_token(Uuid::new_v4(), "jessica@petride.com");
    let app = common::build_test_app(pool).await;

    // Declared as PNG, but the payload is text: the sniffer catches it.
    let body = multipart_file(BOUNDARY, "fake.png", "image/png", b"just some text");
    let response =
        post_multipart_auth(app, "/api/v1/journal/photos", BOUNDARY, body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_rejects_disallowed_extension(pool: PgPool) {
    let token = mint_token(Uuid::new_v4(), "jessica@petride.com");
    let app = common::build_test_app(pool).await;

    let body = multipart_file(BOUNDARY, "scan.tiff", "image/tiff", PNG_HEADER);
    let response =
        post_multipart_auth(app, "/api/v1/journal/photos", BOUNDARY, body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_without_file_field_is_bad_request(pool: PgPool) {
    let token = mint_token(Uuid::new_v4(), "jessica@petride.com");
    let app = common::build_test_app(pool).await;

    let body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"notes\"\r\n\r\nno file here\r\n--{BOUNDARY}--\r\n"
    )
    .into_bytes();
    let response =
        post_multipart_auth(app, "/api/v1/journal/photos", BOUNDARY, body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_requires_auth(pool: PgPool) {
    use axum::body::Body;
    use axum::http::{header::CONTENT_TYPE, Method, Request};
    use tower::ServiceExt;

    let app = common::build_test_app(pool).await;
    let body = multipart_file(BOUNDARY, "rover.png", "image/png", PNG_HEADER);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/v1/journal/photos")
                .header(
                    CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
