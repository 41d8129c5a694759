//! Shared helpers for HTTP-level integration tests.
//!
//! `build_test_app` mirrors the router construction in `main.rs` so tests
//! exercise the same middleware stack (CORS, request ID, timeout, tracing,
//! panic recovery) that production uses. Vendor clients point at an
//! unroutable local port: any test that actually reaches a vendor fails
//! fast with a connection error, which is exactly the failure path under
//! test.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use uuid::Uuid;

use petride_api::auth::jwt::{generate_access_token, JwtConfig};
use petride_api::auth::provider::{AuthProviderClient, ProviderConfig};
use petride_api::config::ServerConfig;
use petride_api::routes;
use petride_api::state::AppState;
use petride_caption::{CaptionClient, CaptionConfig};
use petride_storage::{ObjectStorage, StorageConfig};

/// Unroutable local endpoint: connections are refused immediately.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:1";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        app_base_url: "http://localhost:5173".to_string(),
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Mint a valid access token for the test JWT config.
pub fn mint_token(user_id: Uuid, email: &str) -> String {
    generate_access_token(user_id, email, &test_config().jwt)
        .expect("token generation should succeed")
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub async fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let provider = Arc::new(AuthProviderClient::new(&ProviderConfig {
        base_url: DEAD_ENDPOINT.to_string(),
        anon_key: "test-anon-key".to_string(),
    }));
    let storage = Arc::new(
        ObjectStorage::connect(&StorageConfig {
            bucket: "pet-photos".to_string(),
            region: "us-east-1".to_string(),
            endpoint_url: Some(DEAD_ENDPOINT.to_string()),
            public_base_url: Some(DEAD_ENDPOINT.to_string()),
        })
        .await,
    );
    let caption = Arc::new(CaptionClient::new(&CaptionConfig {
        api_url: DEAD_ENDPOINT.to_string(),
        api_key: "test-key".to_string(),
        model: petride_caption::DEFAULT_MODEL.to_string(),
    }));

    let state = AppState {
        pool,
        config: Arc::new(config),
        provider,
        storage,
        caption,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::auth::callback_router())
        .merge(routes::caption::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// GET a path with no auth.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
    .expect("request should not fail")
}

/// GET a path with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
    .expect("request should not fail")
}

/// POST a JSON body with no auth.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request should build"),
    )
    .await
    .expect("request should not fail")
}

/// POST a JSON body with a Bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .expect("request should build"),
    )
    .await
    .expect("request should not fail")
}

/// POST a raw multipart body with a Bearer token.
pub async fn post_multipart_auth(
    app: Router,
    uri: &str,
    boundary: &str,
    body: Vec<u8>,
    token: &str,
) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body))
            .expect("request should build"),
    )
    .await
    .expect("request should not fail")
}

/// Build a single-field multipart body for a file upload.
pub fn multipart_file(boundary: &str, filename: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; \
             filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}

/// Collect a response body into parsed JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
