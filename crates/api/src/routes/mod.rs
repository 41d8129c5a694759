pub mod auth;
pub mod caption;
pub mod dashboard;
pub mod health;
pub mod journal;
pub mod waitlist;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup            signup via the hosted provider (public)
/// /auth/refresh           refresh (public)
/// /auth/logout            logout (requires auth)
///
/// /waitlist/complete      finish the waitlist form (requires auth)
/// /waitlist/me            the caller's waitlist row (requires auth)
///
/// /journal                journal feed, newest first (requires auth)
/// /journal/photos         photo upload pipeline (requires auth, multipart)
///
/// /dashboard/profile      profile widget (requires auth)
/// /dashboard/rides        demo rides widget (requires auth)
/// ```
///
/// Mounted at root level, outside `/api/v1`:
///
/// ```text
/// GET  /health                  service + database health
/// GET  /auth/callback           OAuth redirect handler
/// POST /api/analyze-pet-photo   captioning endpoint (always 200)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/waitlist", waitlist::router())
        .nest("/journal", journal::router())
        .nest("/dashboard", dashboard::router())
}
