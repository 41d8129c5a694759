//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/api/v1/auth`.
///
/// ```text
/// POST /signup   -> signup
/// POST /refresh  -> refresh
/// POST /logout   -> logout (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/refresh", post(auth::refresh))
        .route("/logout", post(auth::logout))
}

/// The OAuth callback, mounted at root level (the provider redirects the
/// browser here, outside the versioned API).
pub fn callback_router() -> Router<AppState> {
    Router::new().route("/auth/callback", get(auth::callback))
}
