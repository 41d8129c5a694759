//! Route definitions for the `/waitlist` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::waitlist;
use crate::state::AppState;

/// Routes mounted at `/api/v1/waitlist`.
///
/// ```text
/// POST /complete  -> complete (requires auth)
/// GET  /me        -> me (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/complete", post(waitlist::complete))
        .route("/me", get(waitlist::me))
}
