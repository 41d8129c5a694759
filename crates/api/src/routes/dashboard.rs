//! Route definitions for the dashboard widgets.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/api/v1/dashboard`.
///
/// ```text
/// GET /profile  -> profile (requires auth)
/// GET /rides    -> rides (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(dashboard::profile))
        .route("/rides", get(dashboard::rides))
}
