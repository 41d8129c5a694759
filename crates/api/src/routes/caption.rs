//! Route definition for the captioning endpoint.
//!
//! Mounted at root level: the path is fixed API surface consumed by the
//! frontend upload flow.

use axum::routing::post;
use axum::Router;

use crate::handlers::caption;
use crate::state::AppState;

/// `POST /api/analyze-pet-photo`.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/analyze-pet-photo", post(caption::analyze))
}
