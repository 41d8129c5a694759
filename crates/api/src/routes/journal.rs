//! Route definitions for the `/journal` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::journal;
use crate::state::AppState;

/// Slack on top of the photo cap for multipart framing overhead.
const UPLOAD_BODY_SLACK: usize = 1024 * 1024;

/// Routes mounted at `/api/v1/journal`.
///
/// ```text
/// GET  /         -> list (requires auth)
/// POST /photos   -> upload_photo (requires auth, multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(journal::list))
        .route(
            "/photos",
            post(journal::upload_photo).layer(DefaultBodyLimit::max(
                petride_core::journal::MAX_PHOTO_BYTES + UPLOAD_BODY_SLACK,
            )),
        )
}
