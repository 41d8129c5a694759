//! Periodic cleanup of dead backend sessions.
//!
//! Spawns a background task that deletes expired and revoked rows from
//! `user_sessions`. Runs on a fixed interval using `tokio::time::interval`.

use std::time::Duration;

use petride_db::repositories::SessionRepo;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

/// How often the cleanup job runs.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(3600); // 1 hour

/// Run the session cleanup loop.
///
/// Deletes sessions that are expired or revoked. Runs until `cancel` is
/// triggered.
pub async fn run(pool: PgPool, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = CLEANUP_INTERVAL.as_secs(),
        "Session cleanup job started"
    );

    let mut interval = tokio::time::interval(CLEANUP_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Session cleanup job stopping");
                break;
            }
            _ = interval.tick() => {
                match SessionRepo::cleanup_expired(&pool).await {
                    Ok(deleted) => {
                        if deleted > 0 {
                            tracing::info!(deleted, "Session cleanup: purged dead sessions");
                        } else {
                            tracing::debug!("Session cleanup: nothing to purge");
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Session cleanup failed");
                    }
                }
            }
        }
    }
}
