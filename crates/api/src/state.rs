use std::sync::Arc;

use petride_caption::CaptionClient;
use petride_storage::ObjectStorage;

use crate::auth::provider::AuthProviderClient;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: petride_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Hosted auth provider client (signup, OAuth code exchange).
    pub provider: Arc<AuthProviderClient>,
    /// Object storage client for the photo bucket.
    pub storage: Arc<ObjectStorage>,
    /// Hosted captioning model client.
    pub caption: Arc<CaptionClient>,
}
