//! Backend session model and DTOs.
//!
//! There is no local users table -- identity lives in the auth provider --
//! so each session row snapshots the email it was minted for.

use petride_core::types::{DbId, Timestamp, UserId};
use sqlx::FromRow;

/// A session row from the `user_sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserSession {
    pub id: DbId,
    pub user_id: UserId,
    pub email: String,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new session.
pub struct CreateSession {
    pub user_id: UserId,
    pub email: String,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}
