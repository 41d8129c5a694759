//! Waitlist entry model and DTOs.

use petride_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `waitlist` table: one prospective customer collected
/// pre-launch.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WaitlistEntry {
    pub id: DbId,
    /// Identity from the hosted auth provider.
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub pet_type: String,
    pub city: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new waitlist entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWaitlistEntry {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub pet_type: String,
    pub city: String,
}

/// DTO for updating an existing entry by email.
///
/// The completion form rebinds `user_id` when the row was created before
/// the account was confirmed.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWaitlistEntry {
    pub user_id: Option<UserId>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub pet_type: Option<String>,
    pub city: Option<String>,
}
