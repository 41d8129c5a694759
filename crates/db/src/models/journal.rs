//! Photo-journal entry model and DTOs.

use petride_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `journal_entries` table: a stored pet photo plus its
/// generated caption.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JournalEntry {
    pub id: DbId,
    pub user_id: UserId,
    /// Public URL of the stored photo.
    pub image_url: String,
    pub ai_caption: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new journal entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateJournalEntry {
    pub user_id: UserId,
    pub image_url: String,
    pub ai_caption: String,
}
