//! Repository for the `journal_entries` table.

use petride_core::types::UserId;
use sqlx::PgPool;

use crate::models::journal::{CreateJournalEntry, JournalEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, image_url, ai_caption, created_at";

/// Provides CRUD operations for journal entries.
pub struct JournalRepo;

impl JournalRepo {
    /// Insert a new entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateJournalEntry,
    ) -> Result<JournalEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO journal_entries (user_id, image_url, ai_caption)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JournalEntry>(&query)
            .bind(input.user_id)
            .bind(&input.image_url)
            .bind(&input.ai_caption)
            .fetch_one(pool)
            .await
    }

    /// List a user's entries, newest first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Vec<JournalEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM journal_entries
             WHERE user_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, JournalEntry>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Number of entries a user has stored.
    pub async fn count_for_user(pool: &PgPool, user_id: UserId) -> Result<i64, sqlx::Error> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM journal_entries WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }
}
