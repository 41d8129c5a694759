//! Repository for the `waitlist` table.

use petride_core::types::UserId;
use sqlx::PgPool;

use crate::models::waitlist::{CreateWaitlistEntry, UpdateWaitlistEntry, WaitlistEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, email, phone, pet_type, city, created_at, updated_at";

/// Provides CRUD operations for waitlist entries.
pub struct WaitlistRepo;

impl WaitlistRepo {
    /// Insert a new entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateWaitlistEntry,
    ) -> Result<WaitlistEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO waitlist (user_id, name, email, phone, pet_type, city)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WaitlistEntry>(&query)
            .bind(input.user_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.pet_type)
            .bind(&input.city)
            .fetch_one(pool)
            .await
    }

    /// Find an entry by the provider user id.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Option<WaitlistEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM waitlist WHERE user_id = $1");
        sqlx::query_as::<_, WaitlistEntry>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find an entry by email (case-sensitive, as stored).
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<WaitlistEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM waitlist WHERE email = $1");
        sqlx::query_as::<_, WaitlistEntry>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Whether an entry exists for the given provider user id.
    pub async fn exists_for_user(pool: &PgPool, user_id: UserId) -> Result<bool, sqlx::Error> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM waitlist WHERE user_id = $1)")
                .bind(user_id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }

    /// Update an entry matched by email. Only non-`None` fields are applied.
    ///
    /// This is the completion-form path: the row may predate the confirmed
    /// account, so `user_id` can be rebound here. Returns `None` if no row
    /// with the given email exists.
    pub async fn update_by_email(
        pool: &PgPool,
        email: &str,
        input: &UpdateWaitlistEntry,
    ) -> Result<Option<WaitlistEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE waitlist SET
                user_id = COALESCE($2, user_id),
                name = COALESCE($3, name),
                phone = COALESCE($4, phone),
                pet_type = COALESCE($5, pet_type),
                city = COALESCE($6, city),
                updated_at = NOW()
             WHERE email = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WaitlistEntry>(&query)
            .bind(email)
            .bind(input.user_id)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.pet_type)
            .bind(&input.city)
            .fetch_optional(pool)
            .await
    }

    /// List all entries ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<WaitlistEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM waitlist ORDER BY created_at DESC");
        sqlx::query_as::<_, WaitlistEntry>(&query)
            .fetch_all(pool)
            .await
    }
}
