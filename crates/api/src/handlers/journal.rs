//! Handlers for the `/journal` resource.
//!
//! The photo upload runs the full pipeline: validate the file, store it in
//! the photo bucket, caption it with the hosted model, and persist the
//! journal entry. Captioning failures never fail the upload.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use petride_core::journal::{generate_photo_object_key, validate_photo};
use petride_db::models::journal::{CreateJournalEntry, JournalEntry};
use petride_db::repositories::JournalRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Caption stored when the captioning call fails outright.
const DEFAULT_UPLOAD_CAPTION: &str = "Looking adorable as always! 🐾";

/// POST /api/v1/journal/photos
///
/// Accepts a multipart form with a required `file` field. Returns the
/// created journal entry with its public image URL and caption.
pub async fn upload_photo(
    State(state): State<AppState>,
    auth_user: AuthUser,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<JournalEntry>)> {
    let mut file: Option<(String, Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().map(str::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            file = Some((filename, content_type, data.to_vec()));
        }
        // ignore unknown fields
    }

    let (filename, content_type, bytes) =
        file.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    // Rejected uploads never reach storage or the captioning API.
    validate_photo(content_type.as_deref(), &filename, &bytes)?;

    let key = generate_photo_object_key(&filename)?;
    let declared_type = content_type.unwrap_or_else(|| "application/octet-stream".to_string());

    state.storage.upload(&key, bytes, &declared_type).await?;
    let image_url = state.storage.public_url(&key);

    let ai_caption = match state.caption.caption_image(&image_url).await {
        Ok(caption) => caption,
        Err(e) => {
            tracing::warn!(error = %e, "Captioning failed, using default caption");
            DEFAULT_UPLOAD_CAPTION.to_string()
        }
    };

    let entry = JournalRepo::create(
        &state.pool,
        &CreateJournalEntry {
            user_id: auth_user.user_id,
            image_url,
            ai_caption,
        },
    )
    .await?;

    tracing::info!(user_id = %auth_user.user_id, entry_id = entry.id, "Journal photo uploaded");
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/v1/journal
///
/// The caller's journal entries, newest first.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<JournalEntry>>>> {
    let entries = JournalRepo::list_by_user(&state.pool, auth_user.user_id).await?;
    Ok(Json(DataResponse { data: entries }))
}
