//! Handlers for the `/waitlist` resource.

use axum::extract::State;
use axum::Json;
use petride_core::error::CoreError;
use petride_core::pet::PetType;
use petride_core::waitlist::{validate_city, validate_name, validate_phone};
use petride_db::models::waitlist::{CreateWaitlistEntry, UpdateWaitlistEntry, WaitlistEntry};
use petride_db::repositories::WaitlistRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /waitlist/complete`.
///
/// Email comes from the authenticated identity, never from the form.
#[derive(Debug, Deserialize)]
pub struct CompleteWaitlistRequest {
    pub name: String,
    pub phone: Option<String>,
    pub pet_type: String,
    pub city: String,
}

/// POST /api/v1/waitlist/complete
///
/// Finish the waitlist signup after the account is confirmed. A row created
/// earlier for the same email (e.g. during a pre-confirmation signup) is
/// updated in place and rebound to the caller's identity; otherwise a new
/// row is inserted.
pub async fn complete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CompleteWaitlistRequest>,
) -> AppResult<Json<WaitlistEntry>> {
    validate_name(&input.name)?;
    let phone = input.phone.unwrap_or_default();
    validate_phone(&phone)?;
    let pet_type = PetType::from_name(&input.pet_type)?;
    validate_city(&input.city)?;

    let update = UpdateWaitlistEntry {
        user_id: Some(auth_user.user_id),
        name: Some(input.name.clone()),
        phone: Some(phone.clone()),
        pet_type: Some(pet_type.name().to_string()),
        city: Some(input.city.clone()),
    };

    let entry = match WaitlistRepo::update_by_email(&state.pool, &auth_user.email, &update).await? {
        Some(row) => row,
        None => {
            WaitlistRepo::create(
                &state.pool,
                &CreateWaitlistEntry {
                    user_id: auth_user.user_id,
                    name: input.name,
                    email: auth_user.email.clone(),
                    phone,
                    pet_type: pet_type.name().to_string(),
                    city: input.city,
                },
            )
            .await?
        }
    };

    Ok(Json(entry))
}

/// GET /api/v1/waitlist/me
///
/// The caller's waitlist row. 404 when none exists -- the frontend uses
/// that to route the user to the completion form.
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<WaitlistEntry>> {
    let entry = WaitlistRepo::find_by_user_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "WaitlistEntry",
                id: auth_user.user_id.to_string(),
            })
        })?;
    Ok(Json(entry))
}
