//! Handlers for signup, the OAuth callback, token refresh, and logout.
//!
//! Identity is owned by the hosted auth provider; these handlers delegate
//! to it and mint backend token pairs for the confirmed identity.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::Json;
use chrono::Utc;
use petride_core::error::CoreError;
use petride_core::pet::PetType;
use petride_core::types::UserId;
use petride_core::waitlist::{
    validate_city, validate_email, validate_name, validate_password, validate_phone,
};
use petride_db::models::waitlist::CreateWaitlistEntry;
use petride_db::repositories::{SessionRepo, WaitlistRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::provider::{ProviderUser, SignupOutcome};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/signup`.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub pet_type: String,
    pub city: String,
}

/// Response for `POST /auth/signup`.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    /// `"confirmation_sent"` or `"confirmed"`.
    pub status: &'static str,
    /// Backend tokens, present only when the user is already confirmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthResponse>,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful authentication response returned by signup, callback, and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: UserId,
    pub email: String,
}

/// Query parameters on the OAuth callback.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub google_signup: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/signup
///
/// Validate the signup form and register the user with the auth provider.
/// When email confirmation is required (the default), no waitlist row is
/// written yet -- the callback handles that after the user confirms.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<Json<SignupResponse>> {
    validate_name(&input.name)?;
    validate_email(&input.email)?;
    validate_password(&input.password)?;
    let phone = input.phone.unwrap_or_default();
    validate_phone(&phone)?;
    let pet_type = PetType::from_name(&input.pet_type)?;
    validate_city(&input.city)?;

    let metadata = serde_json::json!({
        "full_name": input.name,
        "phone": phone,
        "pet_type": pet_type.name(),
        "city": input.city,
    });

    let outcome = state
        .provider
        .sign_up(&input.email, &input.password, metadata)
        .await?;

    match outcome {
        SignupOutcome::ConfirmationSent(user) => {
            tracing::info!(user_id = %user.id, "Signup registered, confirmation email sent");
            Ok(Json(SignupResponse {
                status: "confirmation_sent",
                auth: None,
            }))
        }
        SignupOutcome::Confirmed(session) => {
            // Confirmation is disabled on the provider: store the waitlist
            // row from the form right away.
            let user = session.user;
            let email = user.email.clone().unwrap_or(input.email);
            WaitlistRepo::create(
                &state.pool,
                &CreateWaitlistEntry {
                    user_id: user.id,
                    name: input.name,
                    email: email.clone(),
                    phone,
                    pet_type: pet_type.name().to_string(),
                    city: input.city,
                },
            )
            .await?;

            let auth = create_auth_response(&state, user.id, &email).await?;
            Ok(Json(SignupResponse {
                status: "confirmed",
                auth: Some(auth),
            }))
        }
    }
}

/// GET /auth/callback?code=...&google_signup=true
///
/// Exchange the provider code for a session and route the user:
/// - existing waitlist row -> `/dashboard`
/// - no row, Google signup -> create a basic row, then `/dashboard`
/// - no row otherwise -> `/waitlist/complete`
/// - any failure -> `/`
///
/// Backend tokens ride along in the URL fragment so they never appear in
/// request logs on the target.
pub async fn callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> Redirect {
    let app = &state.config.app_base_url;

    let Some(code) = query.code else {
        return Redirect::to(&format!("{app}/"));
    };
    let is_google_signup = query.google_signup.as_deref() == Some("true");

    let session = match state.provider.exchange_code(&code).await {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(error = %e, "OAuth code exchange failed");
            return Redirect::to(&format!("{app}/"));
        }
    };
    let user = session.user;

    let existing = match WaitlistRepo::find_by_user_id(&state.pool, user.id).await {
        Ok(row) => row,
        Err(e) => {
            tracing::error!(error = %e, "Waitlist lookup failed during callback");
            return Redirect::to(&format!("{app}/"));
        }
    };

    let destination = if existing.is_some() {
        "/dashboard"
    } else if is_google_signup {
        // OAuth users skipped the signup form: create a basic entry from
        // whatever the provider knows. Failure is logged, not fatal.
        if let Err(e) = WaitlistRepo::create(&state.pool, &basic_entry(&user)).await {
            tracing::warn!(error = %e, user_id = %user.id, "Failed to create waitlist entry during OAuth signup");
        }
        "/dashboard"
    } else {
        "/waitlist/complete"
    };

    let email = user.email.clone().unwrap_or_default();
    match create_auth_response(&state, user.id, &email).await {
        Ok(auth) => Redirect::to(&format!(
            "{app}{destination}#access_token={}&refresh_token={}",
            auth.access_token, auth.refresh_token
        )),
        Err(e) => {
            tracing::error!(error = %e, "Failed to mint backend session after code exchange");
            Redirect::to(&format!("{app}/"))
        }
    }
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token for new access + refresh tokens.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    // 1. Hash the provided refresh token.
    let token_hash = hash_refresh_token(&input.refresh_token);

    // 2. Find matching active session.
    let session = SessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    // 3. Revoke old session (token rotation).
    SessionRepo::revoke(&state.pool, session.id).await?;

    // 4. Generate new tokens and create a new session.
    let response = create_auth_response(&state, session.user_id, &session.email).await?;

    Ok(Json(response))
}

/// POST /api/v1/auth/logout
///
/// Revoke all sessions for the authenticated user. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<StatusCode> {
    SessionRepo::revoke_all_for_user(&state.pool, auth_user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Basic waitlist entry for an OAuth signup that skipped the form.
fn basic_entry(user: &ProviderUser) -> CreateWaitlistEntry {
    CreateWaitlistEntry {
        user_id: user.id,
        name: user.display_name(),
        email: user.email.clone().unwrap_or_default(),
        phone: user.metadata_str("phone").unwrap_or_default().to_string(),
        pet_type: PetType::default().name().to_string(),
        city: user.metadata_str("city").unwrap_or_default().to_string(),
    }
}

/// Generate access + refresh tokens, persist a session row, and build the response.
async fn create_auth_response(
    state: &AppState,
    user_id: UserId,
    email: &str,
) -> AppResult<AuthResponse> {
    let access_token = generate_access_token(user_id, email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();

    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    let session_input = petride_db::models::session::CreateSession {
        user_id,
        email: email.to_string(),
        refresh_token_hash: refresh_hash,
        expires_at,
        user_agent: None,
        ip_address: None,
    };
    SessionRepo::create(&state.pool, &session_input).await?;

    let expires_in = state.config.jwt.access_token_expiry_mins * 60;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in,
        user: UserInfo {
            id: user_id,
            email: email.to_string(),
        },
    })
}
