//! HTTP client for the hosted auth provider.
//!
//! The backend never stores credentials. Email/password signup and OAuth
//! code exchange are delegated to the provider's REST API; only the
//! returned identity is used to mint backend sessions.

use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

/// Auth provider configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Provider base URL, e.g. `https://<project>.supabase.co`.
    pub base_url: String,
    /// Public (anon) API key sent with every request.
    pub anon_key: String,
}

impl ProviderConfig {
    /// Load provider configuration from environment variables.
    ///
    /// | Env Var                  | Required |
    /// |--------------------------|----------|
    /// | `AUTH_PROVIDER_URL`      | **yes**  |
    /// | `AUTH_PROVIDER_ANON_KEY` | **yes**  |
    ///
    /// # Panics
    ///
    /// Panics if either variable is not set.
    pub fn from_env() -> Self {
        let base_url = std::env::var("AUTH_PROVIDER_URL")
            .expect("AUTH_PROVIDER_URL must be set in the environment")
            .trim_end_matches('/')
            .to_string();
        let anon_key = std::env::var("AUTH_PROVIDER_ANON_KEY")
            .expect("AUTH_PROVIDER_ANON_KEY must be set in the environment");
        Self { base_url, anon_key }
    }
}

/// Errors from the auth provider API layer.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Auth provider error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider returned a 2xx response we could not interpret.
    #[error("Unexpected provider response: {0}")]
    Decode(String),
}

// ---------------------------------------------------------------------------
// Provider types
// ---------------------------------------------------------------------------

/// The identity object the provider returns for a user.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderUser {
    pub id: Uuid,
    pub email: Option<String>,
    /// Free-form metadata captured at signup (`full_name`, `phone`,
    /// `pet_type`, `city`).
    #[serde(default)]
    pub user_metadata: Value,
}

impl ProviderUser {
    /// Display name resolution used by the OAuth signup path:
    /// metadata `full_name`, else the email local part, else `"User"`.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.metadata_str("full_name") {
            if !name.trim().is_empty() {
                return name.to_string();
            }
        }
        if let Some(email) = &self.email {
            if let Some((local, _)) = email.split_once('@') {
                if !local.is_empty() {
                    return local.to_string();
                }
            }
        }
        "User".to_string()
    }

    /// Fetch a string value from the signup metadata.
    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.user_metadata.get(key).and_then(Value::as_str)
    }
}

/// A provider session returned by the token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSession {
    pub access_token: String,
    pub user: ProviderUser,
}

/// Outcome of an email/password signup.
#[derive(Debug)]
pub enum SignupOutcome {
    /// The provider sent a confirmation email; no session exists yet.
    ConfirmationSent(ProviderUser),
    /// The user is already confirmed and a session was returned.
    Confirmed(ProviderSession),
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client for the auth provider.
pub struct AuthProviderClient {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl AuthProviderClient {
    /// Create a new client from configuration.
    pub fn new(config: &ProviderConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &ProviderConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            anon_key: config.anon_key.clone(),
        }
    }

    /// Register a new email/password user.
    ///
    /// `metadata` is stored verbatim on the provider side and echoed back in
    /// `user_metadata`. Depending on the provider's confirmation settings the
    /// response is either the bare user (confirmation email sent) or a full
    /// session.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: Value,
    ) -> Result<SignupOutcome, ProviderError> {
        let body = serde_json::json!({
            "email": email,
            "password": password,
            "data": metadata,
        });

        let response = self
            .client
            .post(format!("{}/auth/v1/signup", self.base_url))
            .header("apikey", &self.anon_key)
            .json(&body)
            .send()
            .await?;

        let value: Value = Self::parse_response(response).await?;
        parse_signup_outcome(value)
    }

    /// Exchange an OAuth callback code for a provider session.
    pub async fn exchange_code(&self, code: &str) -> Result<ProviderSession, ProviderError> {
        let body = serde_json::json!({ "auth_code": code });

        let response = self
            .client
            .post(format!(
                "{}/auth/v1/token?grant_type=authorization_code",
                self.base_url
            ))
            .header("apikey", &self.anon_key)
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, or surface the
    /// status and body as a [`ProviderError::Api`].
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ProviderError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ProviderError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Interpret a 2xx signup response.
///
/// A session payload (has `access_token`) means the user is already
/// confirmed; a bare user object means a confirmation email went out.
fn parse_signup_outcome(value: Value) -> Result<SignupOutcome, ProviderError> {
    if value.get("access_token").is_some() {
        let session: ProviderSession =
            serde_json::from_value(value).map_err(|e| ProviderError::Decode(e.to_string()))?;
        Ok(SignupOutcome::Confirmed(session))
    } else {
        let user: ProviderUser =
            serde_json::from_value(value).map_err(|e| ProviderError::Decode(e.to_string()))?;
        Ok(SignupOutcome::ConfirmationSent(user))
    }
}
