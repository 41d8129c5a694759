//! Client for the hosted image-captioning model.
//!
//! Sends a single chat-completions request (OpenAI-compatible wire format,
//! OpenRouter by default) with one pet photo and a fixed prompt, and
//! extracts the caption from the first choice. Callers decide what to do
//! on failure; this crate only reports it.

use serde::Deserialize;

/// Default chat-completions API base URL.
pub const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1";

/// Default model used for captioning.
pub const DEFAULT_MODEL: &str = "google/gemini-2.0-flash-exp:free";

/// Caption returned when the model responds without usable content.
pub const EMPTY_RESPONSE_CAPTION: &str = "I'm feeling wonderful today! 🐾";

/// Token cap for a caption completion.
const MAX_CAPTION_TOKENS: u32 = 150;

/// Sampling temperature for caption generation.
const CAPTION_TEMPERATURE: f64 = 0.8;

/// Prompt sent with every photo.
const CAPTION_PROMPT: &str = "Look at this pet photo and tell me what you think the pet is \
    thinking or feeling today. Write it as if you are the pet speaking in first person, in a \
    playful and endearing way. Keep it to 1-2 sentences and include an appropriate emoji. \
    Make it heartwarming and fun!";

/// Captioning configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct CaptionConfig {
    /// API base URL (default: OpenRouter).
    pub api_url: String,
    /// Bearer token for the API.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
}

impl CaptionConfig {
    /// Load captioning configuration from environment variables.
    ///
    /// | Env Var           | Required | Default                             |
    /// |-------------------|----------|-------------------------------------|
    /// | `CAPTION_API_KEY` | **yes**  | --                                  |
    /// | `CAPTION_API_URL` | no       | `https://openrouter.ai/api/v1`      |
    /// | `CAPTION_MODEL`   | no       | `google/gemini-2.0-flash-exp:free`  |
    ///
    /// # Panics
    ///
    /// Panics if `CAPTION_API_KEY` is not set.
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("CAPTION_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into()),
            api_key: std::env::var("CAPTION_API_KEY")
                .expect("CAPTION_API_KEY must be set in the environment"),
            model: std::env::var("CAPTION_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
        }
    }
}

/// Errors from the captioning API layer.
#[derive(Debug, thiserror::Error)]
pub enum CaptionError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Captioning API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Chat-completions response envelope (only the fields we read).
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client for the captioning endpoint.
pub struct CaptionClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl CaptionClient {
    /// Create a new client from configuration.
    pub fn new(config: &CaptionConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across services).
    pub fn with_client(client: reqwest::Client, config: &CaptionConfig) -> Self {
        Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    /// Request a caption for a publicly reachable image URL.
    ///
    /// Returns the model's caption, or [`EMPTY_RESPONSE_CAPTION`] when the
    /// API succeeds but returns no usable content.
    pub async fn caption_image(&self, image_url: &str) -> Result<String, CaptionError> {
        let body = request_body(&self.model, image_url);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let completion: ChatCompletionResponse = Self::parse_response(response).await?;
        let caption = extract_caption(completion);
        tracing::debug!(caption_len = caption.len(), "Caption received");
        Ok(caption)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, or surface the
    /// status and body as a [`CaptionError::Api`].
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, CaptionError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CaptionError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, CaptionError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Build the chat-completions request body for one image.
fn request_body(model: &str, image_url: &str) -> serde_json::Value {
    serde_json::json!({
        "model": model,
        "messages": [
            {
                "role": "user",
                "content": [
                    { "type": "text", "text": CAPTION_PROMPT },
                    { "type": "image_url", "image_url": { "url": image_url } },
                ],
            },
        ],
        "max_tokens": MAX_CAPTION_TOKENS,
        "temperature": CAPTION_TEMPERATURE,
    })
}

/// Pull the caption out of a completion, falling back when the model
/// returned nothing usable.
fn extract_caption(completion: ChatCompletionResponse) -> String {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| EMPTY_RESPONSE_CAPTION.to_string())
}
