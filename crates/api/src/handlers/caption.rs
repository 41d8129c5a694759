//! Handler for `POST /api/analyze-pet-photo`.
//!
//! This endpoint never fails from the caller's perspective: any error --
//! malformed body, captioning API failure, empty model output -- collapses
//! into a fixed fallback caption with HTTP 200.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Caption returned when analysis fails for any reason.
const FALLBACK_CAPTION: &str = "I'm having a great day and feeling loved! 🐾";

/// Request body for `POST /api/analyze-pet-photo`.
#[derive(Debug, Deserialize)]
pub struct AnalyzePhotoRequest {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Response body: always present, always 200.
#[derive(Debug, Serialize)]
pub struct CaptionResponse {
    pub caption: String,
}

/// POST /api/analyze-pet-photo
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzePhotoRequest>, JsonRejection>,
) -> Json<CaptionResponse> {
    let Ok(Json(input)) = payload else {
        tracing::warn!("Malformed analyze-pet-photo request body, using fallback caption");
        return Json(CaptionResponse {
            caption: FALLBACK_CAPTION.to_string(),
        });
    };

    let caption = match state.caption.caption_image(&input.image_url).await {
        Ok(caption) => caption,
        Err(e) => {
            tracing::warn!(error = %e, "AI analysis failed, using fallback caption");
            FALLBACK_CAPTION.to_string()
        }
    };

    Json(CaptionResponse { caption })
}
