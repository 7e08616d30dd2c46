//! Handler for the shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::ShortenRequest;
use crate::api::dto::urls::ShortUrlResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the mapping for a URL, creating it on first sight.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// Idempotent by URL value: repeated calls with the same (normalized) URL
/// return the same slug, and every repeat counts as a hit.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(req): Json<ShortenRequest>,
) -> Result<Json<ShortUrlResponse>, AppError> {
    req.validate()
        .map_err(|e| AppError::InvalidRequest(e.to_string()))?;

    let entry = state.url_service.shorten(&req.url).await?;

    Ok(Json(entry.into()))
}
