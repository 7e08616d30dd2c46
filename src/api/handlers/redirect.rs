//! Handler for the public slug redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its original URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// The resolution counts as a hit; the counter update runs detached from
/// this request.
///
/// # Errors
///
/// Returns 404 when the slug is unknown, and 500 when the stored URL
/// cannot be encoded as a `Location` header.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let entry = state.url_service.get(&slug).await?;

    // Never panic on a stored URL that slipped past validation.
    let location = HeaderValue::try_from(entry.url.as_str())
        .map_err(|_| AppError::Unexpected(anyhow::anyhow!("stored url is not header-safe")))?;

    debug!(slug = %entry.slug, url = %entry.url, "redirecting");

    Ok((StatusCode::PERMANENT_REDIRECT, [(header::LOCATION, location)]).into_response())
}
