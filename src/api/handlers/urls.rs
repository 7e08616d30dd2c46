//! Handlers for explicit mapping management.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::urls::{AddUrlRequest, ShortUrlResponse};
use crate::domain::entities::NewShortUrl;
use crate::error::AppError;
use crate::state::AppState;

/// Stores a new mapping, generating a slug when none is supplied.
///
/// # Endpoint
///
/// `PUT /api/urls`
///
/// # Errors
///
/// Returns 400 when the slug fails validation and 409 when the slug is
/// already taken.
pub async fn add_url_handler(
    State(state): State<AppState>,
    Json(req): Json<AddUrlRequest>,
) -> Result<Json<ShortUrlResponse>, AppError> {
    req.validate()
        .map_err(|e| AppError::InvalidRequest(e.to_string()))?;

    let entry = state
        .url_service
        .add(NewShortUrl {
            url: req.url,
            slug: req.slug,
        })
        .await?;

    Ok(Json(entry.into()))
}

/// Returns the mapping stored under a slug.
///
/// # Endpoint
///
/// `GET /api/urls/{slug}`
///
/// The hit counter in the response is the snapshot taken before the
/// increment this request triggers.
///
/// # Errors
///
/// Returns 404 when the slug is unknown.
pub async fn get_url_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ShortUrlResponse>, AppError> {
    let entry = state.url_service.get(&slug).await?;

    Ok(Json(entry.into()))
}

/// Removes the mapping stored under a slug.
///
/// # Endpoint
///
/// `DELETE /api/urls/{slug}`
///
/// # Errors
///
/// Returns 404 when the slug is unknown.
pub async fn delete_url_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.url_service.delete(&slug).await?;

    Ok(StatusCode::NO_CONTENT)
}
