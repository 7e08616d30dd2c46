//! Application error taxonomy and HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
}

/// Errors produced by the service layer and surfaced over HTTP.
///
/// Every foreground store error is reclassified into one of these variants;
/// anything the service does not recognize is wrapped in
/// [`AppError::Unexpected`] with context and propagated untouched.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or empty slug, detected before any store call.
    #[error("slug not valid")]
    InvalidSlug,
    /// Uniqueness conflict reported by the store on insert.
    #[error("slug already in use")]
    SlugInUse,
    /// Lookup miss reported by the store.
    #[error("slug not found")]
    SlugNotFound,
    /// Request body failed validation before reaching the service.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// Unclassified failure, wrapped with context.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::InvalidSlug => (
                StatusCode::BAD_REQUEST,
                "invalid_slug",
                "slug not valid".to_string(),
            ),
            AppError::SlugInUse => (
                StatusCode::CONFLICT,
                "slug_in_use",
                "slug already in use".to_string(),
            ),
            AppError::SlugNotFound => (
                StatusCode::NOT_FOUND,
                "not_found",
                "slug not found".to_string(),
            ),
            AppError::InvalidRequest(message) => {
                (StatusCode::BAD_REQUEST, "validation_error", message)
            }
            AppError::Unexpected(err) => {
                tracing::error!(error = ?err, "unexpected failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "internal server error".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorInfo { code, message },
        };

        (status, Json(body)).into_response()
    }
}
