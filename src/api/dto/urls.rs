//! DTOs for the URL management endpoints.

use crate::domain::entities::ShortUrl;
use crate::utils::url_norm::validate_url_chars;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to store a new mapping.
///
/// When `slug` is omitted the service generates one.
#[derive(Debug, Deserialize, Validate)]
pub struct AddUrlRequest {
    #[validate(length(min = 1, message = "url is required"))]
    #[validate(custom(function = validate_url_chars))]
    pub url: String,

    pub slug: Option<String>,
}

/// A stored mapping as returned to callers.
///
/// The hit counter is the snapshot taken before any increment triggered by
/// the request itself.
#[derive(Debug, Serialize)]
pub struct ShortUrlResponse {
    pub url: String,
    pub slug: String,
    pub hits: u64,
}

impl From<ShortUrl> for ShortUrlResponse {
    fn from(entry: ShortUrl) -> Self {
        Self {
            url: entry.url,
            slug: entry.slug,
            hits: entry.hits,
        }
    }
}
