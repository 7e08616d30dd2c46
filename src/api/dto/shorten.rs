//! DTO for the shortening endpoint.

use crate::utils::url_norm::validate_url_chars;
use serde::Deserialize;
use validator::Validate;

/// Request to shorten a URL.
///
/// The URL may omit the scheme; `http://` is prepended during
/// normalization.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, message = "url is required"))]
    #[validate(custom(function = validate_url_chars))]
    pub url: String,
}
