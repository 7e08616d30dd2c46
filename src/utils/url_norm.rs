use validator::ValidationError;

/// Normalizes a raw URL before shortening.
///
/// Inputs without an `http` scheme prefix get `http://` prepended so that
/// `x.dev` and `http://x.dev` map to the same entry.
pub fn normalize_url(input: &str) -> String {
    if input.starts_with("http") {
        input.to_string()
    } else {
        format!("http://{input}")
    }
}

/// Rejects URLs that cannot be echoed back in a `Location` header.
///
/// Stored URLs end up in redirect responses, so control bytes (CR, LF,
/// NUL, ...) must never reach the store.
pub fn validate_url_chars(url: &str) -> Result<(), ValidationError> {
    if url.bytes().any(|b| b.is_ascii_control()) {
        return Err(ValidationError::new("invalid_url")
            .with_message("url must not contain control characters".into()));
    }
    Ok(())
}
