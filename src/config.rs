//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:7000`)
//! - `SLUG_LEN` - Generated slug length (default: 5; 0 disables slugs)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! A `.env` file in the working directory is honored via `dotenvy`.

use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Length of generated slugs. Zero makes every slug invalid, which
    /// cleanly disables the shortening endpoints.
    pub slug_len: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:7000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let slug_len = env::var("SLUG_LEN")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Self {
            listen_addr,
            slug_len,
            log_level,
            log_format,
        }
    }
}
