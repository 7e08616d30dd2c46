//! # linkcut
//!
//! A small URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, the store contract, and the
//!   slugger contract
//! - **Application Layer** ([`application`]) - The shortening service
//! - **Infrastructure Layer** ([`infrastructure`]) - Store implementations
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Fixed-length random slugs over a lowercase alphabet
//! - Idempotent create-or-fetch shortening by URL value
//! - Fire-and-forget hit counting detached from the request lifecycle
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: override defaults
//! export LISTEN="0.0.0.0:7000"
//! export SLUG_LEN=5
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlService;
    pub use crate::domain::entities::{NewShortUrl, ShortUrl};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
