//! Utility modules for slug generation and URL handling.
//!
//! - [`slug_generator`] - Fixed-length random slug generation and validation
//! - [`url_norm`] - URL normalization applied before shortening

pub mod slug_generator;
pub mod url_norm;
