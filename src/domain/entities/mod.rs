//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Following the
//! "new type" pattern, creation input is a separate struct from the stored
//! entity:
//!
//! - [`ShortUrl`] - A stored slug-to-URL mapping with its hit counter
//! - [`NewShortUrl`] - Input for creating a new mapping

pub mod short_url;

pub use short_url::{NewShortUrl, ShortUrl};
