//! Storage trait definitions for the domain layer.
//!
//! The [`UrlStore`] trait abstracts the persistence engine following the
//! Repository pattern. Concrete implementations live in
//! [`crate::infrastructure::persistence`]; mock implementations are
//! auto-generated via `mockall` for testing.

pub mod url_store;

pub use url_store::{StoreError, UrlStore};

#[cfg(test)]
pub use url_store::MockUrlStore;
