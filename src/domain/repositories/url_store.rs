//! Storage contract for shortened URL entries.

use crate::domain::entities::ShortUrl;
use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by a [`UrlStore`] implementation.
///
/// The first three variants carry the store's own taxonomy; anything the
/// store cannot classify is wrapped in [`StoreError::Other`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("slug already in use")]
    SlugInUse,
    #[error("slug not found")]
    SlugNotFound,
    #[error("url not found")]
    UrlNotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Storage interface for shortened URL entries, keyed by slug with a
/// secondary lookup by URL value.
///
/// Uniqueness of slugs is enforced here, at insert time, and not by the
/// callers: concurrent writers may both pass an existence check, so the
/// insert itself must reject duplicates.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Inserts a new entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::SlugInUse`] if the slug is already taken and
    /// [`StoreError::Other`] on any other storage failure.
    async fn add(&self, entry: ShortUrl) -> Result<(), StoreError>;

    /// Retrieves an entry by slug.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::SlugNotFound`] if no entry matches.
    async fn get(&self, slug: &str) -> Result<ShortUrl, StoreError>;

    /// Retrieves an entry by its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UrlNotFound`] if no entry matches.
    async fn get_by_url(&self, url: &str) -> Result<ShortUrl, StoreError>;

    /// Replaces the entry stored under `entry.slug`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::SlugNotFound`] if no entry matches.
    async fn update(&self, entry: ShortUrl) -> Result<(), StoreError>;

    /// Removes an entry by slug.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::SlugNotFound`] if no entry matches.
    async fn delete(&self, slug: &str) -> Result<(), StoreError>;
}
