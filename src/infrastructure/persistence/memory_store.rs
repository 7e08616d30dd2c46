//! In-process implementation of the store contract.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::domain::entities::ShortUrl;
use crate::domain::repositories::{StoreError, UrlStore};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// [`UrlStore`] backed by an in-process hash map keyed by slug.
///
/// Slug uniqueness is enforced atomically under the write lock, so two
/// concurrent inserts of the same slug cannot both succeed. Lookup by URL
/// is a linear scan; acceptable for the sizes this store is meant for.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, ShortUrl>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlStore for MemoryStore {
    async fn add(&self, entry: ShortUrl) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;

        match entries.entry(entry.slug.clone()) {
            Entry::Occupied(_) => Err(StoreError::SlugInUse),
            Entry::Vacant(slot) => {
                slot.insert(entry);
                Ok(())
            }
        }
    }

    async fn get(&self, slug: &str) -> Result<ShortUrl, StoreError> {
        self.entries
            .read()
            .await
            .get(slug)
            .cloned()
            .ok_or(StoreError::SlugNotFound)
    }

    async fn get_by_url(&self, url: &str) -> Result<ShortUrl, StoreError> {
        self.entries
            .read()
            .await
            .values()
            .find(|entry| entry.url == url)
            .cloned()
            .ok_or(StoreError::UrlNotFound)
    }

    async fn update(&self, entry: ShortUrl) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;

        match entries.get_mut(&entry.slug) {
            Some(stored) => {
                *stored = entry;
                Ok(())
            }
            None => Err(StoreError::SlugNotFound),
        }
    }

    async fn delete(&self, slug: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .await
            .remove(slug)
            .map(|_| ())
            .ok_or(StoreError::SlugNotFound)
    }
}
