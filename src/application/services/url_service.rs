//! URL shortening and resolution service.

use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::{StoreError, UrlStore};
use crate::domain::slugger::Slugger;
use crate::error::AppError;
use crate::utils::url_norm::normalize_url;
use tracing::debug;

/// Service orchestrating slug generation and storage.
///
/// Holds no mutable state of its own; all shared state lives behind the
/// [`UrlStore`]. Every successful resolution dispatches a detached
/// hit-counter update that never blocks or fails the response.
pub struct UrlService {
    store: Arc<dyn UrlStore>,
    slugger: Arc<dyn Slugger>,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(store: Arc<dyn UrlStore>, slugger: Arc<dyn Slugger>) -> Self {
        Self { store, slugger }
    }

    /// Stores a new mapping, generating a slug when none is supplied.
    ///
    /// A caller-supplied slug is never overwritten. Generated slugs are
    /// attempted once; a collision is surfaced as [`AppError::SlugInUse`]
    /// rather than retried, since the store, not this service, owns
    /// uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidSlug`] if the slug fails validation and
    /// [`AppError::SlugInUse`] on a uniqueness conflict.
    pub async fn add(&self, new: NewShortUrl) -> Result<ShortUrl, AppError> {
        let slug = match new.slug {
            Some(slug) => slug,
            None => self.slugger.generate(),
        };

        if !self.slugger.is_valid(&slug) {
            return Err(AppError::InvalidSlug);
        }

        let entry = ShortUrl::new(new.url, slug, 0);
        self.store
            .add(entry.clone())
            .await
            .map_err(|e| classify(e, "could not add"))?;

        Ok(entry)
    }

    /// Resolves a slug to its stored entry.
    ///
    /// Returns the pre-increment snapshot; the hit counter is bumped by a
    /// detached task that outlives the request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidSlug`] for an empty slug, without touching
    /// the store, and [`AppError::SlugNotFound`] on a miss.
    pub async fn get(&self, slug: &str) -> Result<ShortUrl, AppError> {
        if slug.is_empty() {
            return Err(AppError::InvalidSlug);
        }

        let entry = self
            .store
            .get(slug)
            .await
            .map_err(|e| classify(e, "could not get"))?;

        self.dispatch_hit(entry.clone());

        Ok(entry)
    }

    /// Returns the entry for a URL, creating it if absent.
    ///
    /// The input is normalized first (a missing scheme gets `http://`
    /// prepended). A lookup hit counts as a resolution and dispatches the
    /// detached counter update; a fresh entry starts at zero hits.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::SlugInUse`] if the insert races with another
    /// writer on the same generated slug.
    pub async fn shorten(&self, raw_url: &str) -> Result<ShortUrl, AppError> {
        let url = normalize_url(raw_url);

        match self.store.get_by_url(&url).await {
            Ok(existing) => {
                self.dispatch_hit(existing.clone());
                Ok(existing)
            }
            Err(StoreError::UrlNotFound) => {
                let entry = ShortUrl::new(url, self.slugger.generate(), 0);
                self.store
                    .add(entry.clone())
                    .await
                    .map_err(|e| classify(e, "could not shorten"))?;
                Ok(entry)
            }
            Err(err) => Err(classify(err, "could not shorten")),
        }
    }

    /// Removes the entry stored under `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidSlug`] for an empty slug and
    /// [`AppError::SlugNotFound`] on a miss.
    pub async fn delete(&self, slug: &str) -> Result<(), AppError> {
        if slug.is_empty() {
            return Err(AppError::InvalidSlug);
        }

        self.store
            .delete(slug)
            .await
            .map_err(|e| classify(e, "could not delete"))
    }

    /// Dispatches the hit-counter update for a resolved entry.
    ///
    /// Runs on its own task, detached from the request's cancellation scope.
    /// Concurrent updates on a popular slug may lose increments; hit counts
    /// are advisory. The error is discarded, never reported to the caller.
    fn dispatch_hit(&self, entry: ShortUrl) {
        let store = Arc::clone(&self.store);

        tokio::spawn(async move {
            let bumped = entry.with_hit();
            if let Err(err) = store.update(bumped.clone()).await {
                debug!(slug = %bumped.slug, error = %err, "hit counter update dropped");
            }
        });
    }
}

/// Reclassifies a store error into the application taxonomy, wrapping
/// anything unrecognized with context.
fn classify(err: StoreError, context: &'static str) -> AppError {
    match err {
        StoreError::SlugInUse => AppError::SlugInUse,
        StoreError::SlugNotFound => AppError::SlugNotFound,
        err => AppError::Unexpected(anyhow::Error::new(err).context(context)),
    }
}
