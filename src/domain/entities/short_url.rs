//! Shortened URL entity.

use serde::{Deserialize, Serialize};

/// A shortened URL mapping.
///
/// Represents the association between a slug and the original URL, together
/// with an approximate hit counter. The counter is only ever mutated by the
/// service layer; callers receive snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortUrl {
    pub url: String,
    pub slug: String,
    pub hits: u64,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(url: String, slug: String, hits: u64) -> Self {
        Self { url, slug, hits }
    }

    /// Returns a copy of this entry with the hit counter bumped by one.
    pub fn with_hit(self) -> Self {
        Self {
            hits: self.hits + 1,
            ..self
        }
    }
}

/// Input data for creating a new mapping.
///
/// When `slug` is `None` the service generates one. The hit counter of a
/// freshly created entry always starts at zero.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub url: String,
    pub slug: Option<String>,
}
