#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use linkcut::api::handlers::{health_handler, redirect_handler};
use linkcut::api::routes::api_routes;
use linkcut::application::services::UrlService;
use linkcut::domain::entities::ShortUrl;
use linkcut::domain::repositories::UrlStore;
use linkcut::infrastructure::persistence::MemoryStore;
use linkcut::state::AppState;
use linkcut::utils::slug_generator::FixedLenSlugger;

pub const SLUG_LEN: usize = 5;

/// Builds an application state over a fresh in-memory store.
///
/// Returns the store handle alongside so tests can seed and inspect it
/// directly.
pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let slugger = Arc::new(FixedLenSlugger::new(SLUG_LEN));
    let url_service = Arc::new(UrlService::new(store.clone(), slugger));

    (AppState::new(url_service), store)
}

/// Full route set under test, without the outer normalization wrapper.
pub fn test_app(state: AppState) -> Router {
    Router::new()
        .route("/{slug}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        .with_state(state)
}

pub async fn seed_entry(store: &MemoryStore, slug: &str, url: &str, hits: u64) {
    store
        .add(ShortUrl::new(url.to_string(), slug.to_string(), hits))
        .await
        .unwrap();
}

/// Polls the store until the slug's hit counter reaches `want`.
///
/// The counter update runs on a detached task, so tests have to wait for it
/// to land rather than assert immediately.
pub async fn wait_for_hits(store: &MemoryStore, slug: &str, want: u64) {
    for _ in 0..100 {
        if let Ok(entry) = store.get(slug).await {
            if entry.hits >= want {
                assert_eq!(entry.hits, want);
                return;
            }
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("hit counter for '{slug}' never reached {want}");
}
