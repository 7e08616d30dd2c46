//! API route configuration.

use crate::api::handlers::{
    add_url_handler, delete_url_handler, get_url_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// All management routes mounted under `/api`.
///
/// # Endpoints
///
/// - `PUT    /urls`         - Store a mapping (slug optional)
/// - `GET    /urls/{slug}`  - Fetch a mapping as JSON
/// - `DELETE /urls/{slug}`  - Remove a mapping
/// - `POST   /shorten`      - Create-or-fetch by URL value
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/urls", put(add_url_handler))
        .route(
            "/urls/{slug}",
            get(get_url_handler).delete(delete_url_handler),
        )
        .route("/shorten", post(shorten_handler))
}
