pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the site route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                  list ideas (GET), submit idea (POST)
/// /category/{cat_name}               ideas tagged with a category
/// /ideas/{idea_slug}                 idea detail
/// /ideas/{idea_id}/comment           append a comment (POST)
/// /data/destination                  JSON feed, oldest ideas first
/// ```
pub fn site_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::ideas::index).post(handlers::ideas::create))
        .route("/category/{cat_name}", get(handlers::ideas::by_category))
        .route("/ideas/{idea_slug}", get(handlers::ideas::detail))
        .route("/ideas/{idea_id}/comment", post(handlers::comments::add_comment))
        .route("/data/destination", get(handlers::feed::destination))
}
