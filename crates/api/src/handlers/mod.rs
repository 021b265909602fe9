//! HTTP handlers for the idea board.

pub mod comments;
pub mod feed;
pub mod ideas;

use axum::http::StatusCode;
use axum::response::Html;

/// Fallback for unmatched routes: the static 404 page.
pub async fn not_found() -> (StatusCode, Html<&'static str>) {
    (StatusCode::NOT_FOUND, Html(crate::views::NOT_FOUND_PAGE))
}
