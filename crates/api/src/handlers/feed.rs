use axum::extract::State;
use axum::Json;
use ideaboard_core::idea::FEED_LIMIT;
use ideaboard_db::repositories::IdeaRepo;

use crate::error::AppResult;
use crate::response::FeedResponse;
use crate::state::AppState;

/// GET /data/destination
///
/// The oldest ideas with their comments, or an error body when there are none.
/// Both outcomes are `200 OK`.
pub async fn destination(State(state): State<AppState>) -> AppResult<Json<FeedResponse>> {
    let ideas = IdeaRepo::list_oldest(&state.pool, FEED_LIMIT).await?;
    tracing::debug!(count = ideas.len(), "Serving destination feed");

    Ok(Json(FeedResponse::from_ideas(&ideas)))
}
