//! Handler for appending comments to an idea.
//!
//! Rejected submissions (missing fields, unknown idea) redirect back to the
//! referring page exactly like a successful post would, with no message.

use axum::extract::{Path, State};
use axum::http::header::REFERER;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::Response;
use axum::Form;
use ideaboard_core::idea::comment_fields;
use ideaboard_core::naming::idea_path;
use ideaboard_core::types::DbId;
use ideaboard_db::models::idea::Comment;
use ideaboard_db::repositories::IdeaRepo;

use crate::error::AppResult;
use crate::forms::CommentForm;
use crate::handlers::ideas::location;
use crate::response::found;
use crate::state::AppState;

/// POST /ideas/{idea_id}/comment
///
/// Append a comment and save the whole idea. The read-modify-write is not
/// guarded, so two concurrent comments on one idea can overwrite each other.
pub async fn add_comment(
    State(state): State<AppState>,
    Path(idea_id): Path<String>,
    headers: HeaderMap,
    Form(form): Form<CommentForm>,
) -> AppResult<Response> {
    let Some((name, comment)) = comment_fields(form.name, form.comment) else {
        tracing::debug!(idea_id = %idea_id, "Comment missing name or text, ignoring");
        return Ok(back(&headers));
    };

    let Ok(id) = idea_id.parse::<DbId>() else {
        tracing::debug!(idea_id = %idea_id, "Comment for malformed idea id, ignoring");
        return Ok(back(&headers));
    };

    let mut idea = match IdeaRepo::find_by_id(&state.pool, id).await {
        Ok(Some(idea)) => idea,
        Ok(None) => {
            tracing::debug!(idea_id = id, "Comment for unknown idea, ignoring");
            return Ok(back(&headers));
        }
        Err(e) => {
            tracing::warn!(error = %e, idea_id = id, "Idea lookup failed, ignoring comment");
            return Ok(back(&headers));
        }
    };

    idea.push_comment(Comment::new(name, comment));
    let idea = IdeaRepo::save(&state.pool, &idea).await?;

    tracing::info!(
        idea_id = idea.id,
        comment_count = idea.comments.len(),
        "Comment added"
    );

    Ok(found(location(&idea_path(&idea.slug))?))
}

/// Redirect to the referring page, or the index when there is none.
fn back(headers: &HeaderMap) -> Response {
    let target = headers
        .get(REFERER)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("/"));
    found(target)
}
