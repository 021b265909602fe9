//! Shared response types for handlers.
//!
//! - [`FeedResponse`] is the `{ "status": ... }` envelope of the JSON feed.
//! - [`found`] builds the `302 Found` redirects the HTML forms rely on.

use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use ideaboard_core::types::Timestamp;
use ideaboard_db::models::idea::{Comment, Idea};
use serde::Serialize;

/// Message returned when the feed has nothing to show.
pub const FEED_EMPTY_MSG: &str = "unable to retrieve destination";

/// Timestamp layout used in the feed, e.g. `2024-05-01 13:45:10.250000`.
///
/// The fraction is always six digits, including `.000000` on whole seconds,
/// so every feed timestamp has the same width and sorts as text. Sub-microsecond
/// precision is truncated.
const FEED_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Envelope for `GET /data/destination`.
///
/// Serializes as `{"status":"OK","destination":[...]}` or
/// `{"status":"error","msg":"..."}`. Both are sent with `200 OK`.
#[derive(Debug, Serialize)]
#[serde(tag = "status")]
pub enum FeedResponse {
    #[serde(rename = "OK")]
    Ok { destination: Vec<FeedIdea> },
    #[serde(rename = "error")]
    Error { msg: &'static str },
}

impl FeedResponse {
    /// Shape a feed from the queried ideas; no ideas means the error body.
    pub fn from_ideas(ideas: &[Idea]) -> Self {
        if ideas.is_empty() {
            return FeedResponse::Error {
                msg: FEED_EMPTY_MSG,
            };
        }
        FeedResponse::Ok {
            destination: ideas.iter().map(FeedIdea::from).collect(),
        }
    }
}

/// Public projection of an idea in the feed.
#[derive(Debug, Serialize)]
pub struct FeedIdea {
    pub creator: String,
    pub title: String,
    pub idea: String,
    pub timestamp: String,
    pub comments: Vec<FeedComment>,
}

/// Public projection of a comment in the feed.
#[derive(Debug, Serialize)]
pub struct FeedComment {
    pub name: String,
    pub comment: String,
    pub timestamp: String,
}

impl From<&Idea> for FeedIdea {
    fn from(idea: &Idea) -> Self {
        Self {
            creator: idea.creator.clone(),
            title: idea.title.clone(),
            idea: idea.idea.clone(),
            timestamp: feed_timestamp(&idea.created_at),
            comments: idea.comments.iter().map(FeedComment::from).collect(),
        }
    }
}

impl From<&Comment> for FeedComment {
    fn from(comment: &Comment) -> Self {
        Self {
            name: comment.name.clone(),
            comment: comment.comment.clone(),
            timestamp: feed_timestamp(&comment.created_at),
        }
    }
}

fn feed_timestamp(ts: &Timestamp) -> String {
    ts.format(FEED_TIMESTAMP_FORMAT).to_string()
}

/// `302 Found` pointing at `location`.
pub fn found(location: HeaderValue) -> Response {
    (StatusCode::FOUND, [(LOCATION, location)]).into_response()
}
