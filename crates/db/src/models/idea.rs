//! Idea and embedded comment models and DTOs.

use chrono::Utc;
use ideaboard_core::idea::{self, MAX_SHORT_TEXT_LENGTH};
use ideaboard_core::naming::idea_slug;
use ideaboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::{Validate, ValidationError};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `ideas` table. Comments are stored inline as a JSONB array.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Idea {
    pub id: DbId,
    pub creator: String,
    pub title: String,
    pub slug: String,
    pub idea: String,
    pub latitude: String,
    pub longitude: String,
    pub categories: Vec<String>,
    pub comments: Json<Vec<Comment>>,
    pub created_at: Timestamp,
}

/// A comment embedded in an idea. Has no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub name: String,
    pub comment: String,
    pub created_at: Timestamp,
}

impl Comment {
    /// Build a comment stamped with the current time.
    pub fn new(name: String, comment: String) -> Self {
        Self {
            name,
            comment,
            created_at: Utc::now(),
        }
    }
}

impl Idea {
    /// Append a comment to the in-memory document. Persist with `IdeaRepo::save`.
    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.0.push(comment);
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for inserting a new idea.
///
/// Built from the submission form by [`CreateIdea::new`], which fills in
/// defaults, derives the slug, and stamps the creation time.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateIdea {
    #[validate(length(min = 1, max = MAX_SHORT_TEXT_LENGTH))]
    pub creator: String,
    #[validate(length(min = 1, max = MAX_SHORT_TEXT_LENGTH))]
    pub title: String,
    pub slug: String,
    #[validate(length(min = 1))]
    pub idea: String,
    #[validate(length(min = 1, max = MAX_SHORT_TEXT_LENGTH))]
    pub latitude: String,
    #[validate(length(min = 1, max = MAX_SHORT_TEXT_LENGTH))]
    pub longitude: String,
    #[validate(custom(function = "check_categories"))]
    pub categories: Vec<String>,
    pub created_at: Timestamp,
}

impl CreateIdea {
    /// Assemble an idea from raw form values.
    ///
    /// Missing `creator` and `title` fall back to their documented defaults;
    /// every other missing field is recorded as empty and fails validation.
    pub fn new(
        creator: Option<String>,
        title: Option<String>,
        idea_text: Option<String>,
        latitude: Option<String>,
        longitude: Option<String>,
        categories: Vec<String>,
    ) -> Self {
        let creator = idea::or_default(creator, idea::DEFAULT_CREATOR);
        let title = idea::or_default(title, idea::DEFAULT_TITLE);
        let slug = idea_slug(&title, &creator);

        Self {
            creator,
            title,
            slug,
            idea: idea_text.unwrap_or_default(),
            latitude: latitude.unwrap_or_default(),
            longitude: longitude.unwrap_or_default(),
            categories,
            created_at: Utc::now(),
        }
    }
}

fn check_categories(categories: &[String]) -> Result<(), ValidationError> {
    idea::validate_categories(categories).map_err(|msg| {
        let mut err = ValidationError::new("category_length");
        err.message = Some(msg.into());
        err
    })
}
