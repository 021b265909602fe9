//! Repository for the `ideas` table.
//!
//! An idea and its comments are one row, so every write is a single
//! all-or-nothing statement.

use ideaboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::idea::{CreateIdea, Idea};

/// Column list for `ideas` queries.
const IDEA_COLUMNS: &str = "\
    id, creator, title, slug, idea, latitude, longitude, \
    categories, comments, created_at";

/// Provides CRUD operations for ideas.
pub struct IdeaRepo;

impl IdeaRepo {
    /// Insert a new idea with no comments, returning the stored row.
    pub async fn create(pool: &PgPool, input: &CreateIdea) -> Result<Idea, sqlx::Error> {
        let query = format!(
            "INSERT INTO ideas \
                (creator, title, slug, idea, latitude, longitude, categories, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {IDEA_COLUMNS}"
        );
        sqlx::query_as::<_, Idea>(&query)
            .bind(&input.creator)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.idea)
            .bind(&input.latitude)
            .bind(&input.longitude)
            .bind(&input.categories)
            .bind(input.created_at)
            .fetch_one(pool)
            .await
    }

    /// Find an idea by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Idea>, sqlx::Error> {
        let query = format!("SELECT {IDEA_COLUMNS} FROM ideas WHERE id = $1");
        sqlx::query_as::<_, Idea>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the first idea (lowest ID) carrying the given slug.
    ///
    /// Slugs are not unique; later ideas with a colliding slug are unreachable
    /// through this lookup.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Idea>, sqlx::Error> {
        let query = format!(
            "SELECT {IDEA_COLUMNS} FROM ideas WHERE slug = $1 ORDER BY id LIMIT 1"
        );
        sqlx::query_as::<_, Idea>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List every idea in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Idea>, sqlx::Error> {
        let query = format!("SELECT {IDEA_COLUMNS} FROM ideas ORDER BY id");
        sqlx::query_as::<_, Idea>(&query).fetch_all(pool).await
    }

    /// List ideas tagged with exactly this category.
    pub async fn list_by_category(pool: &PgPool, category: &str) -> Result<Vec<Idea>, sqlx::Error> {
        let query = format!(
            "SELECT {IDEA_COLUMNS} FROM ideas WHERE $1 = ANY(categories) ORDER BY id"
        );
        sqlx::query_as::<_, Idea>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// List the oldest ideas first, at most `limit` of them.
    pub async fn list_oldest(pool: &PgPool, limit: i64) -> Result<Vec<Idea>, sqlx::Error> {
        let query = format!(
            "SELECT {IDEA_COLUMNS} FROM ideas ORDER BY created_at ASC, id ASC LIMIT $1"
        );
        sqlx::query_as::<_, Idea>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Write the whole document back, overwriting every mutable column.
    ///
    /// There is no version check: two saves racing on the same idea are
    /// last-write-wins, so a concurrent comment can be lost.
    pub async fn save(pool: &PgPool, idea: &Idea) -> Result<Idea, sqlx::Error> {
        let query = format!(
            "UPDATE ideas SET \
                creator = $2, title = $3, slug = $4, idea = $5, \
                latitude = $6, longitude = $7, categories = $8, comments = $9 \
             WHERE id = $1 \
             RETURNING {IDEA_COLUMNS}"
        );
        sqlx::query_as::<_, Idea>(&query)
            .bind(idea.id)
            .bind(&idea.creator)
            .bind(&idea.title)
            .bind(&idea.slug)
            .bind(&idea.idea)
            .bind(&idea.latitude)
            .bind(&idea.longitude)
            .bind(&idea.categories)
            .bind(&idea.comments)
            .fetch_one(pool)
            .await
    }
}
