//! Integration tests for the idea repository.
//!
//! Exercises the repository layer against a real database:
//! - Create and look up by id, slug, and category
//! - Oldest-first listing with a limit
//! - Whole-document saves for comment appends
//! - Check constraints backing the required fields

use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use ideaboard_db::models::idea::{Comment, CreateIdea};
use ideaboard_db::repositories::IdeaRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_idea(title: &str, creator: &str, categories: &[&str]) -> CreateIdea {
    CreateIdea::new(
        Some(creator.to_string()),
        Some(title.to_string()),
        Some(format!("{title} described")),
        Some("40.7".to_string()),
        Some("-73.9".to_string()),
        categories.iter().map(|c| c.to_string()).collect(),
    )
}

// ---------------------------------------------------------------------------
// Create / lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find(pool: PgPool) {
    let created = IdeaRepo::create(&pool, &new_idea("Ferry", "Ada", &["Hamburg"]))
        .await
        .unwrap();

    assert_eq!(created.slug, "ferry-ada");
    assert!(created.comments.is_empty());

    let by_id = IdeaRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(by_id.title, "Ferry");
    assert_eq!(by_id.categories, vec!["Hamburg".to_string()]);

    let by_slug = IdeaRepo::find_by_slug(&pool, "ferry-ada").await.unwrap().unwrap();
    assert_eq!(by_slug.id, created.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_lookups_return_none(pool: PgPool) {
    assert_matches!(IdeaRepo::find_by_id(&pool, 999_999).await, Ok(None));
    assert_matches!(IdeaRepo::find_by_slug(&pool, "nothing-here").await, Ok(None));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_slug_resolves_to_first(pool: PgPool) {
    let first = IdeaRepo::create(&pool, &new_idea("Same", "Bo", &[])).await.unwrap();
    let second = IdeaRepo::create(&pool, &new_idea("Same", "Bo", &[])).await.unwrap();
    assert_eq!(first.slug, second.slug);

    let found = IdeaRepo::find_by_slug(&pool, &first.slug).await.unwrap().unwrap();
    assert_eq!(found.id, first.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_category_is_exact_match(pool: PgPool) {
    IdeaRepo::create(&pool, &new_idea("A", "x", &["Hamburg", "Salzburg"]))
        .await
        .unwrap();
    IdeaRepo::create(&pool, &new_idea("B", "x", &["Salzburg"])).await.unwrap();
    IdeaRepo::create(&pool, &new_idea("C", "x", &["hamburg"])).await.unwrap();

    let hamburg = IdeaRepo::list_by_category(&pool, "Hamburg").await.unwrap();
    assert_eq!(hamburg.len(), 1);
    assert_eq!(hamburg[0].title, "A");

    let salzburg = IdeaRepo::list_by_category(&pool, "Salzburg").await.unwrap();
    assert_eq!(salzburg.len(), 2);

    let none = IdeaRepo::list_by_category(&pool, "Atlantis").await.unwrap();
    assert!(none.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_all_returns_every_idea(pool: PgPool) {
    for title in ["One", "Two", "Three"] {
        IdeaRepo::create(&pool, &new_idea(title, "x", &[])).await.unwrap();
    }

    let all = IdeaRepo::list_all(&pool).await.unwrap();
    let titles: Vec<&str> = all.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["One", "Two", "Three"]);
}

// ---------------------------------------------------------------------------
// Oldest-first listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_oldest_orders_by_creation_time(pool: PgPool) {
    let base = Utc::now() - Duration::hours(1);

    // Insert newest first so insertion order disagrees with creation time.
    for minutes in (0..12).rev() {
        let mut input = new_idea(&format!("Idea {minutes}"), "x", &[]);
        input.created_at = base + Duration::minutes(minutes);
        IdeaRepo::create(&pool, &input).await.unwrap();
    }

    let oldest = IdeaRepo::list_oldest(&pool, 10).await.unwrap();
    assert_eq!(oldest.len(), 10);
    assert_eq!(oldest[0].title, "Idea 0");
    assert_eq!(oldest[9].title, "Idea 9");
    assert!(oldest.windows(2).all(|w| w[0].created_at <= w[1].created_at));
}

// ---------------------------------------------------------------------------
// Whole-document save
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_save_appends_comments_in_order(pool: PgPool) {
    let mut idea = IdeaRepo::create(&pool, &new_idea("Talk", "x", &[])).await.unwrap();

    idea.push_comment(Comment::new("a".into(), "first".into()));
    let idea = IdeaRepo::save(&pool, &idea).await.unwrap();
    let mut idea = IdeaRepo::find_by_id(&pool, idea.id).await.unwrap().unwrap();

    idea.push_comment(Comment::new("b".into(), "second".into()));
    IdeaRepo::save(&pool, &idea).await.unwrap();

    let stored = IdeaRepo::find_by_id(&pool, idea.id).await.unwrap().unwrap();
    let bodies: Vec<&str> = stored.comments.iter().map(|c| c.comment.as_str()).collect();
    assert_eq!(bodies, ["first", "second"]);
    assert_eq!(stored.categories, idea.categories);
}

// ---------------------------------------------------------------------------
// Required fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_idea_text_violates_check(pool: PgPool) {
    let mut input = new_idea("Blank", "x", &[]);
    input.idea = String::new();

    let err = IdeaRepo::create(&pool, &input).await.unwrap_err();
    assert_matches!(err, sqlx::Error::Database(ref db) if db.code().as_deref() == Some("23514"));

    assert!(IdeaRepo::list_all(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_overlong_creator_violates_check(pool: PgPool) {
    let input = new_idea("Long", &"c".repeat(121), &[]);

    let err = IdeaRepo::create(&pool, &input).await.unwrap_err();
    assert_matches!(err, sqlx::Error::Database(_));
}
