//! Handlers for submitting and browsing ideas.
//!
//! Every page is rendered from `state.views`; lookups that fail in the
//! store are reported as 404 rather than 500.

use axum::extract::{Path, State};
use axum::http::HeaderValue;
use axum::response::{Html, Response};
use axum::Form;
use ideaboard_core::categories::{self, CATEGORIES};
use ideaboard_core::error::CoreError;
use ideaboard_core::naming::idea_path;
use ideaboard_db::repositories::IdeaRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::forms::IdeaForm;
use crate::response::found;
use crate::state::AppState;
use crate::views::{CategoryPage, CurrentCategory, IdeaPage, IndexPage};

/// GET /
///
/// All ideas plus the category vocabulary for the submission form.
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let ideas = IdeaRepo::list_all(&state.pool).await?;
    tracing::debug!(idea_count = ideas.len(), "Rendering index");

    state.views.render(
        "main.html",
        &IndexPage {
            ideas: &ideas,
            categories: &CATEGORIES,
        },
    )
}

/// POST /
///
/// Create an idea from the submission form and redirect to its page.
/// Categories are stored exactly as submitted.
pub async fn create(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Response> {
    let input = IdeaForm::from_pairs(pairs).into_create();
    input.validate()?;

    let idea = IdeaRepo::create(&state.pool, &input).await?;

    tracing::info!(idea_id = idea.id, slug = %idea.slug, "Idea created");

    Ok(found(location(&idea_path(&idea.slug))?))
}

/// GET /category/{cat_name}
///
/// Ideas tagged with exactly `cat_name`. An empty match still renders the
/// page; only a failing query becomes a 404.
pub async fn by_category(
    State(state): State<AppState>,
    Path(cat_name): Path<String>,
) -> AppResult<Html<String>> {
    let ideas = IdeaRepo::list_by_category(&state.pool, &cat_name)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, category = %cat_name, "Category lookup failed");
            not_found("Category", &cat_name)
        })?;

    let name = categories::display_name(&cat_name);
    state.views.render(
        "category_listing.html",
        &CategoryPage {
            current_category: CurrentCategory {
                slug: cat_name,
                name,
            },
            ideas: &ideas,
            categories: &CATEGORIES,
        },
    )
}

/// GET /ideas/{idea_slug}
///
/// The first idea carrying this slug.
pub async fn detail(
    State(state): State<AppState>,
    Path(idea_slug): Path<String>,
) -> AppResult<Html<String>> {
    let idea = IdeaRepo::find_by_slug(&state.pool, &idea_slug)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, slug = %idea_slug, "Idea lookup failed");
            not_found("Idea", &idea_slug)
        })?
        .ok_or_else(|| not_found("Idea", &idea_slug))?;

    state.views.render(
        "idea_entry.html",
        &IdeaPage {
            idea: &idea,
            categories: &CATEGORIES,
        },
    )
}

fn not_found(entity: &'static str, key: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity,
        key: key.to_string(),
    })
}

/// Header value for a site path. Slugs are ASCII, so this only fails on a
/// malformed path.
pub(crate) fn location(path: &str) -> AppResult<HeaderValue> {
    HeaderValue::from_str(path).map_err(|e| {
        AppError::Core(CoreError::Validation(format!(
            "Invalid redirect target '{path}': {e}"
        )))
    })
}
