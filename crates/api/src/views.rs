//! HTML rendering.
//!
//! Templates are compiled into the binary and parsed once at startup. Each
//! page has a typed context struct so handlers cannot forget a variable.

use axum::http::StatusCode;
use axum::response::Html;
use ideaboard_db::models::idea::Idea;
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::AppResult;

/// Static page served for every not-found outcome.
pub const NOT_FOUND_PAGE: &str = include_str!("../templates/404.html");

const TEMPLATES: [(&str, &str); 5] = [
    ("base.html", include_str!("../templates/base.html")),
    ("_idea_list.html", include_str!("../templates/_idea_list.html")),
    ("main.html", include_str!("../templates/main.html")),
    (
        "category_listing.html",
        include_str!("../templates/category_listing.html"),
    ),
    ("idea_entry.html", include_str!("../templates/idea_entry.html")),
];

/// Context for `main.html`.
#[derive(Debug, Serialize)]
pub struct IndexPage<'a> {
    pub ideas: &'a [Idea],
    pub categories: &'a [&'a str],
}

/// The category a listing page is filtered by.
#[derive(Debug, Serialize)]
pub struct CurrentCategory {
    /// The path segment as requested.
    pub slug: String,
    pub name: String,
}

/// Context for `category_listing.html`.
#[derive(Debug, Serialize)]
pub struct CategoryPage<'a> {
    pub current_category: CurrentCategory,
    pub ideas: &'a [Idea],
    pub categories: &'a [&'a str],
}

/// Context for `idea_entry.html`.
#[derive(Debug, Serialize)]
pub struct IdeaPage<'a> {
    pub idea: &'a Idea,
    pub categories: &'a [&'a str],
}

/// Parsed template set shared by all handlers.
pub struct Views {
    tera: Tera,
}

impl Views {
    /// Parse the embedded templates.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        Ok(Self { tera })
    }

    /// Render `template` with a serializable page context.
    pub fn render<T: Serialize>(&self, template: &str, page: &T) -> AppResult<Html<String>> {
        let context = Context::from_serialize(page)?;
        let html = self.tera.render(template, &context)?;
        Ok(Html(html))
    }
}

/// Body for an error response with the given status.
pub fn error_page(status: StatusCode) -> Html<String> {
    if status == StatusCode::NOT_FOUND {
        return Html(NOT_FOUND_PAGE.to_string());
    }

    let reason = status.canonical_reason().unwrap_or("Error");
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\">\
         <title>{reason} | Ideaboard</title></head>\n\
         <body><h1>{code} {reason}</h1><p><a href=\"/\">Back to all ideas</a></p></body>\n</html>\n",
        code = status.as_u16(),
    ))
}
