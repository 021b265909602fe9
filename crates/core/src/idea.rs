//! Idea and comment field rules.
//!
//! Defaults applied to missing form fields, the stored-field length limits,
//! and the presence check for comments.

/// Creator recorded when the form leaves it out.
pub const DEFAULT_CREATOR: &str = "anonymous";

/// Title recorded when the form leaves it out.
pub const DEFAULT_TITLE: &str = "no title";

/// Maximum length of `creator`, `title`, `latitude` and `longitude`.
pub const MAX_SHORT_TEXT_LENGTH: u64 = 120;

/// Maximum length of a single category tag.
pub const MAX_CATEGORY_LENGTH: usize = 30;

/// Number of ideas returned by the JSON feed.
pub const FEED_LIMIT: i64 = 10;

/// Use `value` unless it is missing or empty.
pub fn or_default(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}

/// Return the comment author and body when both are present and non-empty.
///
/// `None` means the submission is dropped without touching the idea.
pub fn comment_fields(
    name: Option<String>,
    comment: Option<String>,
) -> Option<(String, String)> {
    match (name, comment) {
        (Some(name), Some(comment)) if !name.is_empty() && !comment.is_empty() => {
            Some((name, comment))
        }
        _ => None,
    }
}

/// Check that no category tag exceeds [`MAX_CATEGORY_LENGTH`] characters.
pub fn validate_categories(categories: &[String]) -> Result<(), String> {
    match categories
        .iter()
        .find(|c| c.chars().count() > MAX_CATEGORY_LENGTH)
    {
        Some(c) => Err(format!(
            "Category '{c}' exceeds {MAX_CATEGORY_LENGTH} characters"
        )),
        None => Ok(()),
    }
}
