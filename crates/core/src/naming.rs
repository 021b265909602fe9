//! Slug generation for idea permalinks.
//!
//! Produces deterministic ASCII tokens from free text. Slugs are lookup
//! keys, not identifiers: two ideas with the same title and creator share one.

/// Characters that separate words before transliteration.
const WORD_SEPARATORS: &[char] = &[
    '\t', ' ', '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '-', '/', '<', '=', '>', '?',
    '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', ',', '.',
];

/// Joins the surviving words of a slug.
pub const SLUG_DELIMITER: &str = "-";

/// Generate an ASCII-only slug from arbitrary text.
///
/// The text is lowercased and split on [`WORD_SEPARATORS`]; each word is
/// transliterated to ASCII and anything that is still not a letter or digit
/// breaks the word further. Empty fragments are dropped.
///
/// # Examples
///
/// ```
/// use ideaboard_core::naming::slugify;
///
/// assert_eq!(slugify("St. Petersburg anon"), "st-petersburg-anon");
/// assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
/// assert_eq!(slugify(""), "");
/// ```
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .split(WORD_SEPARATORS)
        .map(::slug::slugify)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(SLUG_DELIMITER)
}

/// Slug for a new idea, derived from its title and creator.
pub fn idea_slug(title: &str, creator: &str) -> String {
    slugify(&format!("{title} {creator}"))
}

/// Public URL of an idea's detail page.
pub fn idea_path(slug: &str) -> String {
    format!("/ideas/{slug}")
}
