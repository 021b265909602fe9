//! The fixed category vocabulary offered on the submission form.
//!
//! Submitted categories are stored verbatim and never checked against this
//! list; it only drives the checkboxes and the category navigation.

/// Selectable category names, in display order.
pub const CATEGORIES: [&str; 9] = [
    "St. Petersburg",
    "Johannesburg",
    "Salzburg",
    "Pittsburgh",
    "Spitzberg",
    "Vicksburg",
    "Harrisburg",
    "Hamburg",
    "Brandenburg",
];

/// Human-readable name for a category taken from a URL path segment.
///
/// Underscores stand in for spaces in hand-written category URLs.
pub fn display_name(path_segment: &str) -> String {
    path_segment.replace('_', " ")
}
