//! Form payloads accepted by the HTML endpoints.
//!
//! The idea form repeats the `categories` key once per checked box, which
//! a plain struct cannot capture, so it is extracted as raw key/value pairs
//! and folded into [`IdeaForm`].

use ideaboard_db::models::idea::CreateIdea;
use serde::Deserialize;

/// Fields submitted from the index page form. Absent fields stay `None`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IdeaForm {
    pub creator: Option<String>,
    pub title: Option<String>,
    pub idea: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    /// Every submitted `categories` value, in submission order.
    pub categories: Vec<String>,
}

impl IdeaForm {
    /// Fold url-decoded form pairs into a form. For single-valued fields the
    /// first occurrence wins; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "creator" => &mut form.creator,
                "title" => &mut form.title,
                "idea" => &mut form.idea,
                "latitude" => &mut form.latitude,
                "longitude" => &mut form.longitude,
                "categories" => {
                    form.categories.push(value);
                    continue;
                }
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        form
    }

    /// Build the insert DTO, applying defaults and deriving the slug.
    pub fn into_create(self) -> CreateIdea {
        CreateIdea::new(
            self.creator,
            self.title,
            self.idea,
            self.latitude,
            self.longitude,
            self.categories,
        )
    }
}

/// Fields submitted from an idea's comment form.
#[derive(Debug, Deserialize)]
pub struct CommentForm {
    pub name: Option<String>,
    pub comment: Option<String>,
}
