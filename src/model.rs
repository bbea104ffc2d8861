use serde::Serialize;

use crate::normalize::slugify;

/// The currently active recipe category, carried across pages until a new
/// one is announced. The empty label means no category has been seen yet.
///
/// Two labels are equal when their slugs are equal, so OCR drift in casing,
/// accents or punctuation does not create spurious distinct categories.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct CategoryLabel(String);

impl CategoryLabel {
    pub fn new(label: impl Into<String>) -> Self {
        CategoryLabel(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn slug(&self) -> String {
        slugify(&self.0)
    }
}

impl PartialEq for CategoryLabel {
    fn eq(&self, other: &Self) -> bool {
        self.slug() == other.slug()
    }
}

impl Eq for CategoryLabel {}

impl std::fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One indexed recipe, as submitted to the search sink
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeRecord {
    /// Run-wide sequence number, starts at 1 and never resets per page
    pub recipe_id: u64,
    /// Category active when the recipe line was read (empty if none yet)
    pub category: CategoryLabel,
    /// Recipe name with the page token stripped
    pub name: String,
    /// Page number parsed from the leading token of the line
    pub page: u32,
}
