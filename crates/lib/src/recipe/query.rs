//! Filtering of the recipe list
//!
//! A [`RecipeQuery`] combines a free-text search with optional category and
//! difficulty filters. All criteria must hold; an empty query matches every
//! recipe.

use super::{Difficulty, Recipe};

/// Search and filter criteria for listing recipes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecipeQuery {
    /// Case-insensitive substring of the title or the description
    pub text: String,
    /// Exact category name
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
}

impl RecipeQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Whether `recipe` satisfies every criterion.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_text(recipe)
            && self
                .category
                .as_deref()
                .is_none_or(|category| recipe.category == category)
            && self
                .difficulty
                .is_none_or(|difficulty| recipe.difficulty == difficulty)
    }

    fn matches_text(&self, recipe: &Recipe) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();
        recipe.title.to_lowercase().contains(&needle)
            || recipe.description.to_lowercase().contains(&needle)
    }
}
