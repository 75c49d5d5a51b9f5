//! Recipe records and their inputs

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::RecipeError;
use crate::user::SessionUser;

/// Image used when a recipe is created without one.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.pexels.com/photos/1640777/pexels-photo-1640777.jpeg";

/// How demanding a recipe is to cook.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = RecipeError;

    /// Parses a difficulty name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RecipeError::InvalidDifficulty {
                value: s.to_string(),
            })
    }
}

/// A stored recipe, as kept in the `recipes` record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Ingredient lines, in order, without blank entries
    pub ingredients: Vec<String>,
    /// Instruction steps, in order, without blank entries
    pub instructions: Vec<String>,
    /// Cooking time in minutes. Any JSON number is kept as stored, including
    /// negative and fractional values.
    pub cooking_time: Number,
    /// Same representation as `cooking_time`
    pub servings: Number,
    pub difficulty: Difficulty,
    pub category: String,
    pub image_url: String,
    /// Id of the user who created the recipe. Never changes.
    pub author_id: String,
    /// Display name of the author when the recipe was created. Never changes.
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Builds a stored record from caller input, filtering blank list entries.
    pub(crate) fn from_new(
        id: String,
        data: NewRecipe,
        author: &SessionUser,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: data.title,
            description: data.description,
            ingredients: without_blank_entries(data.ingredients),
            instructions: without_blank_entries(data.instructions),
            cooking_time: data.cooking_time,
            servings: data.servings,
            difficulty: data.difficulty,
            category: data.category,
            image_url: data.image_url,
            author_id: author.id.clone(),
            author_name: author.name.clone(),
            created_at,
        }
    }

    /// Whether `user` created this recipe.
    pub fn is_owned_by(&self, user: &SessionUser) -> bool {
        self.author_id == user.id
    }

    /// Shallow merge: every field present in `patch` replaces the stored one.
    pub(crate) fn apply(&mut self, patch: RecipePatch) {
        let RecipePatch {
            title,
            description,
            ingredients,
            instructions,
            cooking_time,
            servings,
            difficulty,
            category,
            image_url,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(ingredients) = ingredients {
            self.ingredients = without_blank_entries(ingredients);
        }
        if let Some(instructions) = instructions {
            self.instructions = without_blank_entries(instructions);
        }
        if let Some(cooking_time) = cooking_time {
            self.cooking_time = cooking_time;
        }
        if let Some(servings) = servings {
            self.servings = servings;
        }
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(image_url) = image_url {
            self.image_url = image_url;
        }
    }
}

/// Caller-supplied fields of a new recipe.
///
/// Id, creation time and author are assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewRecipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub cooking_time: Number,
    pub servings: Number,
    pub difficulty: Difficulty,
    pub category: String,
    pub image_url: String,
}

impl Default for NewRecipe {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            cooking_time: 30.into(),
            servings: 4.into(),
            difficulty: Difficulty::Easy,
            category: String::new(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
        }
    }
}

/// Partial update of a recipe. `None` fields keep their stored value.
///
/// Id, author and creation time are not part of a patch, so they cannot change.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
    pub cooking_time: Option<Number>,
    pub servings: Option<Number>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

impl RecipePatch {
    /// `true` if the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        *self == RecipePatch::default()
    }
}

/// Recipe collection changes reported to subscribers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecipeEvent {
    /// The sample recipes were written to empty storage.
    Seeded,
    Added(Recipe),
    Updated(Recipe),
    Deleted { id: String },
    FavoriteToggled { id: String, favorite: bool },
}

/// Drops entries that are empty or whitespace-only, keeping the rest untouched.
fn without_blank_entries(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .filter(|entry| !entry.trim().is_empty())
        .collect()
}
