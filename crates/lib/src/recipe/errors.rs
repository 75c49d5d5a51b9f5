//! Error types for the recipe store
use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Only the author of a recipe may change or delete it.
    #[error("User {user_id} is not the author of recipe {recipe_id}")]
    NotOwner { recipe_id: String, user_id: String },

    #[error("Unknown difficulty '{value}', expected Easy, Medium or Hard")]
    InvalidDifficulty { value: String },
}

impl RecipeError {
    /// Check if this error indicates permission was denied.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, RecipeError::NotOwner { .. })
    }
}

impl From<RecipeError> for crate::Error {
    fn from(err: RecipeError) -> Self {
        crate::Error::Recipe(err)
    }
}
