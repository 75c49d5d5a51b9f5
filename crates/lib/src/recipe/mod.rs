//! Recipes and favorites
//!
//! The [`RecipeStore`] owns the recipe collection and the favorites list. It
//! seeds sample recipes into empty storage and answers list, search and
//! lookup queries from memory.

pub mod errors;
pub mod query;
pub mod sample;
pub mod store;
pub mod types;

pub use errors::RecipeError;
pub use query::RecipeQuery;
pub use store::RecipeStore;
pub use types::*;
