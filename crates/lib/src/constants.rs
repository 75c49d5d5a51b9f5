//! Constants used throughout the FlavorBook library.
//!
//! This module provides central definitions for the storage keys that make up the
//! persisted layout, and other fixed values shared between modules.

/// Storage key for the registered user list.
pub const USERS: &str = "users";

/// Storage key for the active session record.
pub const CURRENT_USER: &str = "currentUser";

/// Storage key for the recipe collection.
pub const RECIPES: &str = "recipes";

/// Storage key for the favorite recipe ids.
pub const FAVORITES: &str = "favorites";

/// Author id stamped on the built-in sample recipes.
pub const SAMPLE_AUTHOR_ID: &str = "sample";
