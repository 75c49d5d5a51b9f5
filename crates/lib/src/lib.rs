//!
//! FlavorBook: the data and session core of a recipe sharing application.
//! This library provides the state managers a view layer builds on.
//!
//! ## Core Concepts
//!
//! * **Storage (`backend::Storage`)**: A pluggable key-value port. Every record is
//!   stored as a whole JSON document under a fixed key (see [`constants`]).
//! * **Session Manager (`user::SessionManager`)**: Owns the authenticated identity,
//!   signs users up, checks credentials and persists the active session.
//! * **Recipe Store (`recipe::RecipeStore`)**: Owns the recipe collection and the
//!   favorites set, seeds sample data on first run and answers list queries.
//! * **FlavorBook (`app::FlavorBook`)**: Opens both managers over one storage and
//!   provides the session-aware operations (authoring, owner checks, profile).
//! * **Clock (`clock::Clock`)**: Injectable time source for creation timestamps.
//!
//! ```
//! use std::sync::Arc;
//! use flavorbook::{FlavorBook, backend::InMemory};
//!
//! let mut book = FlavorBook::open(Arc::new(InMemory::new()))?;
//! assert_eq!(book.recipes().list_recipes().len(), 2);
//!
//! book.session_mut().signup("ada@example.com", "hunter2", "Ada")?;
//! assert!(book.session().is_logged_in());
//! # Ok::<(), flavorbook::Error>(())
//! ```

pub mod app;
pub mod backend;
pub mod clock;
pub mod constants;
pub mod events;
pub mod recipe;
pub mod user;

pub use app::{FlavorBook, ProfileSummary};
#[cfg(any(test, feature = "testing"))]
pub use clock::FixedClock;
pub use clock::{Clock, SystemClock};
pub use recipe::{Difficulty, NewRecipe, Recipe, RecipePatch, RecipeQuery, RecipeStore};
pub use user::{SessionManager, SessionUser};

/// Result type used throughout the FlavorBook library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the FlavorBook library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structured storage errors from the backend module
    #[error(transparent)]
    Storage(backend::StorageError),

    /// Structured session and account errors from the user module
    #[error(transparent)]
    User(user::UserError),

    /// Structured recipe errors from the recipe module
    #[error(transparent)]
    Recipe(recipe::RecipeError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Storage(_) => "backend",
            Error::User(_) => "user",
            Error::Recipe(_) => "recipe",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Storage(storage_err) => storage_err.is_not_found(),
            Error::Io(io_err) => io_err.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if this error is authentication-related.
    ///
    /// Covers rejected credentials and operations that need a session.
    pub fn is_authentication_error(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_authentication_error(),
            _ => false,
        }
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_conflict(),
            _ => false,
        }
    }

    /// Check if this error indicates permission was denied.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Error::Recipe(recipe_err) => recipe_err.is_permission_denied(),
            _ => false,
        }
    }

    /// Check if this error is storage-related.
    pub fn is_storage_error(&self) -> bool {
        matches!(self, Error::Storage(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Storage(storage_err) => storage_err.is_io_error(),
            _ => false,
        }
    }
}
