//! Application facade
//!
//! [`FlavorBook`] opens the session manager and the recipe store over one
//! storage and adds the operations that need both: authoring recipes as the
//! logged in user, owner-checked edits and deletes, and the profile summary.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    Clock, Result, SystemClock,
    backend::Storage,
    recipe::{NewRecipe, Recipe, RecipeError, RecipePatch, RecipeStore},
    user::{SessionManager, SessionUser, UserError},
};

/// What the profile view shows about the logged in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub user: SessionUser,
    /// Recipes authored by the user
    pub recipes_created: usize,
    /// Favorites that still resolve to a recipe
    pub favorite_count: usize,
    pub member_since: Option<DateTime<Utc>>,
}

/// Both state managers over a shared storage.
///
/// The managers remain reachable through [`FlavorBook::session_mut`] and
/// [`FlavorBook::recipes_mut`]; their operations do not check who is logged
/// in. The `*_as_owner` operations here do.
#[derive(Debug)]
pub struct FlavorBook {
    session: SessionManager,
    recipes: RecipeStore,
}

impl FlavorBook {
    /// Restores the session and initializes the recipe store from `storage`.
    pub fn open(storage: Arc<dyn Storage>) -> Result<Self> {
        Self::open_with_clock(storage, Arc::new(SystemClock))
    }

    /// Like [`FlavorBook::open`], taking timestamps from `clock`.
    pub fn open_with_clock(storage: Arc<dyn Storage>, clock: Arc<dyn Clock>) -> Result<Self> {
        let mut session = SessionManager::with_clock(storage.clone(), clock.clone());
        session.restore_session()?;

        let mut recipes = RecipeStore::with_clock(storage, clock);
        recipes.initialize()?;

        debug!(
            logged_in = session.is_logged_in(),
            recipes = recipes.list_recipes().len(),
            "Opened FlavorBook"
        );
        Ok(Self { session, recipes })
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionManager {
        &mut self.session
    }

    pub fn recipes(&self) -> &RecipeStore {
        &self.recipes
    }

    pub fn recipes_mut(&mut self) -> &mut RecipeStore {
        &mut self.recipes
    }

    /// Adds a recipe authored by the logged in user.
    ///
    /// # Errors
    /// [`UserError::NotLoggedIn`] without a session.
    pub fn add_recipe(&mut self, data: NewRecipe) -> Result<Recipe> {
        let user = self.require_user("add recipe")?.clone();
        self.recipes.add_recipe(data, &user)
    }

    /// Whether the logged in user may edit or delete `recipe`.
    pub fn can_modify(&self, recipe: &Recipe) -> bool {
        self.session
            .current_user()
            .is_some_and(|user| recipe.is_owned_by(user))
    }

    /// Updates a recipe the logged in user authored.
    ///
    /// Returns `Ok(None)` for an unknown id.
    ///
    /// # Errors
    /// [`UserError::NotLoggedIn`] without a session, [`RecipeError::NotOwner`]
    /// if someone else wrote the recipe.
    pub fn update_recipe_as_owner(
        &mut self,
        id: &str,
        patch: RecipePatch,
    ) -> Result<Option<Recipe>> {
        if !self.check_owner(id, "update recipe")? {
            return Ok(None);
        }
        self.recipes.update_recipe(id, patch)
    }

    /// Deletes a recipe the logged in user authored.
    ///
    /// Returns `Ok(false)` for an unknown id. Errors as for
    /// [`FlavorBook::update_recipe_as_owner`].
    pub fn delete_recipe_as_owner(&mut self, id: &str) -> Result<bool> {
        if !self.check_owner(id, "delete recipe")? {
            return Ok(false);
        }
        self.recipes.delete_recipe(id)
    }

    /// Toggles a favorite on behalf of the logged in user.
    ///
    /// The favorites list itself is shared by every user of this storage.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        self.require_user("toggle favorite")?;
        self.recipes.toggle_favorite(id)
    }

    /// Summary of the logged in user, or `None` without a session.
    pub fn profile(&self) -> Result<Option<ProfileSummary>> {
        let Some(user) = self.session.current_user() else {
            return Ok(None);
        };

        Ok(Some(ProfileSummary {
            recipes_created: self.recipes.recipes_by_author(&user.id).len(),
            favorite_count: self.recipes.favorite_recipes().len(),
            member_since: self.session.member_since(user)?,
            user: user.clone(),
        }))
    }

    fn require_user(&self, operation: &str) -> Result<&SessionUser> {
        self.session.current_user().ok_or_else(|| {
            UserError::NotLoggedIn {
                operation: operation.to_string(),
            }
            .into()
        })
    }

    /// `Ok(false)` if the recipe does not exist, an error if it belongs to
    /// someone else.
    fn check_owner(&self, id: &str, operation: &str) -> Result<bool> {
        let user = self.require_user(operation)?;
        let Some(recipe) = self.recipes.get_recipe_by_id(id) else {
            return Ok(false);
        };
        if !recipe.is_owned_by(user) {
            info!(recipe_id = id, user_id = %user.id, operation, "Rejected change by non-author");
            return Err(RecipeError::NotOwner {
                recipe_id: id.to_string(),
                user_id: user.id.clone(),
            }
            .into());
        }
        Ok(true)
    }
}
