//! The recipe store
//!
//! [`RecipeStore`] keeps the recipe collection and the favorites list in memory
//! and writes the whole affected record back to storage after every change.
//! A change is only applied in memory once the write has succeeded.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use super::{NewRecipe, Recipe, RecipeEvent, RecipePatch, RecipeQuery, sample::sample_recipes};
use crate::{
    Clock, Result, SystemClock,
    backend::{self, Storage},
    constants::{FAVORITES, RECIPES},
    events::{SubscriptionId, Subscribers},
    user::SessionUser,
};

/// Owns the recipe collection and the favorite recipe ids.
///
/// Favorites are a single list for the whole storage namespace, shared by
/// whoever is logged in. They are not keyed by user.
pub struct RecipeStore {
    storage: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
    recipes: Vec<Recipe>,
    favorites: Vec<String>,
    subscribers: Subscribers<RecipeEvent>,
}

impl RecipeStore {
    /// Create an empty, uninitialized store using the system clock.
    ///
    /// Call [`RecipeStore::initialize`] before use, or use [`RecipeStore::open`].
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self::with_clock(storage, Arc::new(SystemClock))
    }

    /// Create an uninitialized store that timestamps recipes with `clock`.
    pub fn with_clock(storage: Arc<dyn Storage>, clock: Arc<dyn Clock>) -> Self {
        Self {
            storage,
            clock,
            recipes: Vec::new(),
            favorites: Vec::new(),
            subscribers: Subscribers::new(),
        }
    }

    /// Create a store and load (or seed) its state.
    pub fn open(storage: Arc<dyn Storage>) -> Result<Self> {
        let mut store = Self::new(storage);
        store.initialize()?;
        Ok(store)
    }

    /// Loads the persisted collection and favorites.
    ///
    /// If no readable collection is stored, the sample recipes are written and
    /// used instead. Missing or malformed favorites load as an empty list.
    pub fn initialize(&mut self) -> Result<()> {
        let storage = self.storage.as_ref();
        match backend::read_json::<Vec<Recipe>>(storage, RECIPES)? {
            Some(recipes) => {
                debug!(count = recipes.len(), "Loaded recipes");
                self.recipes = recipes;
            }
            None => {
                let samples = sample_recipes(self.clock.now());
                backend::write_json(storage, RECIPES, &samples)?;
                info!(count = samples.len(), "Seeded sample recipes");
                self.recipes = samples;
                self.subscribers.notify(&RecipeEvent::Seeded);
            }
        }

        self.favorites = backend::read_json(storage, FAVORITES)?.unwrap_or_default();
        debug!(count = self.favorites.len(), "Loaded favorites");
        Ok(())
    }

    /// Every recipe, in insertion order.
    pub fn list_recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get_recipe_by_id(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Stores a new recipe authored by `owner` and returns it.
    ///
    /// Assigns the id and creation time and drops blank ingredient and
    /// instruction entries.
    pub fn add_recipe(&mut self, data: NewRecipe, owner: &SessionUser) -> Result<Recipe> {
        let recipe = Recipe::from_new(self.next_id(), data, owner, self.clock.now());

        let mut recipes = self.recipes.clone();
        recipes.push(recipe.clone());
        self.commit_recipes(recipes)?;

        info!(recipe_id = %recipe.id, author_id = %recipe.author_id, "Added recipe");
        self.subscribers.notify(&RecipeEvent::Added(recipe.clone()));
        Ok(recipe)
    }

    /// Applies `patch` to the recipe with `id` and returns the updated record.
    ///
    /// Returns `Ok(None)` without writing anything if there is no such recipe.
    /// No ownership check is made here; see
    /// [`crate::FlavorBook::update_recipe_as_owner`].
    pub fn update_recipe(&mut self, id: &str, patch: RecipePatch) -> Result<Option<Recipe>> {
        let Some(index) = self.position(id) else {
            debug!(recipe_id = id, "Update of unknown recipe ignored");
            return Ok(None);
        };

        let mut recipes = self.recipes.clone();
        let Some(target) = recipes.get_mut(index) else {
            return Ok(None);
        };
        target.apply(patch);
        let recipe = target.clone();
        self.commit_recipes(recipes)?;

        info!(recipe_id = id, "Updated recipe");
        self.subscribers.notify(&RecipeEvent::Updated(recipe.clone()));
        Ok(Some(recipe))
    }

    /// Removes the recipe with `id`. Returns `false` if there was none.
    ///
    /// The id stays in the favorites list if it was there.
    pub fn delete_recipe(&mut self, id: &str) -> Result<bool> {
        if self.position(id).is_none() {
            debug!(recipe_id = id, "Delete of unknown recipe ignored");
            return Ok(false);
        }

        let recipes = self
            .recipes
            .iter()
            .filter(|recipe| recipe.id != id)
            .cloned()
            .collect();
        self.commit_recipes(recipes)?;

        info!(recipe_id = id, "Deleted recipe");
        self.subscribers.notify(&RecipeEvent::Deleted { id: id.to_string() });
        Ok(true)
    }

    /// Adds `id` to the favorites if absent, removes it if present.
    ///
    /// Returns whether `id` is a favorite afterwards. The id is not checked
    /// against the collection.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        let favorite = !self.is_favorite(id);
        let favorites: Vec<String> = if favorite {
            let mut favorites = self.favorites.clone();
            favorites.push(id.to_string());
            favorites
        } else {
            self.favorites
                .iter()
                .filter(|existing| *existing != id)
                .cloned()
                .collect()
        };

        backend::write_json(self.storage.as_ref(), FAVORITES, &favorites)?;
        self.favorites = favorites;

        debug!(recipe_id = id, favorite, "Toggled favorite");
        self.subscribers.notify(&RecipeEvent::FavoriteToggled {
            id: id.to_string(),
            favorite,
        });
        Ok(favorite)
    }

    /// Favorite ids in the order they were added, including ids of deleted recipes.
    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|favorite| favorite == id)
    }

    /// Favorite recipes in collection order. Ids with no recipe are skipped.
    pub fn favorite_recipes(&self) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| self.is_favorite(&recipe.id))
            .collect()
    }

    /// Recipes matching `query`, in collection order.
    pub fn search(&self, query: &RecipeQuery) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| query.matches(recipe))
            .collect()
    }

    /// Distinct categories in the order they first appear.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for recipe in &self.recipes {
            if !categories.contains(&recipe.category.as_str()) {
                categories.push(&recipe.category);
            }
        }
        categories
    }

    pub fn recipes_by_author(&self, author_id: &str) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.author_id == author_id)
            .collect()
    }

    /// Registers a callback for collection and favorites changes.
    pub fn subscribe(
        &mut self,
        callback: impl Fn(&RecipeEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.recipes.iter().position(|recipe| recipe.id == id)
    }

    fn next_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }

    fn commit_recipes(&mut self, recipes: Vec<Recipe>) -> Result<()> {
        backend::write_json(self.storage.as_ref(), RECIPES, &recipes)?;
        self.recipes = recipes;
        Ok(())
    }
}

impl fmt::Debug for RecipeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecipeStore")
            .field("storage", &"<Storage>")
            .field("clock", &self.clock)
            .field("recipes", &self.recipes.len())
            .field("favorites", &self.favorites)
            .field("subscribers", &self.subscribers)
            .finish()
    }
}
