use std::sync::{Arc, Mutex};

use flavorbook::{
    FixedClock, FlavorBook, NewRecipe, RecipeStore, SessionManager, backend::InMemory,
};

// ==========================
// CORE TEST FACTORIES
// ==========================

/// Fresh, empty in-memory storage.
pub fn test_storage() -> Arc<InMemory> {
    Arc::new(InMemory::new())
}

/// Clock pinned to 2024-01-01, advancing one millisecond per read.
pub fn test_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::default())
}

/// Facade over `storage` with a pinned clock.
pub fn open_book(storage: &Arc<InMemory>) -> FlavorBook {
    FlavorBook::open_with_clock(storage.clone(), test_clock()).expect("open FlavorBook")
}

/// Session manager over `storage` with any persisted session restored.
pub fn open_session(storage: &Arc<InMemory>) -> SessionManager {
    let mut session = SessionManager::with_clock(storage.clone(), test_clock());
    session.restore_session().expect("restore session");
    session
}

/// Initialized recipe store over `storage`.
pub fn open_store(storage: &Arc<InMemory>) -> RecipeStore {
    let mut store = RecipeStore::with_clock(storage.clone(), test_clock());
    store.initialize().expect("initialize store");
    store
}

// ==========================
// DATA BUILDERS
// ==========================

pub fn new_recipe(title: &str, category: &str) -> NewRecipe {
    NewRecipe {
        title: title.to_string(),
        description: format!("How to make {title}"),
        ingredients: vec!["salt".to_string(), "water".to_string()],
        instructions: vec!["Combine".to_string(), "Serve".to_string()],
        category: category.to_string(),
        ..Default::default()
    }
}

/// Collects every event passed to the returned callback.
pub fn recorder<E: Clone + Send + 'static>() -> (Arc<Mutex<Vec<E>>>, impl Fn(&E) + Send + Sync) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    (events, move |event: &E| {
        sink.lock().unwrap().push(event.clone())
    })
}
