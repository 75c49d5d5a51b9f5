use flavorbook::{
    Difficulty, NewRecipe, RecipePatch, RecipeStore, SessionUser,
    backend::{Storage, read_json},
    constants::RECIPES,
    recipe::RecipeEvent,
};

use serde_json::Number;

use crate::helpers::{new_recipe, open_store, recorder, test_storage};

fn chef() -> SessionUser {
    SessionUser {
        id: "chef-1".to_string(),
        email: "chef@example.com".to_string(),
        name: "Chef".to_string(),
    }
}

#[test]
fn test_fresh_storage_lists_samples_in_order() {
    let storage = test_storage();
    let store = open_store(&storage);

    let titles: Vec<_> = store.list_recipes().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["Classic Margherita Pizza", "Chocolate Chip Cookies"]);

    let authors: Vec<_> = store
        .list_recipes()
        .iter()
        .map(|r| r.author_name.as_str())
        .collect();
    assert_eq!(authors, ["Chef Mario", "Baker Jane"]);
}

#[test]
fn test_initialize_does_not_reseed() {
    let storage = test_storage();
    let mut store = open_store(&storage);
    store.delete_recipe("1").unwrap();
    store.delete_recipe("2").unwrap();

    let reopened = RecipeStore::open(storage.clone()).unwrap();
    assert!(reopened.list_recipes().is_empty());
}

#[test]
fn test_initialize_keeps_negative_and_fractional_numbers() {
    let storage = test_storage();
    let stored = r#"[{
        "id": "1700000000000",
        "title": "Mine",
        "description": "Kept as typed",
        "ingredients": ["egg"],
        "instructions": ["boil"],
        "cookingTime": -5,
        "servings": 2.5,
        "difficulty": "Easy",
        "category": "Breakfast",
        "imageUrl": "https://example.com/egg.jpg",
        "authorId": "u1",
        "authorName": "Ada",
        "createdAt": "2024-03-01T08:00:00.000Z"
    }]"#;
    storage.set(RECIPES, stored.to_string()).unwrap();

    let mut store = open_store(&storage);
    let titles: Vec<_> = store.list_recipes().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["Mine"]);

    let mine = store.get_recipe_by_id("1700000000000").unwrap();
    assert_eq!(mine.cooking_time.as_i64(), Some(-5));
    assert_eq!(mine.servings.as_f64(), Some(2.5));

    // Rewriting the collection keeps the values as they were
    store.toggle_favorite("1700000000000").unwrap();
    store
        .add_recipe(new_recipe("Toast", "Breakfast"), &chef())
        .unwrap();
    let raw = storage.get(RECIPES).unwrap().unwrap();
    assert!(raw.contains(r#""cookingTime":-5"#));
    assert!(raw.contains(r#""servings":2.5"#));
    assert!(!raw.contains("Classic Margherita Pizza"));
}

#[test]
fn test_add_then_get_returns_input_plus_assigned_fields() {
    let storage = test_storage();
    let mut store = open_store(&storage);

    let data = NewRecipe {
        title: "Pancakes".to_string(),
        description: "Fluffy".to_string(),
        ingredients: vec!["a".to_string(), "".to_string()],
        instructions: vec!["".to_string(), "flip".to_string()],
        cooking_time: 15.into(),
        servings: 2.into(),
        difficulty: Difficulty::Medium,
        category: "Breakfast".to_string(),
        image_url: "https://example.com/p.jpg".to_string(),
    };
    let added = store.add_recipe(data.clone(), &chef()).unwrap();
    let fetched = store.get_recipe_by_id(&added.id).unwrap();

    assert_eq!(fetched, &added);
    assert_eq!(fetched.title, data.title);
    assert_eq!(fetched.description, data.description);
    assert_eq!(fetched.ingredients, ["a"]);
    assert_eq!(fetched.instructions, ["flip"]);
    assert_eq!(fetched.cooking_time, Number::from(15));
    assert_eq!(fetched.servings, Number::from(2));
    assert_eq!(fetched.difficulty, Difficulty::Medium);
    assert_eq!(fetched.category, "Breakfast");
    assert_eq!(fetched.image_url, data.image_url);
    assert_eq!(fetched.author_id, "chef-1");
    assert_eq!(fetched.author_name, "Chef");
    assert!(fetched.created_at.to_rfc3339().starts_with("2024-01-01"));

    let stored = storage.get(RECIPES).unwrap().unwrap();
    assert!(stored.contains(r#""ingredients":["a"]"#));
}

#[test]
fn test_added_recipes_get_unique_ids() {
    let storage = test_storage();
    let mut store = open_store(&storage);
    let first = store.add_recipe(new_recipe("A", "X"), &chef()).unwrap();
    let second = store.add_recipe(new_recipe("A", "X"), &chef()).unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(store.list_recipes().len(), 4);
}

#[test]
fn test_update_is_shallow_merge_and_persisted() {
    let storage = test_storage();
    let mut store = open_store(&storage);
    let added = store.add_recipe(new_recipe("Soup", "Soup"), &chef()).unwrap();

    let patch = RecipePatch {
        title: Some("Better Soup".to_string()),
        difficulty: Some(Difficulty::Hard),
        ..Default::default()
    };
    let updated = store.update_recipe(&added.id, patch).unwrap().unwrap();
    assert_eq!(updated.title, "Better Soup");
    assert_eq!(updated.difficulty, Difficulty::Hard);
    assert_eq!(updated.ingredients, added.ingredients);
    assert_eq!(updated.id, added.id);
    assert_eq!(updated.author_id, added.author_id);
    assert_eq!(updated.created_at, added.created_at);

    let stored: Vec<flavorbook::Recipe> = read_json(storage.as_ref(), RECIPES).unwrap().unwrap();
    assert_eq!(stored.last(), Some(&updated));
}

#[test]
fn test_update_unknown_id_changes_nothing() {
    let storage = test_storage();
    let mut store = open_store(&storage);
    let before = store.list_recipes().to_vec();

    let patch = RecipePatch {
        servings: Some(1.into()),
        ..Default::default()
    };
    assert!(store.update_recipe("nope", patch).unwrap().is_none());
    assert_eq!(store.list_recipes(), before.as_slice());
}

#[test]
fn test_store_events() {
    let storage = test_storage();
    let mut store = RecipeStore::new(storage.clone());
    let (events, callback) = recorder::<RecipeEvent>();
    store.subscribe(callback);
    store.initialize().unwrap();

    let added = store.add_recipe(new_recipe("Soup", "Soup"), &chef()).unwrap();
    store.toggle_favorite(&added.id).unwrap();
    store.delete_recipe(&added.id).unwrap();
    store.delete_recipe(&added.id).unwrap();

    assert_eq!(
        *events.lock().unwrap(),
        vec![
            RecipeEvent::Seeded,
            RecipeEvent::Added(added.clone()),
            RecipeEvent::FavoriteToggled {
                id: added.id.clone(),
                favorite: true
            },
            RecipeEvent::Deleted { id: added.id },
        ]
    );
}
