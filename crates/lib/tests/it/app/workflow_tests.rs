use flavorbook::{Difficulty, RecipePatch, RecipeQuery};

use crate::helpers::{new_recipe, open_book, test_storage};

#[test]
fn test_first_run_then_author_workflow() {
    let storage = test_storage();
    let mut book = open_book(&storage);
    assert!(book.session().current_user().is_none());
    assert_eq!(book.recipes().list_recipes().len(), 2);

    let ada = book
        .session_mut()
        .signup("ada@example.com", "pw", "Ada")
        .unwrap();
    let soup = book.add_recipe(new_recipe("Tomato Soup", "Soup")).unwrap();
    assert_eq!(soup.author_id, ada.id);
    assert_eq!(soup.author_name, "Ada");

    let patch = RecipePatch {
        difficulty: Some(Difficulty::Medium),
        ..Default::default()
    };
    let updated = book.update_recipe_as_owner(&soup.id, patch).unwrap().unwrap();
    assert_eq!(updated.difficulty, Difficulty::Medium);

    book.toggle_favorite(&soup.id).unwrap();
    book.session_mut().logout().unwrap();

    // Next launch sees the same state but no session
    let reopened = open_book(&storage);
    assert!(!reopened.session().is_logged_in());
    assert_eq!(reopened.recipes().list_recipes().len(), 3);
    assert_eq!(reopened.recipes().get_recipe_by_id(&soup.id), Some(&updated));
    assert!(reopened.recipes().is_favorite(&soup.id));
}

#[test]
fn test_favorites_are_shared_between_users() {
    let storage = test_storage();
    let mut book = open_book(&storage);

    book.session_mut()
        .signup("ada@example.com", "pw", "Ada")
        .unwrap();
    book.toggle_favorite("1").unwrap();

    book.session_mut()
        .signup("bob@example.com", "pw", "Bob")
        .unwrap();
    assert!(book.recipes().is_favorite("1"));
    assert_eq!(book.profile().unwrap().unwrap().favorite_count, 1);
}

#[test]
fn test_non_author_cannot_edit() {
    let storage = test_storage();
    let mut book = open_book(&storage);
    book.session_mut()
        .signup("ada@example.com", "pw", "Ada")
        .unwrap();
    let soup = book.add_recipe(new_recipe("Soup", "Soup")).unwrap();
    book.session_mut().logout().unwrap();

    let patch = RecipePatch {
        title: Some("Hijacked".to_string()),
        ..Default::default()
    };
    let err = book
        .update_recipe_as_owner(&soup.id, patch.clone())
        .unwrap_err();
    assert!(err.is_authentication_error());

    book.session_mut()
        .signup("eve@example.com", "pw", "Eve")
        .unwrap();
    let err = book.update_recipe_as_owner(&soup.id, patch).unwrap_err();
    assert!(err.is_permission_denied());
    assert_eq!(err.module(), "recipe");
    assert_eq!(
        book.recipes().get_recipe_by_id(&soup.id).map(|r| r.title.as_str()),
        Some("Soup")
    );
}

#[test]
fn test_profile_counts() {
    let storage = test_storage();
    let mut book = open_book(&storage);
    book.session_mut()
        .signup("ada@example.com", "pw", "Ada")
        .unwrap();
    book.add_recipe(new_recipe("A", "X")).unwrap();
    let b = book.add_recipe(new_recipe("B", "X")).unwrap();
    book.toggle_favorite(&b.id).unwrap();
    book.toggle_favorite("2").unwrap();
    book.delete_recipe_as_owner(&b.id).unwrap();

    let profile = book.profile().unwrap().unwrap();
    assert_eq!(profile.recipes_created, 1);
    assert_eq!(profile.favorite_count, 1);
    assert!(profile.member_since.unwrap().to_rfc3339().starts_with("2024-01-01"));

    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["recipesCreated"], 1);
    assert_eq!(json["user"]["name"], "Ada");
}

#[test]
fn test_search_through_facade() {
    let storage = test_storage();
    let book = open_book(&storage);
    let hits = book.recipes().search(&RecipeQuery::new().text("margherita"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "1");
}
