//! Recipe commands: add, list, show, categories, edit and delete.

use flavorbook::{FlavorBook, NewRecipe};

use super::CommandResult;
use crate::cli::{AddArgs, EditArgs, IdArgs, ListArgs};
use crate::output::{OutputFormat, print_json, print_recipe_detail, print_recipes};

/// Run the add command
pub fn add(book: &mut FlavorBook, args: AddArgs, format: OutputFormat) -> CommandResult {
    let recipe = book.add_recipe(NewRecipe::from(args))?;
    match format {
        OutputFormat::Human => println!("Added recipe {} ({})", recipe.title, recipe.id),
        OutputFormat::Json => print_json(&recipe)?,
    }
    Ok(())
}

/// Run the list command
pub fn list(book: &FlavorBook, args: &ListArgs, format: OutputFormat) -> CommandResult {
    let store = book.recipes();
    let recipes = store.search(&args.query());
    print_recipes(&recipes, |id| store.is_favorite(id), format)?;
    Ok(())
}

/// Run the show command
pub fn show(book: &FlavorBook, args: &IdArgs, format: OutputFormat) -> CommandResult {
    let store = book.recipes();
    let recipe = store
        .get_recipe_by_id(&args.id)
        .ok_or_else(|| format!("Recipe not found: {}", args.id))?;
    match format {
        OutputFormat::Human => print_recipe_detail(recipe, store.is_favorite(&recipe.id)),
        OutputFormat::Json => print_json(recipe)?,
    }
    Ok(())
}

/// Run the categories command
pub fn categories(book: &FlavorBook, format: OutputFormat) -> CommandResult {
    let categories = book.recipes().categories();
    match format {
        OutputFormat::Human => {
            for category in categories.iter().filter(|c| !c.is_empty()) {
                println!("{category}");
            }
        }
        OutputFormat::Json => print_json(&categories)?,
    }
    Ok(())
}

/// Run the edit command
pub fn edit(book: &mut FlavorBook, args: &EditArgs, format: OutputFormat) -> CommandResult {
    let patch = args.patch();
    if patch.is_empty() {
        return Err("Nothing to change; pass at least one field".into());
    }
    let recipe = book
        .update_recipe_as_owner(&args.id, patch)?
        .ok_or_else(|| format!("Recipe not found: {}", args.id))?;
    match format {
        OutputFormat::Human => println!("Updated recipe {} ({})", recipe.title, recipe.id),
        OutputFormat::Json => print_json(&recipe)?,
    }
    Ok(())
}

/// Run the delete command
pub fn delete(book: &mut FlavorBook, args: &IdArgs, format: OutputFormat) -> CommandResult {
    if !book.delete_recipe_as_owner(&args.id)? {
        return Err(format!("Recipe not found: {}", args.id).into());
    }
    match format {
        OutputFormat::Human => println!("Deleted recipe {}", args.id),
        OutputFormat::Json => print_json(&serde_json::json!({ "deleted": args.id }))?,
    }
    Ok(())
}
