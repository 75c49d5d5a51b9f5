//! Favorite commands.

use flavorbook::FlavorBook;

use super::CommandResult;
use crate::cli::IdArgs;
use crate::output::{OutputFormat, print_json, print_recipes};

/// Run the favorite command, toggling one recipe
pub fn toggle(book: &mut FlavorBook, args: &IdArgs, format: OutputFormat) -> CommandResult {
    if book.recipes().get_recipe_by_id(&args.id).is_none() {
        tracing::warn!(recipe_id = %args.id, "Favoriting an id with no recipe");
    }
    let favorite = book.toggle_favorite(&args.id)?;
    match format {
        OutputFormat::Human if favorite => println!("Added {} to favorites", args.id),
        OutputFormat::Human => println!("Removed {} from favorites", args.id),
        OutputFormat::Json => print_json(&serde_json::json!({
            "id": args.id,
            "favorite": favorite,
        }))?,
    }
    Ok(())
}

/// Run the favorites command
pub fn list(book: &FlavorBook, format: OutputFormat) -> CommandResult {
    let recipes = book.recipes().favorite_recipes();
    print_recipes(&recipes, |_| true, format)?;
    Ok(())
}
