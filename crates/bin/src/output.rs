//! Output formatting helpers for human-readable and JSON output.

use clap::ValueEnum;
use flavorbook::Recipe;
use serde::Serialize;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Print `value` as a single line of JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Print a table with aligned columns in human-readable format.
///
/// `headers` and each row in `rows` must have the same length.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect();
    println!("{}", header_line.join("  ").trim_end());

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .take(col_count)
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        println!("{}", line.join("  ").trim_end());
    }
}

/// Print recipes as a table, or as a JSON array.
pub fn print_recipes(
    recipes: &[&Recipe],
    favorites: impl Fn(&str) -> bool,
    format: OutputFormat,
) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Human => {
            if recipes.is_empty() {
                println!("No recipes found.");
                return Ok(());
            }
            print_table(
                &["ID", "TITLE", "CATEGORY", "DIFFICULTY", "TIME", "AUTHOR", "FAV"],
                &recipe_rows(recipes, favorites),
            );
            Ok(())
        }
        OutputFormat::Json => print_json(recipes),
    }
}

fn recipe_rows(recipes: &[&Recipe], favorites: impl Fn(&str) -> bool) -> Vec<Vec<String>> {
    recipes
        .iter()
        .map(|recipe| {
            vec![
                recipe.id.clone(),
                recipe.title.clone(),
                recipe.category.clone(),
                recipe.difficulty.to_string(),
                format!("{} min", recipe.cooking_time),
                recipe.author_name.clone(),
                if favorites(&recipe.id) { "*" } else { "" }.to_string(),
            ]
        })
        .collect()
}

/// Print one recipe in full.
pub fn print_recipe_detail(recipe: &Recipe, favorite: bool) {
    println!("{}", recipe.title);
    if !recipe.description.is_empty() {
        println!("{}", recipe.description);
    }
    println!();
    println!("ID:          {}", recipe.id);
    println!("Category:    {}", recipe.category);
    println!("Difficulty:  {}", recipe.difficulty);
    println!("Time:        {} min", recipe.cooking_time);
    println!("Servings:    {}", recipe.servings);
    println!("Author:      {}", recipe.author_name);
    println!("Created:     {}", recipe.created_at.format("%Y-%m-%d"));
    println!("Image:       {}", recipe.image_url);
    println!("Favorite:    {}", if favorite { "yes" } else { "no" });

    println!();
    println!("Ingredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {ingredient}");
    }
    println!();
    println!("Instructions:");
    for (step, instruction) in recipe.instructions.iter().enumerate() {
        println!("  {}. {instruction}", step + 1);
    }
}
