//! CLI argument definitions for the FlavorBook binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use flavorbook::{Difficulty, NewRecipe, RecipePatch, RecipeQuery};
use serde_json::Number;

use crate::output::OutputFormat;

/// FlavorBook recipe sharing from the command line
#[derive(Parser, Debug)]
#[command(name = "flavorbook")]
#[command(about = "FlavorBook: share recipes, keep favorites")]
#[command(version)]
pub struct Cli {
    /// File holding all FlavorBook state
    #[arg(
        short = 'f',
        long,
        global = true,
        default_value = "flavorbook.json",
        env = "FLAVORBOOK_DATA_FILE"
    )]
    pub data_file: PathBuf,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account and log in
    Signup(SignupArgs),
    /// Log in to an existing account
    Login(LoginArgs),
    /// End the current session
    Logout,
    /// Show the logged in user
    Whoami,
    /// Add a recipe as the logged in user
    Add(AddArgs),
    /// List recipes, optionally filtered
    List(ListArgs),
    /// Show one recipe in full
    Show(IdArgs),
    /// List the categories in use
    Categories,
    /// Change a recipe you authored
    Edit(EditArgs),
    /// Delete a recipe you authored
    Delete(IdArgs),
    /// Add or remove a favorite
    Favorite(IdArgs),
    /// List favorite recipes
    Favorites,
    /// Show the logged in user's profile
    Profile,
}

impl Commands {
    /// Commands that never change stored state.
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            Commands::Whoami
                | Commands::List(_)
                | Commands::Show(_)
                | Commands::Categories
                | Commands::Favorites
                | Commands::Profile
        )
    }
}

/// Arguments for the signup command
#[derive(Args, Debug)]
pub struct SignupArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,

    /// Display name
    #[arg(long)]
    pub name: String,
}

/// Arguments for the login command
#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,
}

/// A single recipe id
#[derive(Args, Debug)]
pub struct IdArgs {
    pub id: String,
}

/// Arguments for the add command
#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// Ingredient line, repeat for each ingredient
    #[arg(short, long = "ingredient")]
    pub ingredients: Vec<String>,

    /// Instruction step, repeat for each step
    #[arg(short = 's', long = "instruction")]
    pub instructions: Vec<String>,

    /// Cooking time in minutes
    #[arg(long, default_value = "30", allow_negative_numbers = true)]
    pub cooking_time: Number,

    #[arg(long, default_value = "4", allow_negative_numbers = true)]
    pub servings: Number,

    /// Easy, Medium or Hard
    #[arg(long, default_value_t = Difficulty::Easy)]
    pub difficulty: Difficulty,

    #[arg(long, default_value = "")]
    pub category: String,

    /// Image URL, a stock photo is used if omitted
    #[arg(long)]
    pub image_url: Option<String>,
}

impl From<AddArgs> for NewRecipe {
    fn from(args: AddArgs) -> Self {
        let defaults = NewRecipe::default();
        NewRecipe {
            title: args.title,
            description: args.description,
            ingredients: args.ingredients,
            instructions: args.instructions,
            cooking_time: args.cooking_time,
            servings: args.servings,
            difficulty: args.difficulty,
            category: args.category,
            image_url: args.image_url.unwrap_or(defaults.image_url),
        }
    }
}

/// Arguments for the edit command. Omitted fields keep their value.
#[derive(Args, Debug)]
pub struct EditArgs {
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Replaces all ingredients, repeat for each ingredient
    #[arg(short, long = "ingredient")]
    pub ingredients: Option<Vec<String>>,

    /// Replaces all instructions, repeat for each step
    #[arg(short = 's', long = "instruction")]
    pub instructions: Option<Vec<String>>,

    #[arg(long, allow_negative_numbers = true)]
    pub cooking_time: Option<Number>,

    #[arg(long, allow_negative_numbers = true)]
    pub servings: Option<Number>,

    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub image_url: Option<String>,
}

impl EditArgs {
    pub fn patch(&self) -> RecipePatch {
        RecipePatch {
            title: self.title.clone(),
            description: self.description.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
            cooking_time: self.cooking_time.clone(),
            servings: self.servings.clone(),
            difficulty: self.difficulty,
            category: self.category.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Text to look for in titles and descriptions
    #[arg(long)]
    pub search: Option<String>,

    /// Only this category (exact match)
    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub difficulty: Option<Difficulty>,
}

impl ListArgs {
    pub fn query(&self) -> RecipeQuery {
        RecipeQuery {
            text: self.search.clone().unwrap_or_default(),
            category: self.category.clone(),
            difficulty: self.difficulty,
        }
    }
}
