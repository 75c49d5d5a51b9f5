//! Built-in recipes written to empty storage on first run.

use chrono::{DateTime, Utc};

use super::{Difficulty, Recipe};
use crate::constants::SAMPLE_AUTHOR_ID;

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// The sample collection, in its fixed order, stamped with `created_at`.
pub fn sample_recipes(created_at: DateTime<Utc>) -> Vec<Recipe> {
    vec![
        Recipe {
            id: "1".to_string(),
            title: "Classic Margherita Pizza".to_string(),
            description: "A traditional Italian pizza with fresh tomatoes, mozzarella, and basil."
                .to_string(),
            ingredients: lines(&[
                "1 pizza dough",
                "1/2 cup tomato sauce",
                "8 oz fresh mozzarella",
                "Fresh basil leaves",
                "2 tbsp olive oil",
                "Salt and pepper",
            ]),
            instructions: lines(&[
                "Preheat oven to 475°F (245°C)",
                "Roll out pizza dough on floured surface",
                "Spread tomato sauce evenly",
                "Add torn mozzarella pieces",
                "Bake for 12-15 minutes until crust is golden",
                "Top with fresh basil and drizzle with olive oil",
            ]),
            cooking_time: 25.into(),
            servings: 4.into(),
            difficulty: Difficulty::Easy,
            category: "Italian".to_string(),
            image_url: "https://images.pexels.com/photos/315755/pexels-photo-315755.jpeg"
                .to_string(),
            author_id: SAMPLE_AUTHOR_ID.to_string(),
            author_name: "Chef Mario".to_string(),
            created_at,
        },
        Recipe {
            id: "2".to_string(),
            title: "Chocolate Chip Cookies".to_string(),
            description: "Soft and chewy chocolate chip cookies that melt in your mouth."
                .to_string(),
            ingredients: lines(&[
                "2 1/4 cups all-purpose flour",
                "1 tsp baking soda",
                "1 tsp salt",
                "1 cup butter, softened",
                "3/4 cup granulated sugar",
                "3/4 cup brown sugar",
                "2 large eggs",
                "2 tsp vanilla extract",
                "2 cups chocolate chips",
            ]),
            instructions: lines(&[
                "Preheat oven to 375°F (190°C)",
                "Mix flour, baking soda, and salt in a bowl",
                "Cream together butter and sugars",
                "Beat in eggs and vanilla",
                "Gradually add flour mixture",
                "Stir in chocolate chips",
                "Drop rounded tablespoons onto baking sheet",
                "Bake 9-11 minutes until golden brown",
            ]),
            cooking_time: 30.into(),
            servings: 36.into(),
            difficulty: Difficulty::Easy,
            category: "Dessert".to_string(),
            image_url: "https://images.pexels.com/photos/230325/pexels-photo-230325.jpeg"
                .to_string(),
            author_id: SAMPLE_AUTHOR_ID.to_string(),
            author_name: "Baker Jane".to_string(),
            created_at,
        },
    ]
}
