//! Shared test fixtures for integration tests.
//!
//! - `builtin_catalog`: the sample catalog shipped with the crate
//! - `state`: a fresh search session over the sample catalog
//! - `recipe` / `RecipeBuilder`: compact construction of ad-hoc recipes

use recipe_finder::{Catalog, Difficulty, Ingredient, Recipe, RecipeState};
use rstest::fixture;
use std::sync::Arc;

#[fixture]
pub fn builtin_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::builtin().expect("built-in catalog should be valid"))
}

#[fixture]
pub fn state(builtin_catalog: Arc<Catalog>) -> RecipeState {
    RecipeState::new(builtin_catalog)
}

/// Builder for small test recipes.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct RecipeBuilder {
    recipe: Recipe,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl RecipeBuilder {
    pub fn required(mut self, name: &str) -> Self {
        self.recipe.ingredients.push(Ingredient::new(name, "1", "unit"));
        self
    }

    pub fn optional(mut self, name: &str) -> Self {
        self.recipe
            .ingredients
            .push(Ingredient::new(name, "1", "unit").optional());
        self
    }

    pub fn description(mut self, text: &str) -> Self {
        self.recipe.description = text.to_string();
        self
    }

    pub fn cuisine(mut self, cuisine: &str) -> Self {
        self.recipe.cuisine = cuisine.to_string();
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.recipe.tags.push(tag.to_string());
        self
    }

    pub fn build(self) -> Arc<Recipe> {
        Arc::new(self.recipe)
    }
}

/// Start a recipe whose id and name are both `name`.
#[allow(dead_code)]
pub fn recipe(name: &str) -> RecipeBuilder {
    RecipeBuilder {
        recipe: Recipe {
            id: name.to_string(),
            name: name.to_string(),
            description: String::new(),
            ingredients: vec![],
            instructions: vec![],
            cooking_time: 10,
            prep_time: 10,
            servings: 2,
            difficulty: Difficulty::Easy,
            cuisine: String::new(),
            image: None,
            tags: vec![],
        },
    }
}
