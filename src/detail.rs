//! Recipe detail view: ingredient availability and time formatting.

use crate::search::ingredient_matches;
use crate::types::{Ingredient, Recipe};
use serde::Serialize;
use std::sync::Arc;

/// Availability of one ingredient relative to the user's search ingredients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientStatus {
    /// Covered by one of the search ingredients
    Available,
    /// Not covered; the user still needs it
    Needed,
    /// No ingredient search context to compare against
    Neutral,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientLine {
    pub ingredient: Ingredient,
    pub status: IngredientStatus,
}

/// A recipe prepared for display, with per-ingredient highlighting.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub recipe: Arc<Recipe>,
    pub total_time: u32,
    pub ingredients: Vec<IngredientLine>,
}

impl RecipeDetail {
    /// Build the detail view. `search_ingredients` is the list from the ingredient
    /// search that led here; an empty list means no highlighting.
    pub fn new<S: AsRef<str>>(recipe: Arc<Recipe>, search_ingredients: &[S]) -> Self {
        let ingredients = recipe
            .ingredients
            .iter()
            .map(|ingredient| IngredientLine {
                status: ingredient_status(&ingredient.name, search_ingredients),
                ingredient: ingredient.clone(),
            })
            .collect();

        Self {
            total_time: recipe.total_time(),
            recipe,
            ingredients,
        }
    }

    /// Whether highlighting is active.
    pub fn is_match_view(&self) -> bool {
        self.ingredients
            .iter()
            .any(|line| line.status != IngredientStatus::Neutral)
    }
}

/// Availability of a single recipe ingredient.
pub fn ingredient_status<S: AsRef<str>>(name: &str, search_ingredients: &[S]) -> IngredientStatus {
    if search_ingredients.is_empty() {
        IngredientStatus::Neutral
    } else if ingredient_matches(name, search_ingredients) {
        IngredientStatus::Available
    } else {
        IngredientStatus::Needed
    }
}

/// Format a duration in minutes as `"45 min"`, `"2 hr"` or `"1 hr 30 min"`.
pub fn format_cooking_time(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{} min", minutes);
    }

    let hours = minutes / 60;
    let remaining = minutes % 60;
    if remaining == 0 {
        format!("{} hr", hours)
    } else {
        format!("{} hr {} min", hours, remaining)
    }
}
