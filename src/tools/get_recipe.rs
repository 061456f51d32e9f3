//! Full recipe detail with ingredient availability.

use crate::detail::RecipeDetail;
use crate::format::format_recipe_detail;
use crate::pantry::Pantry;
use crate::state::RecipeState;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetRecipeRequest {
    /// Recipe id as shown in search results
    pub id: String,
    /// Ingredients from the preceding ingredient search; marks each recipe ingredient as available or needed
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Look up a recipe and render its detail view.
pub async fn handle_get_recipe(state: &RecipeState, request: GetRecipeRequest) -> Result<String, String> {
    let Some(recipe) = state.catalog().get(request.id.trim()) else {
        return Err(format!(
            "Recipe '{}' not found. Use search_by_ingredients or search_by_name to find recipe ids.",
            request.id
        ));
    };

    let pantry: Pantry = request.ingredients.iter().collect();
    let detail = RecipeDetail::new(recipe, pantry.items());
    Ok(format_recipe_detail(&detail))
}
