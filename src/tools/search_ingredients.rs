//! Ranked recipe search by on-hand ingredients.

use crate::format::format_ingredient_results;
use crate::pantry::Pantry;
use crate::state::RecipeState;
use crate::types::MatchMode;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchByIngredientsRequest {
    /// Ingredients the user has on hand (e.g. ["chicken", "rice", "garlic"])
    pub ingredients: Vec<String>,
    /// "all": only recipes needing nothing else. "some" (default): any recipe using at least one ingredient
    #[serde(default)]
    pub match_type: MatchMode,
    /// Maximum number of recipes to return (default: all)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Execute an ingredient search against the session's catalog.
pub async fn handle_search_by_ingredients(
    state: &RecipeState,
    request: SearchByIngredientsRequest,
) -> Result<String, String> {
    let pantry: Pantry = request.ingredients.iter().collect();
    if pantry.is_empty() {
        return Err("No ingredients given. Provide at least one ingredient you have on hand.".to_string());
    }

    let results = state.cache().await.ingredients(
        state.catalog().recipes(),
        pantry.items(),
        request.match_type,
    );

    let shown = request.limit.unwrap_or(results.len()).min(results.len());
    Ok(format_ingredient_results(
        &results[..shown],
        pantry.items(),
        request.match_type,
    ))
}
