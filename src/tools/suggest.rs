//! Ingredient name completion.

use crate::catalog::suggest_ingredients;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SuggestIngredientsRequest {
    /// Partially typed ingredient name
    pub input: String,
    /// Ingredients already added, excluded from suggestions
    #[serde(default)]
    pub exclude: Vec<String>,
}

pub fn handle_suggest_ingredients(request: &SuggestIngredientsRequest) -> String {
    let exclude: Vec<String> = request
        .exclude
        .iter()
        .map(|item| item.trim().to_lowercase())
        .collect();
    let suggestions = suggest_ingredients(request.input.trim(), &exclude);

    if suggestions.is_empty() {
        format!("No suggestions for '{}'.", request.input.trim())
    } else {
        suggestions.join("\n")
    }
}
