//! Free-text recipe search.

use crate::format::format_name_results;
use crate::state::RecipeState;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchByNameRequest {
    /// Text to look for in recipe names, descriptions, tags and cuisines
    pub query: String,
    /// Maximum number of recipes to return (default: all)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Execute a name search against the session's catalog.
pub async fn handle_search_by_name(
    state: &RecipeState,
    request: SearchByNameRequest,
) -> Result<String, String> {
    if request.query.trim().is_empty() {
        return Err("Search query is empty. Provide a recipe name, cuisine or tag.".to_string());
    }

    let results = state
        .cache()
        .await
        .by_name(state.catalog().recipes(), &request.query);

    let shown = request.limit.unwrap_or(results.len()).min(results.len());
    Ok(format_name_results(&results[..shown], &request.query))
}
