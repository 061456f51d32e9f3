//! Free-text recipe search over name, description, tags and cuisine.

use crate::types::Recipe;
use std::cmp::Ordering;
use std::sync::Arc;

/// Search the catalog by case-insensitive substring.
///
/// A recipe is included when the query appears in its name, description,
/// any tag, or its cuisine. Name hits sort before the rest; within each
/// group recipes are ordered by name. Blank queries yield no results.
pub fn search_by_name(catalog: &[Arc<Recipe>], query: &str) -> Vec<Arc<Recipe>> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return vec![];
    }

    let mut hits: Vec<(bool, &Arc<Recipe>)> = catalog
        .iter()
        .filter_map(|recipe| {
            let name_hit = recipe.name.to_lowercase().contains(&query);
            let other_hit = recipe.description.to_lowercase().contains(&query)
                || recipe
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&query))
                || recipe.cuisine.to_lowercase().contains(&query);

            (name_hit || other_hit).then_some((name_hit, recipe))
        })
        .collect();

    hits.sort_by(|(a_name_hit, a), (b_name_hit, b)| {
        b_name_hit
            .cmp(a_name_hit)
            .then_with(|| compare_names(&a.name, &b.name))
    });

    tracing::debug!(
        "Name search '{}': {} of {} recipes matched",
        query,
        hits.len(),
        catalog.len()
    );

    hits.into_iter()
        .map(|(_, recipe)| Arc::clone(recipe))
        .collect()
}

/// Case-insensitive ordering of display names, falling back to a byte
/// comparison so that distinct names never compare equal.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
