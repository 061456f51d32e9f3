//! Ranked recipe search by the ingredients a user has on hand.

use super::matcher::find_matches;
use super::scoring::score;
use crate::types::{MatchMode, MatchType, Recipe, RecipeMatch};
use std::sync::Arc;

/// Search the catalog for recipes covered by `search_terms`.
///
/// Every recipe is matched and scored against its required ingredient count.
/// `MatchMode::All` keeps only complete matches; `MatchMode::Some` keeps any
/// recipe with at least one matched ingredient. Results are ordered by
/// descending score, and equal scores stay in catalog order.
///
/// An empty `search_terms` yields no results.
pub fn search_by_ingredients<S: AsRef<str>>(
    catalog: &[Arc<Recipe>],
    search_terms: &[S],
    mode: MatchMode,
) -> Vec<RecipeMatch> {
    if search_terms.is_empty() {
        return vec![];
    }

    let mut matches: Vec<RecipeMatch> = catalog
        .iter()
        .filter_map(|recipe| {
            let found = find_matches(search_terms, &recipe.ingredients);
            let is_complete = found.missing.is_empty();

            let keep = match mode {
                MatchMode::All => is_complete,
                MatchMode::Some => !found.matched.is_empty(),
            };
            if !keep {
                return None;
            }

            Some(RecipeMatch {
                recipe: Arc::clone(recipe),
                match_score: score(found.matched.len(), recipe.required_count()),
                matched_ingredients: found.matched,
                missing_ingredients: found.missing,
                match_type: if is_complete {
                    MatchType::Complete
                } else {
                    MatchType::Partial
                },
            })
        })
        .collect();

    // `sort_by` is stable: ties keep catalog order
    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));

    tracing::debug!(
        "Ingredient search ({} terms, mode {}): {} of {} recipes kept",
        search_terms.len(),
        mode,
        matches.len(),
        catalog.len()
    );

    matches
}
