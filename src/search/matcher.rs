//! Ingredient matching between a user's ingredient list and a recipe.

use super::normalize::normalize;
use crate::types::Ingredient;

/// Matched and missing recipe ingredients, both in recipe order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientMatches {
    /// Display names of recipe ingredients covered by at least one search term
    pub matched: Vec<String>,
    /// Display names of required recipe ingredients with no covering term
    pub missing: Vec<String>,
}

/// Bidirectional containment test on already-normalized names.
///
/// `"olive oil"` matches the term `"oil"`, and `"chicken breast"` matches the
/// term `"boneless chicken breast"`.
pub(crate) fn names_overlap(recipe_name: &str, search_term: &str) -> bool {
    recipe_name.contains(search_term) || search_term.contains(recipe_name)
}

/// Whether a single ingredient name is covered by any of the search terms.
pub fn ingredient_matches<S: AsRef<str>>(ingredient_name: &str, search_terms: &[S]) -> bool {
    let recipe_name = normalize(ingredient_name);
    search_terms
        .iter()
        .any(|term| names_overlap(&recipe_name, &normalize(term.as_ref())))
}

/// Split a recipe's ingredients into matched and missing against the search terms.
///
/// Unmatched optional ingredients appear in neither list. Search terms are
/// normalized once per call, recipe names once per ingredient.
pub fn find_matches<S: AsRef<str>>(
    search_terms: &[S],
    recipe_ingredients: &[Ingredient],
) -> IngredientMatches {
    let terms: Vec<String> = search_terms
        .iter()
        .map(|term| normalize(term.as_ref()))
        .collect();

    let mut result = IngredientMatches::default();

    for ingredient in recipe_ingredients {
        let recipe_name = normalize(&ingredient.name);
        let is_matched = terms.iter().any(|term| names_overlap(&recipe_name, term));

        if is_matched {
            result.matched.push(ingredient.name.clone());
        } else if !ingredient.optional {
            result.missing.push(ingredient.name.clone());
        }
    }

    result
}
