mod common;

use assert2::check;
use common::{builtin_catalog, recipe};
use recipe_finder::{Catalog, MatchMode, MatchType, RecipeMatch, search_by_ingredients};
use rstest::rstest;
use std::sync::Arc;

fn ids(results: &[RecipeMatch]) -> Vec<&str> {
    results.iter().map(|m| m.recipe.id.as_str()).collect()
}

fn assert_invariants(results: &[RecipeMatch]) {
    for pair in results.windows(2) {
        check!(pair[0].match_score >= pair[1].match_score);
    }
    for result in results {
        let recipe = &result.recipe;
        check!(
            result.matched_ingredients.len() + result.missing_ingredients.len()
                <= recipe.ingredients.len()
        );
        check!(result.match_score <= 100);
        for optional in recipe.ingredients.iter().filter(|ing| ing.optional) {
            check!(!result.missing_ingredients.contains(&optional.name));
        }
        check!((result.match_type == MatchType::Complete) == result.missing_ingredients.is_empty());
    }
}

#[test]
fn all_mode_keeps_only_complete_matches() {
    let catalog = vec![
        recipe("A").required("eggs").required("rice").build(),
        recipe("B").required("eggs").required("flour").build(),
    ];

    let all = search_by_ingredients(&catalog, &["egg", "rice"], MatchMode::All);
    check!(ids(&all) == vec!["A"]);

    let some = search_by_ingredients(&catalog, &["egg", "rice"], MatchMode::Some);
    check!(ids(&some) == vec!["A", "B"]);
    check!(some[0].match_score == 100);
    check!(some[1].match_score == 50);
}

#[test]
fn empty_catalog_yields_nothing() {
    check!(search_by_ingredients(&[], &["egg"], MatchMode::Some).is_empty());
}

#[rstest]
fn empty_ingredient_list_yields_nothing(builtin_catalog: Arc<Catalog>) {
    let none: [&str; 0] = [];
    check!(search_by_ingredients(builtin_catalog.recipes(), &none, MatchMode::Some).is_empty());
    check!(search_by_ingredients(builtin_catalog.recipes(), &none, MatchMode::All).is_empty());
}

#[rstest]
#[case(&["eggs"])]
#[case(&["garlic", "olive oil"])]
#[case(&["cheese", "black pepper", "salt", "tomato"])]
#[case(&["xyzzy"])]
fn results_are_ranked_and_consistent(builtin_catalog: Arc<Catalog>, #[case] terms: &[&str]) {
    for mode in [MatchMode::Some, MatchMode::All] {
        let results = search_by_ingredients(builtin_catalog.recipes(), terms, mode);
        assert_invariants(&results);
        if mode == MatchMode::All {
            check!(results.iter().all(|r| r.match_type == MatchType::Complete));
        } else {
            check!(results.iter().all(|r| !r.matched_ingredients.is_empty()));
        }
    }
}

#[rstest]
fn repeated_search_is_identical(builtin_catalog: Arc<Catalog>) {
    let terms = ["garlic", "rice", "eggs"];
    let first = search_by_ingredients(builtin_catalog.recipes(), &terms, MatchMode::Some);
    let second = search_by_ingredients(builtin_catalog.recipes(), &terms, MatchMode::Some);
    check!(first == second);
}

#[rstest]
fn garlic_search_ranks_by_share_of_required_ingredients(builtin_catalog: Arc<Catalog>) {
    // Fried rice (1 of 8 = 13%), tacos (1 of 9 = 11%), salad (1 of 7 = 14%)
    let results = search_by_ingredients(builtin_catalog.recipes(), &["garlic"], MatchMode::Some);
    check!(ids(&results) == vec!["5", "2", "4"]);
    check!(results.iter().map(|r| r.match_score).collect::<Vec<_>>() == vec![14, 13, 11]);
}

#[rstest]
fn tacos_optional_sour_cream_is_never_missing(builtin_catalog: Arc<Catalog>) {
    let results = search_by_ingredients(builtin_catalog.recipes(), &["beef"], MatchMode::Some);
    let tacos = results.iter().find(|r| r.recipe.id == "4").unwrap();

    check!(tacos.matched_ingredients == vec!["ground beef"]);
    check!(!tacos.missing_ingredients.contains(&"sour cream".to_string()));
    check!(tacos.missing_ingredients.len() == 8);
    check!(tacos.match_score == 11);
}

#[rstest]
fn full_pantry_gives_complete_carbonara(builtin_catalog: Arc<Catalog>) {
    let terms = ["spaghetti", "eggs", "pancetta", "parmesan", "black pepper", "salt"];
    let results = search_by_ingredients(builtin_catalog.recipes(), &terms, MatchMode::All);

    check!(ids(&results) == vec!["1"]);
    check!(results[0].match_score == 100);
    check!(results[0].match_type == MatchType::Complete);
    check!(results[0].missing_ingredients.is_empty());
}

#[test]
fn matched_optional_ingredients_cannot_push_score_past_100() {
    let catalog = vec![
        recipe("garnished")
            .required("rice")
            .optional("parsley")
            .build(),
    ];

    let results = search_by_ingredients(&catalog, &["rice", "parsley"], MatchMode::All);
    check!(results.len() == 1);
    check!(results[0].match_score == 100);
    check!(results[0].matched_ingredients == vec!["rice", "parsley"]);
}

#[test]
fn recipe_with_only_optional_ingredients_scores_full() {
    let catalog = vec![recipe("extras").optional("chili flakes").build()];

    let results = search_by_ingredients(&catalog, &["chili"], MatchMode::Some);
    check!(results.len() == 1);
    check!(results[0].match_score == 100);
    check!(results[0].match_type == MatchType::Complete);
}
