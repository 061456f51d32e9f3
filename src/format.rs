//! Plain-text rendering of search results and recipe details.

use crate::detail::{IngredientStatus, RecipeDetail, format_cooking_time};
use crate::types::{MatchMode, MatchType, Recipe, RecipeMatch};
use std::fmt::Write as _;
use std::sync::Arc;

/// Render ranked ingredient search results.
pub fn format_ingredient_results(
    results: &[RecipeMatch],
    ingredients: &[String],
    mode: MatchMode,
) -> String {
    if results.is_empty() {
        let mut msg = format!(
            "No recipes found for ingredients: {} (match: {}).\n\n",
            ingredients.join(", "),
            mode
        );
        msg.push_str("Search tips:\n");
        msg.push_str("• Add more of the ingredients you have on hand\n");
        if mode == MatchMode::All {
            msg.push_str("• Use match type 'some' to include recipes you can almost make\n");
        }
        msg.push_str("• Singular and plural forms match each other: 'tomato' finds 'tomatoes'\n");
        return msg;
    }

    let mut output = format!(
        "Recipes for ingredients: {} (match: {}):\n\n",
        ingredients.join(", "),
        mode
    );

    for (idx, result) in results.iter().enumerate() {
        let label = match result.match_type {
            MatchType::Complete => "complete",
            MatchType::Partial => "partial",
        };
        let _ = writeln!(
            output,
            "{}. {} [{}] - {}% {} match",
            idx + 1,
            result.recipe.name,
            result.recipe.id,
            result.match_score,
            label
        );
        let _ = writeln!(output, "   {}", recipe_summary(&result.recipe));

        if !result.matched_ingredients.is_empty() {
            let _ = writeln!(output, "   Have: {}", result.matched_ingredients.join(", "));
        }
        if !result.missing_ingredients.is_empty() {
            let _ = writeln!(output, "   Need: {}", result.missing_ingredients.join(", "));
        }
        output.push('\n');
    }

    output
}

/// Render name search results.
pub fn format_name_results(results: &[Arc<Recipe>], query: &str) -> String {
    if results.is_empty() {
        return format!(
            "No recipes found for '{}'.\n\nTry a recipe name, a cuisine such as 'italian', or a tag such as 'quick'.\n",
            query.trim()
        );
    }

    let mut output = format!("Recipes matching '{}':\n\n", query.trim());
    for (idx, recipe) in results.iter().enumerate() {
        let _ = writeln!(output, "{}. {} [{}]", idx + 1, recipe.name, recipe.id);
        let _ = writeln!(output, "   {}", recipe.description);
        let _ = writeln!(output, "   {}", recipe_summary(recipe));
        output.push('\n');
    }

    output
}

/// Render a full recipe with ingredient availability markers.
pub fn format_recipe_detail(detail: &RecipeDetail) -> String {
    let recipe = &detail.recipe;
    let mut output = format!("# {}\n\n{}\n\n", recipe.name, recipe.description);

    let _ = writeln!(
        output,
        "Time: {} (prep {} min, cook {} min)",
        format_cooking_time(detail.total_time),
        recipe.prep_time,
        recipe.cooking_time
    );
    let _ = writeln!(output, "Servings: {}", recipe.servings);
    let _ = writeln!(output, "Difficulty: {}", recipe.difficulty);
    let _ = write!(output, "Cuisine: {}", recipe.cuisine);
    if !recipe.tags.is_empty() {
        let _ = write!(output, " | Tags: {}", recipe.tags.join(", "));
    }
    output.push_str("\n\n");

    output.push_str(if detail.is_match_view() {
        "## Ingredients (match view)\n"
    } else {
        "## Ingredients\n"
    });
    for line in &detail.ingredients {
        let marker = match line.status {
            IngredientStatus::Available => "[x] ",
            IngredientStatus::Needed => "[ ] ",
            IngredientStatus::Neutral => "- ",
        };
        let ingredient = &line.ingredient;
        let _ = write!(
            output,
            "{}{} {} {}",
            marker, ingredient.amount, ingredient.unit, ingredient.name
        );
        if ingredient.optional {
            output.push_str(" (optional)");
        }
        output.push('\n');
    }

    output.push_str("\n## Instructions\n");
    for (idx, step) in recipe.instructions.iter().enumerate() {
        let _ = writeln!(output, "{}. {}", idx + 1, step);
    }

    output
}

fn recipe_summary(recipe: &Recipe) -> String {
    format!(
        "{} | {} | {} | serves {}",
        recipe.cuisine,
        recipe.difficulty,
        format_cooking_time(recipe.total_time()),
        recipe.servings
    )
}
