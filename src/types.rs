//! Recipe catalog data model and search result types.

use rmcp::schemars;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A single line of a recipe's ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
    pub unit: String,
    /// Optional ingredients never count as missing and never count toward the score.
    #[serde(default)]
    pub optional: bool,
}

impl Ingredient {
    /// Create a required ingredient.
    pub fn new(name: impl Into<String>, amount: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            unit: unit.into(),
            optional: false,
        }
    }

    /// Mark this ingredient as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        };
        f.write_str(label)
    }
}

/// A recipe in the catalog. Recipes are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    /// Cooking time in minutes
    pub cooking_time: u32,
    /// Preparation time in minutes
    pub prep_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub cuisine: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Recipe {
    /// Number of ingredients not marked optional.
    pub fn required_count(&self) -> usize {
        self.ingredients.iter().filter(|ing| !ing.optional).count()
    }

    /// Preparation plus cooking time, in minutes.
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cooking_time)
    }
}

/// Whether a recipe's required ingredients are all covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Complete,
    Partial,
}

/// Inclusion policy for ingredient search.
///
/// - `All`: only recipes with no missing required ingredient
/// - `Some`: any recipe with at least one matched ingredient
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    All,
    #[default]
    Some,
}

impl MatchMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Some => "some",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "some" => Ok(Self::Some),
            other => Err(format!("unknown match mode '{}': expected 'all' or 'some'", other)),
        }
    }
}

/// Result of matching one recipe against the user's ingredients.
///
/// Recomputed on every search; `recipe` shares the catalog's allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMatch {
    pub recipe: Arc<Recipe>,
    /// 0..=100
    pub match_score: u8,
    /// Recipe-side display names, in recipe order
    pub matched_ingredients: Vec<String>,
    /// Required recipe ingredients with no match, in recipe order
    pub missing_ingredients: Vec<String>,
    pub match_type: MatchType,
}

/// User-controlled query state.
///
/// Only `match_type` is applied by the engine. The remaining fields are carried
/// with the query but not consulted by any search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default)]
    pub match_type: MatchMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cooking_time: Option<u32>,
}

impl SearchFilters {
    pub fn with_match_type(match_type: MatchMode) -> Self {
        Self {
            match_type,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use rstest::rstest;

    #[rstest]
    #[case("all", MatchMode::All)]
    #[case("some", MatchMode::Some)]
    #[case(" ALL ", MatchMode::All)]
    fn test_match_mode_parsing(#[case] input: &str, #[case] expected: MatchMode) {
        let_assert!(Ok(mode) = input.parse::<MatchMode>());
        check!(mode == expected);
    }

    #[test]
    fn test_match_mode_rejects_unknown() {
        let_assert!(Err(msg) = "any".parse::<MatchMode>());
        check!(msg.contains("any"));
    }

    #[test]
    fn test_recipe_deserializes_camel_case() {
        let json = r#"{
            "id": "7",
            "name": "Toast",
            "description": "Bread, toasted",
            "ingredients": [
                { "name": "bread", "amount": "2", "unit": "slices" },
                { "name": "butter", "amount": "1", "unit": "tbsp", "optional": true }
            ],
            "instructions": ["Toast the bread."],
            "cookingTime": 3,
            "prepTime": 1,
            "servings": 1,
            "difficulty": "Easy",
            "cuisine": "American",
            "tags": ["breakfast"]
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        check!(recipe.cooking_time == 3);
        check!(recipe.total_time() == 4);
        check!(recipe.required_count() == 1);
        check!(recipe.image.is_none());
        check!(recipe.difficulty == Difficulty::Easy);
    }

    #[test]
    fn test_total_time_saturates() {
        let json = r#"{
            "id": "slow",
            "name": "Forever Stew",
            "description": "",
            "ingredients": [],
            "instructions": [],
            "cookingTime": 4294967295,
            "prepTime": 4294967295,
            "servings": 1,
            "difficulty": "Hard",
            "cuisine": ""
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        check!(recipe.total_time() == u32::MAX);
    }

    #[test]
    fn test_search_filters_default_to_some() {
        let filters: SearchFilters = serde_json::from_str("{}").unwrap();
        check!(filters.match_type == MatchMode::Some);
        check!(filters.cuisine.is_none());
    }
}
