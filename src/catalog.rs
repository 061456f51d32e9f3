//! The static recipe catalog and the ingredient vocabulary used for suggestions.
//!
//! A catalog is loaded once at startup, validated, and never mutated afterwards.
//! Recipes are handed out as `Arc<Recipe>` so search results can share them.

use crate::error::CatalogError;
use crate::types::Recipe;
use ahash::AHashSet;
use std::path::Path;
use std::sync::Arc;

/// Sample recipes compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../data/recipes.json");

/// Maximum number of suggestions offered for a partially typed ingredient.
pub const MAX_SUGGESTIONS: usize = 8;

/// Everyday ingredients offered as completions while the user types.
pub const COMMON_INGREDIENTS: &[&str] = &[
    "eggs", "flour", "butter", "sugar", "salt", "pepper", "garlic", "onion", "olive oil",
    "tomatoes", "cheese", "chicken", "beef", "rice", "pasta", "bread", "milk", "lemon", "herbs",
    "spices", "vegetables", "lettuce", "carrots", "potatoes", "bell peppers", "mushrooms",
    "spinach", "broccoli", "soy sauce", "vinegar", "honey", "ginger", "basil", "oregano", "thyme",
    "parsley", "cilantro", "lime", "avocado", "corn", "beans", "nuts",
];

/// An immutable, validated collection of recipes.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Arc<Recipe>>,
}

impl Catalog {
    /// Build a catalog from recipes, rejecting duplicate ids and zero servings.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        validate(&recipes)?;

        Ok(Self {
            recipes: recipes.into_iter().map(Arc::new).collect(),
        })
    }

    /// The sample catalog shipped with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// Parse a JSON array of recipes.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::new(recipes)
    }

    /// Load a JSON catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&content)?;

        tracing::info!(
            "Loaded {} recipes from {}",
            catalog.len(),
            path.display()
        );

        Ok(catalog)
    }

    /// All recipes, in catalog order.
    pub fn recipes(&self) -> &[Arc<Recipe>] {
        &self.recipes
    }

    /// Look up a recipe by id. A missing id is a "not found" for the caller to render.
    pub fn get(&self, id: &str) -> Option<Arc<Recipe>> {
        self.recipes.iter().find(|r| r.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

fn validate(recipes: &[Recipe]) -> Result<(), CatalogError> {
    let mut seen = AHashSet::with_capacity(recipes.len());
    for recipe in recipes {
        if !seen.insert(recipe.id.as_str()) {
            return Err(CatalogError::DuplicateId(recipe.id.clone()));
        }
        if recipe.servings == 0 {
            return Err(CatalogError::InvalidServings {
                id: recipe.id.clone(),
            });
        }
    }
    Ok(())
}

/// Suggest common ingredients containing `input`, skipping ones already added.
pub fn suggest_ingredients<S: AsRef<str>>(input: &str, already_added: &[S]) -> Vec<&'static str> {
    if input.is_empty() {
        return vec![];
    }

    let needle = input.to_lowercase();
    COMMON_INGREDIENTS
        .iter()
        .copied()
        .filter(|candidate| candidate.contains(&needle))
        .filter(|candidate| !already_added.iter().any(|added| added.as_ref() == *candidate))
        .take(MAX_SUGGESTIONS)
        .collect()
}
