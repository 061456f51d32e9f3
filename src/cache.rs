//! Session-scoped memoization of search results.
//!
//! The search engine is pure, so repeated identical queries can be answered
//! from a map. The cache is owned by whoever drives a search session (the MCP
//! server, a UI) and lives exactly as long as that session: there is no
//! eviction, only [`SearchCache::clear`].

use crate::search::{search_by_ingredients, search_by_name};
use crate::types::{MatchMode, Recipe, RecipeMatch};
use ahash::AHashMap;
use std::sync::Arc;

/// Key for ingredient searches: the terms as given, in order, plus the mode.
type IngredientKey = (Box<[String]>, MatchMode);

/// Memoized results for one search session over one catalog.
///
/// Results are keyed on raw input, so `["Eggs"]` and `["eggs"]` are separate entries.
/// Using one cache with two different catalogs returns stale results.
#[derive(Debug, Default)]
pub struct SearchCache {
    by_ingredients: AHashMap<IngredientKey, Arc<[RecipeMatch]>>,
    by_name: AHashMap<String, Arc<[Arc<Recipe>]>>,
}

impl SearchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingredient search results, computed on first request.
    pub fn ingredients<S: AsRef<str>>(
        &mut self,
        catalog: &[Arc<Recipe>],
        search_terms: &[S],
        mode: MatchMode,
    ) -> Arc<[RecipeMatch]> {
        let terms: Box<[String]> = search_terms
            .iter()
            .map(|term| term.as_ref().to_string())
            .collect();
        let key = (terms, mode);

        if let Some(hit) = self.by_ingredients.get(&key) {
            tracing::debug!("Search cache hit: ingredients {:?} ({})", key.0, mode);
            return Arc::clone(hit);
        }

        tracing::debug!("Search cache miss: ingredients {:?} ({})", key.0, mode);
        let results: Arc<[RecipeMatch]> = search_by_ingredients(catalog, search_terms, mode).into();
        self.by_ingredients.insert(key, Arc::clone(&results));
        results
    }

    /// Name search results, computed on first request.
    pub fn by_name(&mut self, catalog: &[Arc<Recipe>], query: &str) -> Arc<[Arc<Recipe>]> {
        if let Some(hit) = self.by_name.get(query) {
            tracing::debug!("Search cache hit: name '{}'", query);
            return Arc::clone(hit);
        }

        tracing::debug!("Search cache miss: name '{}'", query);
        let results: Arc<[Arc<Recipe>]> = search_by_name(catalog, query).into();
        self.by_name.insert(query.to_string(), Arc::clone(&results));
        results
    }

    /// Number of memoized queries across both search kinds.
    pub fn len(&self) -> usize {
        self.by_ingredients.len() + self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// End the session: drop every memoized result.
    pub fn clear(&mut self) {
        self.by_ingredients.clear();
        self.by_name.clear();
    }
}
