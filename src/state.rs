//! Shared state for a search session.

use crate::cache::SearchCache;
use crate::catalog::Catalog;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The catalog plus the session cache that memoizes searches over it.
///
/// One `RecipeState` is one search session: the cache lives and dies with it.
pub struct RecipeState {
    catalog: Arc<Catalog>,
    cache: Mutex<SearchCache>,
}

impl std::fmt::Debug for RecipeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeState")
            .field("recipes", &self.catalog.len())
            .field("cached_queries", &self.cache.try_lock().map(|c| c.len()).ok())
            .finish()
    }
}

impl RecipeState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            cache: Mutex::new(SearchCache::new()),
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Exclusive access to the session cache.
    pub async fn cache(&self) -> tokio::sync::MutexGuard<'_, SearchCache> {
        self.cache.lock().await
    }

    /// Drop all memoized results.
    pub async fn clear_cache(&self) {
        self.cache.lock().await.clear();
    }
}
