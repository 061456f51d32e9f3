pub mod cache;
pub mod catalog;
pub mod cli;
pub mod detail;
pub mod error;
pub mod format;
pub mod logging;
pub mod pantry;
pub mod search;
pub mod server;
pub mod state;
pub mod tools;
pub mod types;

pub use cache::SearchCache;
pub use catalog::Catalog;
pub use detail::{IngredientStatus, RecipeDetail};
pub use error::CatalogError;
pub use pantry::Pantry;
pub use search::{search_by_ingredients, search_by_name};
pub use server::RecipeServer;
pub use state::RecipeState;
pub use types::{
    Difficulty, Ingredient, MatchMode, MatchType, Recipe, RecipeMatch, SearchFilters,
};
