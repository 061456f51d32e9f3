//! Ingredient matching and recipe ranking.
//!
//! Everything here is a pure function over an immutable catalog slice:
//! normalization, matching, scoring, and the two search entry points.

pub mod ingredients;
pub mod matcher;
pub mod name;
pub mod normalize;
pub mod scoring;

pub use ingredients::search_by_ingredients;
pub use matcher::{IngredientMatches, find_matches, ingredient_matches};
pub use name::search_by_name;
pub use normalize::normalize;
pub use scoring::score;
