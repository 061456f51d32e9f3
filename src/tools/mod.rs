pub mod get_recipe;
pub mod search_ingredients;
pub mod search_name;
pub mod suggest;

pub use get_recipe::*;
pub use search_ingredients::*;
pub use search_name::*;
pub use suggest::*;
