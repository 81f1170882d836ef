//! UI components for the recipe screen

mod empty_state;
mod recipe_card;
mod recipe_list;

pub use empty_state::EmptyState;
pub use recipe_card::RecipeCard;
pub use recipe_list::RecipeList;
