mod client;
mod error;
mod types;

pub use client::{MealDb, MealDbConfig, SearchOutcome};
pub use error::MealDbError;
pub use types::{CategorySummary, MealSummary, RecipeDetail, INGREDIENT_SLOTS};
