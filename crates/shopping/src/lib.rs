mod aggregate;
mod categorization;
mod extract;

pub use aggregate::{
    build_shopping_list, CategoryGroup, RecipeSource, ShoppingList, ShoppingListOutcome,
};
pub use categorization::{Classifier, ClassifierRule};
pub use extract::{extract_ingredients, IngredientLine};
