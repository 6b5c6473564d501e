use mealprep_mealdb::{RecipeDetail, INGREDIENT_SLOTS};

use crate::categorization::Classifier;

/// One shopping-list line, derived from a recipe slot. Immutable once
/// created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientLine {
    pub name: String,
    pub measure: String,
    pub category: String,
}

/// Normalize a recipe's numbered ingredient/measure slots into lines.
///
/// Slots are read in ascending order; a slot whose ingredient is
/// absent or blank is skipped entirely, whatever its measure says.
pub fn extract_ingredients(recipe: &RecipeDetail, classifier: &Classifier) -> Vec<IngredientLine> {
    let mut lines = Vec::new();

    for slot in 1..=INGREDIENT_SLOTS {
        let Some(ingredient) = recipe.ingredient(slot) else {
            continue;
        };
        let name = ingredient.trim();
        if name.is_empty() {
            continue;
        }

        let measure = recipe.measure(slot).map(str::trim).unwrap_or_default();
        lines.push(IngredientLine {
            name: name.to_string(),
            measure: measure.to_string(),
            category: classifier.classify(name).to_string(),
        });
    }

    lines
}
