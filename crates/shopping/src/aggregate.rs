use async_trait::async_trait;
use mealprep_mealdb::{MealDb, RecipeDetail};
use mealprep_shared::WeekPlan;

use crate::categorization::Classifier;
use crate::extract::{extract_ingredients, IngredientLine};

/// Where the aggregator fetches recipe details from. Implemented by
/// the live API client; tests substitute a stub.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn recipe(&self, id: &str) -> anyhow::Result<Option<RecipeDetail>>;
}

#[async_trait]
impl RecipeSource for MealDb {
    async fn recipe(&self, id: &str) -> anyhow::Result<Option<RecipeDetail>> {
        Ok(self.lookup(id).await?)
    }
}

/// Ingredient lines of one grocery aisle, in encounter order.
#[derive(Debug, Clone)]
pub struct CategoryGroup {
    pub label: String,
    pub items: Vec<IngredientLine>,
}

#[derive(Debug, Clone)]
pub struct ShoppingList {
    /// Groups in first-seen category order.
    pub groups: Vec<CategoryGroup>,
    pub total_items: usize,
    /// Planned meals that could not be loaded and were left out.
    pub skipped_meals: usize,
}

#[derive(Debug, Clone)]
pub enum ShoppingListOutcome {
    /// The plan holds no meals at all; callers render a
    /// call-to-action, not an error.
    EmptyPlan,
    List(ShoppingList),
}

/// Build the grouped shopping list for a week plan.
///
/// Meals are fetched sequentially in plan order (days Monday-first,
/// within-day order kept). A meal that fails to load or no longer
/// exists is skipped and counted, never escalated: partial results are
/// acceptable. Repeated meal ids are fetched and counted again each
/// time. Grouping is a stable group-by on category: first-seen label
/// order, encounter order within a label.
pub async fn build_shopping_list<S>(
    plan: &WeekPlan,
    source: &S,
    classifier: &Classifier,
) -> ShoppingListOutcome
where
    S: RecipeSource + ?Sized,
{
    let meals = plan.flatten();
    if meals.is_empty() {
        return ShoppingListOutcome::EmptyPlan;
    }

    let mut lines: Vec<IngredientLine> = Vec::new();
    let mut skipped_meals = 0;

    for meal in &meals {
        match source.recipe(&meal.id).await {
            Ok(Some(recipe)) => lines.extend(extract_ingredients(&recipe, classifier)),
            Ok(None) => {
                tracing::warn!(meal = %meal.id, "planned recipe no longer exists, skipping");
                skipped_meals += 1;
            }
            Err(err) => {
                tracing::warn!(meal = %meal.id, error = %err, "failed to load planned recipe, skipping");
                skipped_meals += 1;
            }
        }
    }

    let total_items = lines.len();
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for line in lines {
        match groups.iter_mut().find(|g| g.label == line.category) {
            Some(group) => group.items.push(line),
            None => groups.push(CategoryGroup {
                label: line.category.clone(),
                items: vec![line],
            }),
        }
    }

    ShoppingListOutcome::List(ShoppingList {
        groups,
        total_items,
        skipped_meals,
    })
}
