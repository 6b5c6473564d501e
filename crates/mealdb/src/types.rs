use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of parallel ingredient/measure slots carried by a recipe
/// record (`strIngredient1`..`strIngredient20`).
pub const INGREDIENT_SLOTS: usize = 20;

/// One entry of the `categories.php` listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(rename = "strCategoryThumb")]
    pub thumbnail: Option<String>,
}

/// Recipe summary as returned by search, filter and random lookups.
///
/// `filter.php` results omit category and area, so both stay optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategory", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "strArea", skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
}

/// Full recipe record from `lookup.php`.
///
/// The twenty `strIngredientN`/`strMeasureN` members land in the
/// flattened `slots` map; read them through [`RecipeDetail::ingredient`]
/// and [`RecipeDetail::measure`]. A slot's measure is meaningless when
/// its ingredient is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDetail {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(flatten)]
    slots: BTreeMap<String, Option<String>>,
}

impl RecipeDetail {
    /// Raw ingredient of `slot` (1-based), if present and non-null.
    pub fn ingredient(&self, slot: usize) -> Option<&str> {
        self.slot_value("strIngredient", slot)
    }

    /// Raw measure of `slot` (1-based), if present and non-null.
    pub fn measure(&self, slot: usize) -> Option<&str> {
        self.slot_value("strMeasure", slot)
    }

    fn slot_value(&self, prefix: &str, slot: usize) -> Option<&str> {
        self.slots
            .get(&format!("{prefix}{slot}"))
            .and_then(|value| value.as_deref())
    }
}
