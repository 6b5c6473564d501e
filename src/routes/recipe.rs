use axum::extract::{Path, State};
use axum::response::Response;
use mealprep_mealdb::RecipeDetail;
use mealprep_shopping::{extract_ingredients, Classifier};
use strum::IntoEnumIterator;

use crate::error::AppError;
use crate::routes::AppState;
use crate::template::render;

pub struct IngredientRow {
    pub measure: String,
    pub name: String,
}

#[derive(askama::Template)]
#[template(path = "recipe.html")]
pub struct RecipeTemplate {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub ingredients: Vec<IngredientRow>,
    pub instructions: Vec<String>,
    pub days: Vec<String>,
}

/// Pure view-model builder; templates only iterate what this shapes.
fn recipe_view(detail: RecipeDetail, classifier: &Classifier) -> RecipeTemplate {
    let ingredients = extract_ingredients(&detail, classifier)
        .into_iter()
        .map(|line| IngredientRow {
            measure: line.measure,
            name: line.name,
        })
        .collect();

    let instructions = detail
        .instructions
        .as_deref()
        .unwrap_or_default()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    RecipeTemplate {
        id: detail.id,
        name: detail.name,
        thumbnail: detail.thumbnail.unwrap_or_default(),
        category: detail.category,
        area: detail.area,
        ingredients,
        instructions,
        days: mealprep_shared::Weekday::iter()
            .map(|day| day.to_string())
            .collect(),
    }
}

pub async fn page(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let detail = app.mealdb.lookup(&id).await?.ok_or(AppError::NotFound)?;

    Ok(render(recipe_view(detail, &app.classifier)))
}
