use axum::extract::{Query, State};
use axum::response::IntoResponse;
use mealprep_mealdb::{CategorySummary, MealDbError, MealSummary, SearchOutcome};
use serde::Deserialize;

use crate::routes::AppState;
use crate::template::render;

/// Number of category tiles shown on the start page.
const CATEGORY_TILES: usize = 8;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub random: Option<String>,
}

pub struct CategoryTile {
    pub name: String,
    pub thumbnail: String,
    pub href: String,
}

pub struct RecipeCard {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub category: Option<String>,
    pub area: Option<String>,
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub categories: Vec<CategoryTile>,
    pub categories_failed: bool,
    pub show_results: bool,
    pub cards: Vec<RecipeCard>,
    pub results_notice: Option<String>,
    pub results_error: Option<String>,
}

/// Shape category records for the tile grid: first eight, each
/// linking back to a category search.
fn category_tiles(categories: Vec<CategorySummary>) -> Vec<CategoryTile> {
    categories
        .into_iter()
        .take(CATEGORY_TILES)
        .map(|category| CategoryTile {
            href: format!("/?category={}", urlencoding::encode(&category.name)),
            thumbnail: category.thumbnail.unwrap_or_default(),
            name: category.name,
        })
        .collect()
}

pub(crate) fn recipe_cards(meals: Vec<MealSummary>) -> Vec<RecipeCard> {
    meals
        .into_iter()
        .map(|meal| RecipeCard {
            id: meal.id,
            name: meal.name,
            thumbnail: meal.thumbnail.unwrap_or_default(),
            category: meal.category,
            area: meal.area,
        })
        .collect()
}

pub async fn page(
    State(app): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let (categories, categories_failed) = match app.mealdb.categories().await {
        Ok(categories) => (category_tiles(categories), false),
        Err(err) => {
            tracing::error!(error = %err, "failed to load categories");
            (Vec::new(), true)
        }
    };

    let mut template = IndexTemplate {
        categories,
        categories_failed,
        show_results: false,
        cards: Vec::new(),
        results_notice: None,
        results_error: None,
    };

    let search = if let Some(category) = params
        .category
        .as_deref()
        .filter(|category| !category.trim().is_empty())
    {
        Some(app.mealdb.search_by_category(category).await)
    } else if let Some(query) = params.q.as_deref() {
        Some(app.mealdb.search_by_name(query).await)
    } else if params.random.is_some() {
        Some(app.mealdb.random().await)
    } else {
        None
    };

    if let Some(result) = search {
        template.show_results = true;
        match result {
            Ok(SearchOutcome::Found(meals)) => template.cards = recipe_cards(meals),
            Ok(SearchOutcome::NoResults) => {
                template.results_notice =
                    Some("No recipes found. Try another search term!".to_string());
            }
            Err(MealDbError::EmptyQuery) => {
                template.results_notice = Some("Please enter a search term.".to_string());
            }
            Err(err) => {
                tracing::error!(error = %err, "recipe search failed");
                template.results_error = Some(
                    "The recipe service could not be reached. Please try again later.".to_string(),
                );
            }
        }
    }

    render(template)
}
