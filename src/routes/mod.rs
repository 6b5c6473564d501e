use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use mealprep_mealdb::MealDb;
use mealprep_shopping::Classifier;

mod api;
mod health;
mod index;
mod recipe;
mod shopping_list;
mod week_plan;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mealdb: MealDb,
    pub classifier: Arc<Classifier>,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/recipe/{id}", get(recipe::page))
        .route("/week-plan", get(week_plan::page))
        .route("/week-plan/add", post(week_plan::add))
        .route("/week-plan/remove", post(week_plan::remove))
        .route("/shopping-list", get(shopping_list::page))
        .route("/shopping-list/add", post(shopping_list::add_manual))
        .route("/shopping-list/clear", post(shopping_list::clear))
        .route("/api/categories", get(api::categories))
        .route("/api/search", post(api::search))
        .route("/api/random", get(api::random))
        .route("/api/recipe/{id}", get(api::recipe))
        .route("/static/{*path}", get(crate::assets::serve))
        .fallback(crate::template::fallback)
        .with_state(app_state)
}
