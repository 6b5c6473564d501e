use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mealprep_mealdb::{MealDbError, SearchOutcome};
use serde::Deserialize;
use serde_json::json;

use crate::routes::AppState;

/// JSON API mirroring the upstream envelopes: `{"meals": [...]|null}`
/// and `{"categories": [...]}`; upstream failures become
/// `{"error": ...}` with status 500.

fn upstream_error(err: MealDbError) -> Response {
    tracing::error!(error = %err, "api proxy request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": err.to_string() })),
    )
        .into_response()
}

fn meals_envelope(outcome: SearchOutcome) -> Response {
    let meals = match outcome {
        SearchOutcome::Found(meals) => json!(meals),
        SearchOutcome::NoResults => json!(null),
    };
    Json(json!({ "meals": meals })).into_response()
}

pub async fn categories(State(app): State<AppState>) -> Response {
    match app.mealdb.categories().await {
        Ok(categories) => Json(json!({ "categories": categories })).into_response(),
        Err(err) => upstream_error(err),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchBody {
    pub query: String,
    pub category: String,
}

pub async fn search(State(app): State<AppState>, Json(body): Json<SearchBody>) -> Response {
    let result = if !body.category.trim().is_empty() {
        app.mealdb.search_by_category(&body.category).await
    } else if !body.query.trim().is_empty() {
        app.mealdb.search_by_name(&body.query).await
    } else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Query or category required" })),
        )
            .into_response();
    };

    match result {
        Ok(outcome) => meals_envelope(outcome),
        Err(MealDbError::EmptyQuery) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Query or category required" })),
        )
            .into_response(),
        Err(err) => upstream_error(err),
    }
}

pub async fn random(State(app): State<AppState>) -> Response {
    match app.mealdb.random().await {
        Ok(outcome) => meals_envelope(outcome),
        Err(err) => upstream_error(err),
    }
}

pub async fn recipe(State(app): State<AppState>, Path(id): Path<String>) -> Response {
    match app.mealdb.lookup(&id).await {
        Ok(Some(detail)) => Json(json!({ "meals": [detail] })).into_response(),
        Ok(None) => Json(json!({ "meals": null })).into_response(),
        Err(err) => upstream_error(err),
    }
}
