use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::CookieJar;
use mealprep_shared::{MealRef, Weekday};
use serde::Deserialize;
use strum::IntoEnumIterator;

use crate::plan_store;
use crate::routes::AppState;
use crate::template::render;

pub struct PlannedMeal {
    pub index: usize,
    pub id: String,
    pub title: String,
}

pub struct DayView {
    pub name: String,
    pub meals: Vec<PlannedMeal>,
}

#[derive(askama::Template)]
#[template(path = "week_plan.html")]
pub struct WeekPlanTemplate {
    pub days: Vec<DayView>,
    pub is_empty: bool,
}

pub async fn page(State(app): State<AppState>, jar: CookieJar) -> Response {
    let plan = plan_store::load(&jar);

    let mut days = Vec::new();
    for day in Weekday::iter() {
        let mut meals = Vec::new();
        for (index, meal) in plan.meals_for(day).iter().enumerate() {
            meals.push(PlannedMeal {
                index,
                id: meal.id.clone(),
                title: meal_title(&app, &meal.id).await,
            });
        }
        days.push(DayView {
            name: day.to_string(),
            meals,
        });
    }

    render(WeekPlanTemplate {
        is_empty: plan.is_empty(),
        days,
    })
}

/// Resolve a planned meal's display name; a meal that cannot be
/// loaded falls back to its id rather than failing the page.
async fn meal_title(app: &AppState, id: &str) -> String {
    match app.mealdb.lookup(id).await {
        Ok(Some(detail)) => detail.name,
        Ok(None) => {
            tracing::warn!(meal = %id, "planned recipe no longer exists");
            format!("Recipe {id}")
        }
        Err(err) => {
            tracing::warn!(meal = %id, error = %err, "failed to resolve planned recipe name");
            format!("Recipe {id}")
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub day: Weekday,
    pub id: String,
}

pub async fn add(jar: CookieJar, Form(form): Form<AddForm>) -> impl IntoResponse {
    let mut plan = plan_store::load(&jar);
    plan.add(form.day, MealRef::new(form.id));

    (plan_store::store(jar, &plan), Redirect::to("/week-plan"))
}

#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    pub day: Weekday,
    pub index: usize,
}

pub async fn remove(jar: CookieJar, Form(form): Form<RemoveForm>) -> impl IntoResponse {
    let mut plan = plan_store::load(&jar);
    plan.remove(form.day, form.index);

    (plan_store::store(jar, &plan), Redirect::to("/week-plan"))
}
