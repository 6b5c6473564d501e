use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::CookieJar;
use mealprep_shopping::{build_shopping_list, ShoppingList, ShoppingListOutcome};
use serde::Deserialize;

use crate::plan_store;
use crate::routes::AppState;
use crate::template::render;

pub struct ItemView {
    pub checkbox_id: String,
    pub measure: String,
    pub name: String,
}

pub struct GroupView {
    pub label: String,
    pub items: Vec<ItemView>,
}

#[derive(askama::Template)]
#[template(path = "shopping_list.html")]
pub struct ShoppingListTemplate {
    pub empty_plan: bool,
    pub groups: Vec<GroupView>,
    pub total_items: usize,
    pub skipped_meals: usize,
    pub added_item: Option<String>,
    pub invalid_item: bool,
}

fn list_view(list: ShoppingList) -> (Vec<GroupView>, usize, usize) {
    let groups = list
        .groups
        .into_iter()
        .enumerate()
        .map(|(group_index, group)| GroupView {
            label: group.label,
            items: group
                .items
                .into_iter()
                .enumerate()
                .map(|(item_index, item)| ItemView {
                    checkbox_id: format!("item-{group_index}-{item_index}"),
                    measure: item.measure,
                    name: item.name,
                })
                .collect(),
        })
        .collect();

    (groups, list.total_items, list.skipped_meals)
}

#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub added: Option<String>,
    pub invalid: Option<String>,
}

pub async fn page(
    State(app): State<AppState>,
    Query(params): Query<PageParams>,
    jar: CookieJar,
) -> Response {
    let plan = plan_store::load(&jar);
    let outcome = build_shopping_list(&plan, &app.mealdb, &app.classifier).await;

    let mut template = ShoppingListTemplate {
        empty_plan: false,
        groups: Vec::new(),
        total_items: 0,
        skipped_meals: 0,
        added_item: params.added,
        invalid_item: params.invalid.is_some(),
    };

    match outcome {
        ShoppingListOutcome::EmptyPlan => template.empty_plan = true,
        ShoppingListOutcome::List(list) => {
            (template.groups, template.total_items, template.skipped_meals) = list_view(list);
        }
    }

    render(template)
}

#[derive(Debug, Deserialize)]
pub struct ManualItemForm {
    pub item: String,
}

/// Manual items are an admitted stub: the entry is acknowledged on
/// the page but nothing is stored.
pub async fn add_manual(Form(form): Form<ManualItemForm>) -> impl IntoResponse {
    let item = form.item.trim();
    if item.is_empty() {
        return Redirect::to("/shopping-list?invalid=1");
    }

    Redirect::to(&format!(
        "/shopping-list?added={}",
        urlencoding::encode(item)
    ))
}

/// Clearing the list wipes the stored week plan.
pub async fn clear(jar: CookieJar) -> impl IntoResponse {
    (plan_store::clear(jar), Redirect::to("/shopping-list"))
}
