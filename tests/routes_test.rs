use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mealprep::config::{Config, ObservabilityConfig, ServerConfig};
use mealprep::routes::{self, AppState};
use mealprep_mealdb::{MealDb, MealDbConfig};
use mealprep_shared::{MealRef, WeekPlan, Weekday};
use mealprep_shopping::Classifier;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_for(server: &MockServer) -> Router {
    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        mealdb: MealDbConfig {
            base_url: server.uri(),
            ..MealDbConfig::default()
        },
        observability: ObservabilityConfig::default(),
    };
    let mealdb = MealDb::new(&config.mealdb).unwrap();

    routes::router(AppState {
        config,
        mealdb,
        classifier: Arc::new(Classifier::default()),
    })
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn plan_cookie(plan: &WeekPlan) -> String {
    let json = serde_json::to_string(plan).unwrap();
    format!("week_plan={}", urlencoding::encode(&json))
}

async fn mock_categories(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/categories.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "categories": [
                { "strCategory": "Beef", "strCategoryThumb": "https://example.test/beef.png" },
                { "strCategory": "Chicken", "strCategoryThumb": null },
            ]
        })))
        .mount(server)
        .await;
}

fn teriyaki_detail() -> serde_json::Value {
    serde_json::json!({
        "meals": [
            {
                "idMeal": "52772",
                "strMeal": "Teriyaki Chicken Casserole",
                "strMealThumb": null,
                "strCategory": "Chicken",
                "strArea": "Japanese",
                "strInstructions": "Preheat oven to 350.\nCombine and bake.",
                "strIngredient1": "Chicken",
                "strMeasure1": "500g",
                "strIngredient2": "Garlic",
                "strMeasure2": "2 cloves",
                "strIngredient3": "",
                "strMeasure3": "",
            },
        ]
    })
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let server = MockServer::start().await;
    let response = app_for(&server)
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("ok"));
}

#[tokio::test]
async fn start_page_renders_category_tiles() {
    let server = MockServer::start().await;
    mock_categories(&server).await;

    let response = app_for(&server)
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Beef"));
    assert!(body.contains("/?category=Chicken"));
}

#[tokio::test]
async fn start_page_survives_category_outage() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories.php"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let response = app_for(&server)
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Could not load categories."));
}

#[tokio::test]
async fn whitespace_query_shows_notice_without_searching() {
    let server = MockServer::start().await;
    mock_categories(&server).await;

    let response = app_for(&server)
        .oneshot(Request::get("/?q=%20%20").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Please enter a search term."));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.url.path() != "/search.php"));
}

#[tokio::test]
async fn category_search_renders_recipe_cards() {
    let server = MockServer::start().await;
    mock_categories(&server).await;
    Mock::given(method("GET"))
        .and(path("/filter.php"))
        .and(query_param("c", "Chicken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "meals": [
                {
                    "idMeal": "52772",
                    "strMeal": "Teriyaki Chicken Casserole",
                    "strMealThumb": "https://example.test/52772.jpg",
                },
            ]
        })))
        .mount(&server)
        .await;

    let response = app_for(&server)
        .oneshot(
            Request::get("/?category=Chicken")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Teriyaki Chicken Casserole"));
    assert!(body.contains("/recipe/52772"));
}

#[tokio::test]
async fn fruitless_search_shows_empty_state() {
    let server = MockServer::start().await;
    mock_categories(&server).await;
    Mock::given(method("GET"))
        .and(path("/search.php"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "meals": null })),
        )
        .mount(&server)
        .await;

    let response = app_for(&server)
        .oneshot(Request::get("/?q=zzzzz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("No recipes found"));
    assert!(!body.contains("View recipe"));
}

#[tokio::test]
async fn recipe_page_unknown_id_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lookup.php"))
        .and(query_param("i", "0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "meals": null })),
        )
        .mount(&server)
        .await;

    let response = app_for(&server)
        .oneshot(Request::get("/recipe/0").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("could not be found"));
}

#[tokio::test]
async fn recipe_page_lists_ingredients() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lookup.php"))
        .and(query_param("i", "52772"))
        .respond_with(ResponseTemplate::new(200).set_body_json(teriyaki_detail()))
        .mount(&server)
        .await;

    let response = app_for(&server)
        .oneshot(Request::get("/recipe/52772").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Teriyaki Chicken Casserole"));
    assert!(body.contains("500g"));
    assert!(body.contains("Garlic"));
}

#[tokio::test]
async fn adding_a_meal_persists_the_plan_in_a_cookie() {
    let server = MockServer::start().await;

    let response = app_for(&server)
        .oneshot(
            Request::post("/week-plan/add")
                .header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(Body::from("day=Monday&id=52772"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/week-plan");

    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("week_plan="));
    assert!(cookie.contains("52772"));
}

#[tokio::test]
async fn week_plan_page_shows_planned_meals() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lookup.php"))
        .and(query_param("i", "52772"))
        .respond_with(ResponseTemplate::new(200).set_body_json(teriyaki_detail()))
        .mount(&server)
        .await;

    let mut plan = WeekPlan::default();
    plan.add(Weekday::Wednesday, MealRef::new("52772"));

    let response = app_for(&server)
        .oneshot(
            Request::get("/week-plan")
                .header(header::COOKIE, plan_cookie(&plan))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Teriyaki Chicken Casserole"));
    assert!(body.contains("Build shopping list"));
}

#[tokio::test]
async fn mangled_plan_cookie_renders_an_empty_plan() {
    let server = MockServer::start().await;

    let response = app_for(&server)
        .oneshot(
            Request::get("/week-plan")
                .header(header::COOKIE, "week_plan=%7Bnot-json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Your week plan is empty"));
}

#[tokio::test]
async fn shopping_list_groups_planned_ingredients() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lookup.php"))
        .and(query_param("i", "52772"))
        .respond_with(ResponseTemplate::new(200).set_body_json(teriyaki_detail()))
        .mount(&server)
        .await;

    let mut plan = WeekPlan::default();
    plan.add(Weekday::Monday, MealRef::new("52772"));

    let response = app_for(&server)
        .oneshot(
            Request::get("/shopping-list")
                .header(header::COOKIE, plan_cookie(&plan))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Meat &amp; Fish"));
    assert!(body.contains("Vegetables &amp; Fruit"));
    assert!(body.contains("Chicken"));
    assert!(body.contains("2 cloves"));
    assert!(body.contains("2 ingredients"));
}

#[tokio::test]
async fn shopping_list_reports_unloadable_meals() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lookup.php"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut plan = WeekPlan::default();
    plan.add(Weekday::Monday, MealRef::new("52772"));

    let response = app_for(&server)
        .oneshot(
            Request::get("/shopping-list")
                .header(header::COOKIE, plan_cookie(&plan))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("1 meals could not be loaded."));
    assert!(body.contains("0 ingredients"));
}

#[tokio::test]
async fn shopping_list_without_a_plan_points_to_the_planner() {
    let server = MockServer::start().await;

    let response = app_for(&server)
        .oneshot(Request::get("/shopping-list").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Add recipes to your week plan first"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn clearing_the_list_removes_the_plan_cookie() {
    let server = MockServer::start().await;

    let mut plan = WeekPlan::default();
    plan.add(Weekday::Monday, MealRef::new("52772"));

    let response = app_for(&server)
        .oneshot(
            Request::post("/shopping-list/clear")
                .header(header::COOKIE, plan_cookie(&plan))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("week_plan="));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn api_search_requires_query_or_category() {
    let server = MockServer::start().await;

    let response = app_for(&server)
        .oneshot(
            Request::post("/api/search")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Query or category required"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn api_search_returns_the_meals_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.php"))
        .and(query_param("s", "chicken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "meals": [
                {
                    "idMeal": "52772",
                    "strMeal": "Teriyaki Chicken Casserole",
                    "strMealThumb": null,
                },
            ]
        })))
        .mount(&server)
        .await;

    let response = app_for(&server)
        .oneshot(
            Request::post("/api/search")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"query":"chicken"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["meals"][0]["idMeal"], "52772");
}

#[tokio::test]
async fn api_categories_returns_the_upstream_listing() {
    let server = MockServer::start().await;
    mock_categories(&server).await;

    let response = app_for(&server)
        .oneshot(Request::get("/api/categories").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["categories"][0]["strCategory"], "Beef");
}

#[tokio::test]
async fn api_recipe_unknown_id_keeps_the_null_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lookup.php"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "meals": null })),
        )
        .mount(&server)
        .await;

    let response = app_for(&server)
        .oneshot(Request::get("/api/recipe/0").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert!(body["meals"].is_null());
}

#[tokio::test]
async fn unknown_path_falls_back_to_not_found() {
    let server = MockServer::start().await;

    let response = app_for(&server)
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("does not exist"));
}
