use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use mealprep_mealdb::MealDbError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation error: {0}")]
    ValidationError(String),

    #[error("recipe api error: {0}")]
    UpstreamError(#[from] MealDbError),

    #[error("not found")]
    NotFound,

    #[error("internal server error")]
    InternalError(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPageTemplate {
    status_code: u16,
    error_title: String,
    error_message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_display = self.to_string();
        let (status_code, error_title, error_message) = match self {
            AppError::ValidationError(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation Error".to_string(),
                msg,
            ),
            AppError::UpstreamError(MealDbError::EmptyQuery) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation Error".to_string(),
                "Please enter a search term.".to_string(),
            ),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                "Not Found".to_string(),
                "The requested recipe could not be found.".to_string(),
            ),
            AppError::UpstreamError(err) => {
                tracing::error!("Recipe api error: {err}");
                (
                    StatusCode::BAD_GATEWAY,
                    "Recipe Service Unavailable".to_string(),
                    "The recipe service could not be reached. Please try again later.".to_string(),
                )
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
        };

        let template = ErrorPageTemplate {
            status_code: status_code.as_u16(),
            error_title,
            error_message,
        };

        match template.render() {
            Ok(html) => (status_code, Html(html)).into_response(),
            Err(err) => {
                tracing::error!("Failed to render error page: {err:?}");
                (status_code, error_display).into_response()
            }
        }
    }
}
