use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

/// Render an askama template to a response; rendering failures become
/// a plain 500 instead of a panic.
pub fn render<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render template");
            (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct NotFoundTemplate {
    pub status_code: u16,
    pub error_title: String,
    pub error_message: String,
}

impl Default for NotFoundTemplate {
    fn default() -> Self {
        Self {
            status_code: 404,
            error_title: "Not Found".to_string(),
            error_message: "The page you are looking for does not exist.".to_string(),
        }
    }
}

/// Router fallback for unknown paths.
pub async fn fallback() -> Response {
    let mut response = render(NotFoundTemplate::default());
    *response.status_mut() = StatusCode::NOT_FOUND;
    response
}
