use thiserror::Error;

#[derive(Debug, Error)]
pub enum MealDbError {
    /// Search query was empty after trimming. Raised before any
    /// request goes out.
    #[error("search query must not be empty")]
    EmptyQuery,

    #[error("recipe api request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response from recipe api: {0}")]
    Decode(String),
}

impl MealDbError {
    /// Split reqwest's single error type into transport vs payload
    /// failures so callers can report them distinctly.
    pub(crate) fn from_response(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Http(err)
        }
    }
}
