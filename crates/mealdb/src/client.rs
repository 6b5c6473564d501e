use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::MealDbError;
use crate::types::{CategorySummary, MealSummary, RecipeDetail};

fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_connect_timeout_secs() -> u64 {
    5
}

#[derive(Debug, Clone, Deserialize)]
pub struct MealDbConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for MealDbConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

/// Outcome of a search request. An upstream `meals: null` (or empty
/// list) is not a failure; it renders as an informational empty state.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Found(Vec<MealSummary>),
    NoResults,
}

#[derive(Deserialize)]
struct MealsEnvelope<T> {
    meals: Option<Vec<T>>,
}

#[derive(Deserialize)]
struct CategoriesEnvelope {
    categories: Option<Vec<CategorySummary>>,
}

/// Client for the TheMealDB JSON API.
///
/// Wraps one pooled `reqwest` client; cheap to clone and share across
/// handlers.
#[derive(Debug, Clone)]
pub struct MealDb {
    http: reqwest::Client,
    base_url: String,
}

impl MealDb {
    pub fn new(config: &MealDbConfig) -> Result<Self, MealDbError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search recipes by name. Fails fast with
    /// [`MealDbError::EmptyQuery`] when `query` trims to empty; no
    /// request is issued in that case.
    pub async fn search_by_name(&self, query: &str) -> Result<SearchOutcome, MealDbError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(MealDbError::EmptyQuery);
        }

        let meals = self.meals("search.php", ("s", query)).await?;
        Ok(Self::outcome(meals))
    }

    pub async fn search_by_category(&self, category: &str) -> Result<SearchOutcome, MealDbError> {
        let meals = self.meals("filter.php", ("c", category)).await?;
        Ok(Self::outcome(meals))
    }

    pub async fn random(&self) -> Result<SearchOutcome, MealDbError> {
        let meals = self.meals("random.php", ("", "")).await?;
        Ok(Self::outcome(meals))
    }

    pub async fn categories(&self) -> Result<Vec<CategorySummary>, MealDbError> {
        let url = format!("{}/categories.php", self.base_url);
        tracing::debug!(url = %url, "fetching categories");

        let envelope: CategoriesEnvelope = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(MealDbError::from_response)?;

        Ok(envelope.categories.unwrap_or_default())
    }

    /// Fetch full detail for one recipe id. Unknown ids come back as
    /// `meals: null` upstream and map to `None`.
    pub async fn lookup(&self, id: &str) -> Result<Option<RecipeDetail>, MealDbError> {
        let meals: Option<Vec<RecipeDetail>> = self.meals("lookup.php", ("i", id)).await?;
        Ok(meals.and_then(|mut meals| {
            if meals.is_empty() {
                None
            } else {
                Some(meals.remove(0))
            }
        }))
    }

    async fn meals<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        param: (&str, &str),
    ) -> Result<Option<Vec<T>>, MealDbError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!(url = %url, param = param.0, "fetching meals");

        let mut request = self.http.get(&url);
        if !param.0.is_empty() {
            request = request.query(&[param]);
        }

        let envelope: MealsEnvelope<T> = request
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(MealDbError::from_response)?;

        Ok(envelope.meals)
    }

    fn outcome(meals: Option<Vec<MealSummary>>) -> SearchOutcome {
        match meals {
            Some(meals) if !meals.is_empty() => SearchOutcome::Found(meals),
            _ => SearchOutcome::NoResults,
        }
    }
}
