use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use trivia_core::{self as trivia, CategoryData, CategoryId, CategorySummary, GameError};

/// HTTP client for a jService-compatible trivia API.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct JService {
    base_url: String,
}

impl JService {
    pub(crate) const DEFAULT_BASE_URL: &'static str = "https://jservice.io";

    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn categories_url(&self, count: u8) -> String {
        format!("{}/api/categories?count={}", self.base_url, count)
    }

    fn category_url(&self, id: CategoryId) -> String {
        format!("{}/api/category?id={}", self.base_url, id)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> trivia::Result<T> {
        log::debug!("GET {}", url);
        let response = Request::get(url).send().await.map_err(data_source_error)?;

        if !response.ok() {
            return Err(GameError::DataSource(format!(
                "{} answered {} {}",
                url,
                response.status(),
                response.status_text()
            )));
        }

        response.json::<T>().await.map_err(data_source_error)
    }
}

impl Default for JService {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}

impl trivia::TriviaProvider for JService {
    async fn list_categories(&self, count: u8) -> trivia::Result<Vec<CategorySummary>> {
        self.get_json(&self.categories_url(count)).await
    }

    async fn get_category(&self, id: CategoryId) -> trivia::Result<CategoryData> {
        self.get_json(&self.category_url(id)).await
    }
}

fn data_source_error(err: gloo::net::Error) -> GameError {
    GameError::DataSource(err.to_string())
}
