use std::future::Future;

use gloo::net::http::Request;
use jeopardy_core as trivia;
use trivia::{CategoryId, CategoryPayload, CategorySummary, Coord, NetworkError, TriviaSource};
use serde::de::DeserializeOwned;

use crate::utils::js_random_below;

/// HTTP client for a jService-compatible trivia API.
#[derive(Clone, Debug, PartialEq)]
pub struct JServiceClient {
    base: String,
    max_offset: u32,
}

impl JServiceClient {
    pub const DEFAULT_BASE: &'static str = "https://jservice.io";
    pub const DEFAULT_MAX_OFFSET: u32 = 18000;

    pub fn new(base: impl Into<String>, max_offset: u32) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base, max_offset }
    }

    pub fn categories_url(&self, count: Coord, offset: u32) -> String {
        format!("{}/api/categories?count={}&offset={}", self.base, count, offset)
    }

    pub fn category_url(&self, id: CategoryId) -> String {
        format!("{}/api/category?id={}", self.base, id)
    }
}

impl Default for JServiceClient {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE, Self::DEFAULT_MAX_OFFSET)
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, NetworkError> {
    log::trace!("GET {}", url);
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| NetworkError::Transport(err.to_string()))?;

    if !response.ok() {
        log::debug!("GET {} -> {}", url, response.status());
        return Err(NetworkError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|err| NetworkError::Decode(err.to_string()))
}

impl TriviaSource for JServiceClient {
    fn category_ids(&self, count: Coord) -> impl Future<Output = Result<Vec<CategoryId>, NetworkError>> {
        let url = self.categories_url(count, js_random_below(self.max_offset));
        async move {
            let summaries: Vec<CategorySummary> = get_json(&url).await?;
            Ok(summaries.into_iter().map(|summary| summary.id).collect())
        }
    }

    fn category(
        &self,
        id: CategoryId,
        clue_count: Coord,
    ) -> impl Future<Output = Result<trivia::Category, NetworkError>> {
        let url = self.category_url(id);
        async move {
            let payload: CategoryPayload = get_json(&url).await?;
            Ok(payload.into_category(clue_count))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_jservice_layout() {
        let client = JServiceClient::default();

        assert_eq!(
            client.categories_url(6, 120),
            "https://jservice.io/api/categories?count=6&offset=120"
        );
        assert_eq!(client.category_url(11531), "https://jservice.io/api/category?id=11531");
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let client = JServiceClient::new("http://localhost:3000//", 0);

        assert_eq!(
            client.categories_url(6, 0),
            "http://localhost:3000/api/categories?count=6&offset=0"
        );
    }
}
