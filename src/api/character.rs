//! Character Endpoint
//!
//! `GET {base}/character?page={n}` via reqwest (fetch on wasm32).

use async_trait::async_trait;
use crate::error::ApiError;
use crate::models::CharacterPage;
use super::PageSource;

#[derive(Debug, Clone)]
pub struct CharacterApi {
    client: reqwest::Client,
    base_url: String,
}

impl CharacterApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn page_url(&self, page: u32) -> String {
        format!("{}/character?page={}", self.base_url.trim_end_matches('/'), page)
    }
}

#[async_trait(?Send)]
impl PageSource for CharacterApi {
    async fn fetch_page(&self, page: u32) -> Result<CharacterPage, ApiError> {
        let url = self.page_url(page);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16(), url });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url() {
        let api = CharacterApi::new("https://rickandmortyapi.com/api");
        assert_eq!(api.page_url(1), "https://rickandmortyapi.com/api/character?page=1");

        let api = CharacterApi::new("http://localhost:8080/api/");
        assert_eq!(api.page_url(7), "http://localhost:8080/api/character?page=7");
    }
}
