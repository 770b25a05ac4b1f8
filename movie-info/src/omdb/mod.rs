mod api_key;
mod query;
mod response;

pub use api_key::{ApiKey, DEFAULT_API_KEY};
pub use query::OmdbQuery;
pub use response::{ResponseStatus, TitleRecord};

use crate::error::{Error, Result};
use crate::source::MovieSource;
use async_trait::async_trait;
use log::debug;
use serde_json::Value;
use surf::Client;
use utils::query::build_url;
use utils::surf_logging::SurfLogging;

pub const OMDB_URL: &str = "https://www.omdbapi.com/";
const API_KEY_PARAM: &str = "apikey";

/// HTTP client for the OMDb API.
#[derive(Clone)]
pub struct OmdbClient {
    http: Client,
    base_url: String,
    api_key: ApiKey,
}

impl OmdbClient {
    pub fn new<S: Into<String>>(base_url: S, api_key: ApiKey) -> Self {
        Self {
            http: Client::new().with(SurfLogging::redacting(&[API_KEY_PARAM])),
            base_url: base_url.into(),
            api_key,
        }
    }

    fn request_url(&self, query: &OmdbQuery) -> Result<String> {
        let api_key = self.api_key.get().ok_or(Error::MissingApiKey)?;

        let mut params = vec![(API_KEY_PARAM, api_key.to_string())];
        params.extend(query.params());

        let url = build_url(&self.base_url, &params).map_err(Error::transport)?;
        Ok(url.to_string())
    }
}

impl Default for OmdbClient {
    fn default() -> Self {
        Self::new(OMDB_URL, ApiKey::default())
    }
}

#[async_trait]
impl MovieSource for OmdbClient {
    async fn fetch(&self, query: &OmdbQuery) -> Result<Value> {
        let url = self.request_url(query)?;

        let mut response = self.http.get(&url).await.map_err(Error::transport)?;
        if !response.status().is_success() {
            debug!("OMDb answered {} for {:?}", response.status(), query);
            return Err(Error::transport(format!(
                "unexpected status {}",
                response.status()
            )));
        }

        response
            .body_json::<Value>()
            .await
            .map_err(Error::transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(query: &str) -> OmdbQuery {
        OmdbQuery::Search {
            query: query.to_string(),
        }
    }

    #[test]
    fn test_request_url() {
        let client = OmdbClient::new(OMDB_URL, ApiKey::resolve(Some("k3y".to_string())));
        let url = client.request_url(&search("the matrix")).unwrap();

        assert_eq!(url, "https://www.omdbapi.com/?apikey=k3y&s=the+matrix");
    }

    #[test]
    fn test_request_url_for_title_seed() {
        let client = OmdbClient::default();
        let url = client
            .request_url(&OmdbQuery::TitleSeed {
                seed: 'a',
                year: "2024".to_string(),
                plot: "full".to_string(),
            })
            .unwrap();

        assert_eq!(
            url,
            format!(
                "https://www.omdbapi.com/?apikey={}&t=a&y=2024&plot=full",
                DEFAULT_API_KEY
            )
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_request() {
        let client = OmdbClient::new(OMDB_URL, ApiKey::resolve(Some(String::new())));
        let err = client.fetch(&search("heat")).await.unwrap_err();

        assert_eq!(err, Error::MissingApiKey);
    }

    #[tokio::test]
    async fn test_invalid_base_url() {
        let client = OmdbClient::new("not a url", ApiKey::default());
        let err = client.fetch(&search("heat")).await.unwrap_err();

        assert!(matches!(err, Error::Transport(_)));
    }

    #[tokio::test]
    async fn test_unreachable_upstream() {
        // Nothing listens on the discard port
        let client = OmdbClient::new("http://127.0.0.1:9/", ApiKey::default());
        let err = client.fetch(&search("heat")).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to fetch data from OMDB API");
    }
}
