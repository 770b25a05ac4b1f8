use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

const FAILURE: &str = "False";

/// Shared `Response` / `Error` envelope of every OMDb answer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseStatus {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ResponseStatus {
    pub fn from_payload(payload: &Value) -> Result<Self> {
        Self::deserialize(payload).map_err(Error::transport)
    }

    pub fn is_failure(&self) -> bool {
        self.response.as_deref() == Some(FAILURE)
    }

    /// `Err(Error::Upstream)` when OMDb reported a logical failure.
    pub fn into_result(self) -> Result<()> {
        if self.is_failure() {
            let message = self
                .error
                .unwrap_or_else(|| "Unknown OMDB API error".to_string());
            return Err(Error::Upstream(message));
        }
        Ok(())
    }
}

/// Answer to a `t=` title lookup. Only the fields the listing needs are kept.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TitleRecord {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    year: Option<String>,
    #[serde(default)]
    poster: Option<String>,
    #[serde(default, rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(default)]
    response: Option<String>,
}

impl TitleRecord {
    pub fn from_payload(payload: &Value) -> Result<Self> {
        Self::deserialize(payload).map_err(Error::transport)
    }

    pub fn is_failure(&self) -> bool {
        self.response.as_deref() == Some(FAILURE)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn imdb_rating(&self) -> Option<&str> {
        self.imdb_rating.as_deref()
    }

    pub(crate) fn into_parts(self) -> (Option<String>, Option<String>, Option<String>) {
        (self.title, self.year, self.poster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_success() {
        let payload = json!({"Title": "Heat", "Response": "True"});
        assert!(ResponseStatus::from_payload(&payload)
            .unwrap()
            .into_result()
            .is_ok());
    }

    #[test]
    fn test_status_without_response_field() {
        let payload = json!({"Search": []});
        let status = ResponseStatus::from_payload(&payload).unwrap();
        assert!(!status.is_failure());
    }

    #[test]
    fn test_status_failure() {
        let payload = json!({"Response": "False", "Error": "Incorrect IMDb ID."});
        let err = ResponseStatus::from_payload(&payload)
            .unwrap()
            .into_result()
            .unwrap_err();
        assert_eq!(err, Error::Upstream("Incorrect IMDb ID.".to_string()));
    }

    #[test]
    fn test_status_with_wrong_types() {
        let payload = json!({"Response": false});
        assert!(matches!(
            ResponseStatus::from_payload(&payload),
            Err(Error::Transport(_))
        ));
    }

    #[test]
    fn test_title_record_ignores_unknown_fields() {
        let payload = json!({
            "Title": "Dune: Part Two",
            "Year": "2024",
            "Rated": "PG-13",
            "Poster": "https://example.com/dune.jpg",
            "Ratings": [{"Source": "Internet Movie Database", "Value": "8.5/10"}],
            "imdbRating": "8.5",
            "Response": "True"
        });
        let record = TitleRecord::from_payload(&payload).unwrap();

        assert_eq!(record.title(), Some("Dune: Part Two"));
        assert_eq!(record.imdb_rating(), Some("8.5"));
        assert!(!record.is_failure());
    }
}
