use url::Url;

/// Placeholder written in place of secret query values.
pub const REDACTED: &str = "***";

/// Build a URL from a base and a list of query parameters. Values are percent-encoded.
pub fn build_url<K, V>(base: &str, params: &[(K, V)]) -> Result<Url, url::ParseError>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut url = Url::parse(base)?;
    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key.as_ref(), value.as_ref());
        }
    }
    Ok(url)
}

/// Render `url` with the values of `secret_keys` replaced, so it can be logged.
pub fn redact_query(url: &Url, secret_keys: &[String]) -> String {
    if url.query().is_none() || secret_keys.is_empty() {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            if secret_keys.iter().any(|secret| secret == key.as_ref()) {
                (key.into_owned(), REDACTED.to_string())
            } else {
                (key.into_owned(), value.into_owned())
            }
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_encodes_values() {
        let url = build_url(
            "https://www.omdbapi.com/",
            &[("apikey", "abc"), ("s", "star wars & co")],
        )
        .unwrap();

        assert_eq!(url.host_str(), Some("www.omdbapi.com"));
        assert_eq!(url.query(), Some("apikey=abc&s=star+wars+%26+co"));
    }

    #[test]
    fn test_build_url_rejects_relative_base() {
        assert!(build_url::<&str, &str>("not a url", &[]).is_err());
    }

    #[test]
    fn test_redact_query() {
        let url = Url::parse("https://www.omdbapi.com/?apikey=secret&t=a&y=2024").unwrap();
        let redacted = redact_query(&url, &["apikey".to_string()]);

        assert!(!redacted.contains("secret"));
        assert!(redacted.contains("t=a"));
        assert!(redacted.contains("y=2024"));
    }

    #[test]
    fn test_redact_query_without_query() {
        let url = Url::parse("https://www.omdbapi.com/").unwrap();
        assert_eq!(
            redact_query(&url, &["apikey".to_string()]),
            "https://www.omdbapi.com/"
        );
    }
}
