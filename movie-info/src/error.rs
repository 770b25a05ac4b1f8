use thiserror::Error;

/// Errors surfaced by the movie info client.
///
/// The `Display` output of every variant is what callers of the HTTP API
/// receive in the `error` field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("OMDB API key not configured.")]
    MissingApiKey,
    /// The request never produced a usable payload. The detail is kept for logs only.
    #[error("Failed to fetch data from OMDB API")]
    Transport(String),
    /// OMDb answered with `"Response": "False"`.
    #[error("{0}")]
    Upstream(String),
}

impl Error {
    pub fn transport<S: ToString>(detail: S) -> Self {
        Error::Transport(detail.to_string())
    }

    /// Extra context for logs, when there is any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Error::Transport(detail) => Some(detail),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
