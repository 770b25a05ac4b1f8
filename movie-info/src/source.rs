use crate::error::Result;
use crate::omdb::OmdbQuery;
use async_trait::async_trait;
use serde_json::Value;

/// Where movie data comes from. Implemented by [`crate::omdb::OmdbClient`].
///
/// Implementations return the decoded JSON payload as received; interpreting
/// `Response`/`Error` fields is left to the caller.
#[async_trait]
pub trait MovieSource: Send + Sync {
    async fn fetch(&self, query: &OmdbQuery) -> Result<Value>;
}
