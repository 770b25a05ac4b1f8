use crate::query::redact_query;
use log::{debug, warn};
use std::time::Instant;
use surf::middleware::{Middleware, Next};
use surf::{Client, Request, Response, Result};

/// Surf middleware logging every outgoing request and its outcome.
#[derive(Debug, Clone, Default)]
pub struct SurfLogging {
    /// Query parameters whose values never reach the log
    redacted_params: Vec<String>,
}

impl SurfLogging {
    pub fn redacting<S: AsRef<str>>(params: &[S]) -> Self {
        Self {
            redacted_params: params.iter().map(|p| p.as_ref().to_string()).collect(),
        }
    }
}

#[surf::utils::async_trait]
impl Middleware for SurfLogging {
    async fn handle(&self, req: Request, client: Client, next: Next<'_>) -> Result<Response> {
        let method = req.method();
        let url = redact_query(req.url(), &self.redacted_params);
        debug!("Sending {} {}", method, url);

        let start = Instant::now();
        let res = next.run(req, client).await;
        let elapsed = start.elapsed();

        match &res {
            Ok(response) => debug!(
                "{} {} -> {} ({:?})",
                method,
                url,
                response.status(),
                elapsed
            ),
            Err(err) => warn!("{} {} failed after {:?}: {}", method, url, elapsed, err),
        }

        res
    }
}
