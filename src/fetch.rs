//! Outbound page retrieval.
//!
//! One GET per page with a fixed user agent and a hard timeout. No cookies,
//! no credentials and no retries: a failed fetch goes straight back to the
//! caller, who owns any retry policy.

use crate::errors::FetchError;
use crate::utils::truncate_for_log;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};
use url::Url;

/// User agent sent with every page request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Timeout applied when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client for product pages.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Build a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { client, timeout })
    }

    /// Fetch the markup at `url`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Status`] if the response status is not 2xx
    /// - [`FetchError::Timeout`] if the request or body read exceeds the timeout
    /// - [`FetchError::Network`] for any other transport failure
    #[instrument(level = "info", skip(self), fields(%url))]
    pub async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let t0 = Instant::now();
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                elapsed_ms = t0.elapsed().as_millis() as u64,
                "Target returned non-success status"
            );
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;
        info!(
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched page"
        );
        debug!(preview = %truncate_for_log(&body, 200), "Page body");
        Ok(body)
    }

    fn classify(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            warn!(timeout_secs = self.timeout.as_secs(), "Fetch timed out");
            FetchError::Timeout(self.timeout)
        } else {
            warn!(error = %e, "Fetch failed");
            FetchError::Network(e.to_string())
        }
    }
}
