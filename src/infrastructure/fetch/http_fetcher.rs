//! reqwest-based page fetcher.

use async_trait::async_trait;
use std::time::Duration;

use super::service::PageFetcher;

/// User-Agent sent on verification fetches.
const USER_AGENT: &str = concat!("webmention-receiver-verify/", env!("CARGO_PKG_VERSION"));

/// HTTP fetcher for verification checks.
///
/// Follows redirects and applies a seconds-scale timeout; a timeout is
/// indistinguishable from any other network failure to callers.
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    /// Builds a fetcher with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_root(&self, domain: &str) -> Option<String> {
        let url = format!("https://{domain}/");

        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!(domain, error = %e, "verification fetch failed");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!(domain, status = %response.status(), "verification fetch non-2xx");
            return None;
        }

        response.text().await.ok()
    }
}
