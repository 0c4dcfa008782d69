//! Page fetching abstraction used by domain verification.

use async_trait::async_trait;

/// Fetches a remote page body for verification checks.
///
/// Any transport failure, timeout, or non-2xx status yields `None`; the
/// verification workflow treats all of those identically as "not verified"
/// and never raises.
///
/// # Implementations
///
/// - [`crate::infrastructure::fetch::HttpPageFetcher`] - reqwest-based implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `https://{domain}/` following redirects and returns the body
    /// on success.
    async fn fetch_root(&self, domain: &str) -> Option<String>;
}
