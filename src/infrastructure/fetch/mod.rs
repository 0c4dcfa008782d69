//! Outbound page fetching for domain verification.

pub mod http_fetcher;
pub mod service;

pub use http_fetcher::HttpPageFetcher;
pub use service::PageFetcher;

#[cfg(test)]
pub use service::MockPageFetcher;
