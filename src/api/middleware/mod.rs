//! HTTP middleware: authentication, rate limiting, and tracing.

pub mod auth;
pub mod rate_limit;
pub mod tracing;
