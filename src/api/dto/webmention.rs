//! DTOs for the public webmention intake endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Inbound notification that `source` links to `target`.
#[derive(Debug, Deserialize, Validate)]
pub struct WebmentionRequest {
    /// Page making the mention (must be an absolute URL).
    #[validate(url(message = "source must be a valid URL"))]
    pub source: String,

    /// Page being mentioned (must be an absolute URL).
    #[validate(url(message = "target must be a valid URL"))]
    pub target: String,
}

/// Success response body.
#[derive(Debug, Serialize)]
pub struct WebmentionResponse {
    pub success: bool,
}
