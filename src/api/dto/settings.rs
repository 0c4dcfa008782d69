//! DTOs for the settings endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub webmention_mode: String,
}

/// Partial settings update; absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub webmention_mode: Option<String>,
}
