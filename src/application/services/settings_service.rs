//! Site-wide settings service.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{WebmentionMode, WEBMENTION_MODE_KEY};
use crate::domain::repositories::SettingsRepository;
use crate::error::AppError;

/// Service over the keyed settings table.
pub struct SettingsService {
    repository: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    /// Creates a new settings service.
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    /// Resolves the current admission mode, defaulting to `admit_all` when
    /// the setting is absent or unrecognized.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn webmention_mode(&self) -> Result<WebmentionMode, AppError> {
        let value = self.repository.get(WEBMENTION_MODE_KEY).await?;
        Ok(WebmentionMode::resolve(value.as_deref()))
    }

    /// Sets the admission mode.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for values other than `admit_all`
    /// or `whitelist_only`. Returns [`AppError::Internal`] on database
    /// errors.
    pub async fn set_webmention_mode(&self, value: &str) -> Result<WebmentionMode, AppError> {
        let mode = WebmentionMode::parse(value).ok_or_else(|| {
            AppError::bad_request(
                "webmention_mode must be admit_all or whitelist_only",
                json!({ "value": value }),
            )
        })?;

        self.repository
            .set(WEBMENTION_MODE_KEY, mode.as_str())
            .await?;

        Ok(mode)
    }
}
