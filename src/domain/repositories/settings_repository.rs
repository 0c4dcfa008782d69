//! Repository trait for keyed settings.

use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the settings key/value table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSettingsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Reads a setting value, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Upserts a setting value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}
