//! Repository trait for block rules.

use crate::domain::entities::{BlockRule, NewBlockRule};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for block rules.
///
/// Rules are immutable once created; there is no update operation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBlockRuleRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlockRuleRepository: Send + Sync {
    /// Creates a block rule.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, rule: NewBlockRule) -> Result<BlockRule, AppError>;

    /// Lists all rules in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<BlockRule>, AppError>;

    /// Deletes a rule.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the rule does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
