//! Repository trait for the domain allow/deny registry.

use crate::domain::entities::{DomainEntry, ListType, NewDomainEntry};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for domain registry entries.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgDomainEntryRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainEntryRepository: Send + Sync {
    /// Creates a registry entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the domain is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, entry: NewDomainEntry) -> Result<DomainEntry, AppError>;

    /// Finds an entry by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<DomainEntry>, AppError>;

    /// Finds an entry by exact domain and list type.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_domain(
        &self,
        domain: &str,
        list_type: ListType,
    ) -> Result<Option<DomainEntry>, AppError>;

    /// Lists entries, optionally restricted to one list and/or to entries
    /// with the given verified state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(
        &self,
        list_type: Option<ListType>,
        verified: Option<bool>,
    ) -> Result<Vec<DomainEntry>, AppError>;

    /// Records a verification check outcome: sets `verified` and
    /// `last_verified_at` unconditionally (even on failure, so the check
    /// itself is recorded).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entry does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_verified(
        &self,
        id: i64,
        verified: bool,
        checked_at: DateTime<Utc>,
    ) -> Result<(), AppError>;

    /// Deletes an entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entry does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
