//! Repository trait for mentions and the pending intake queue.

use crate::domain::entities::{Mention, NewMention, PendingMention};
use crate::error::AppError;
use async_trait::async_trait;

/// Default number of rows claimed per queue drain.
pub const DEFAULT_CLAIM_BATCH: i64 = 5;

/// Maximum confirmed mentions returned per page lookup.
pub const MENTIONS_PER_PAGE: i64 = 50;

/// Storage contract for mentions.
///
/// Covers both the append-only pending queue filled at admission and the
/// confirmed-mentions table maintained after downstream processing.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMentionRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MentionRepository: Send + Sync {
    /// Appends a pending mention (`processed = false`).
    ///
    /// Duplicates are not rejected; two identical accepted submissions
    /// produce two distinct rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn add_pending(&self, source: &str, target: &str) -> Result<PendingMention, AppError>;

    /// Atomically claims up to `max` unprocessed rows in insertion order,
    /// marking them processed before returning them.
    ///
    /// Two concurrent drains never receive overlapping rows. Claimed rows
    /// are never returned again.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn claim_pending(&self, max: i64) -> Result<Vec<PendingMention>, AppError>;

    /// Stores a confirmed mention.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn store_mention(&self, mention: NewMention) -> Result<Mention, AppError>;

    /// Lists confirmed mentions targeting `page`, optionally filtered by
    /// type, capped at [`MENTIONS_PER_PAGE`]. Target comparison is exact
    /// string equality.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn mentions_for_page<'a>(
        &self,
        page: &str,
        mention_type: Option<&'a str>,
    ) -> Result<Vec<Mention>, AppError>;
}
