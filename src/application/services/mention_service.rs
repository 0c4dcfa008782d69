//! Mention queue drain and confirmed-mention access.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{Mention, NewMention, PendingMention, MENTION_TYPES};
use crate::domain::repositories::{MentionRepository, DEFAULT_CLAIM_BATCH};
use crate::error::AppError;

/// Upper bound on a single drain request.
const MAX_CLAIM_BATCH: i64 = 100;

/// Service over the pending queue and the confirmed-mentions table.
///
/// The drain side provides at-least-once delivery: a claimed row is marked
/// processed before the external worker completes, so a worker crash loses
/// no data but may leave a processed row unhandled. Retry policy belongs to
/// the downstream processor.
pub struct MentionService {
    repository: Arc<dyn MentionRepository>,
}

impl MentionService {
    /// Creates a new mention service.
    pub fn new(repository: Arc<dyn MentionRepository>) -> Self {
        Self { repository }
    }

    /// Claims up to `max` pending rows (default 5, capped at 100), marking
    /// them processed atomically.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `max` is zero or negative.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn claim_pending(&self, max: Option<i64>) -> Result<Vec<PendingMention>, AppError> {
        let max = max.unwrap_or(DEFAULT_CLAIM_BATCH);
        if max <= 0 {
            return Err(AppError::bad_request(
                "max must be a positive integer",
                json!({ "max": max }),
            ));
        }

        self.repository.claim_pending(max.min(MAX_CLAIM_BATCH)).await
    }

    /// Stores a confirmed mention after downstream processing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the type is not a known
    /// classification. Returns [`AppError::Internal`] on database errors.
    pub async fn store_mention(&self, mention: NewMention) -> Result<Mention, AppError> {
        if let Some(t) = &mention.mention_type
            && !MENTION_TYPES.contains(&t.as_str())
        {
            return Err(AppError::bad_request(
                "Unknown mention type",
                json!({ "type": t, "known": MENTION_TYPES }),
            ));
        }

        self.repository.store_mention(mention).await
    }

    /// Lists confirmed mentions for a target page, optionally filtered by
    /// type, capped at the fixed page size.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn mentions_for_page(
        &self,
        page: &str,
        mention_type: Option<&str>,
    ) -> Result<Vec<Mention>, AppError> {
        self.repository.mentions_for_page(page, mention_type).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockMentionRepository;

    #[tokio::test]
    async fn test_claim_defaults_to_five() {
        let mut repo = MockMentionRepository::new();
        repo.expect_claim_pending()
            .withf(|max| *max == 5)
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = MentionService::new(Arc::new(repo));
        assert!(service.claim_pending(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_claim_caps_oversized_batch() {
        let mut repo = MockMentionRepository::new();
        repo.expect_claim_pending()
            .withf(|max| *max == 100)
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = MentionService::new(Arc::new(repo));
        assert!(service.claim_pending(Some(5000)).await.is_ok());
    }

    #[tokio::test]
    async fn test_claim_rejects_non_positive() {
        let service = MentionService::new(Arc::new(MockMentionRepository::new()));
        assert!(service.claim_pending(Some(0)).await.is_err());
        assert!(service.claim_pending(Some(-3)).await.is_err());
    }

    #[tokio::test]
    async fn test_store_mention_rejects_unknown_type() {
        let service = MentionService::new(Arc::new(MockMentionRepository::new()));

        let result = service
            .store_mention(NewMention {
                source: "https://a.com/1".to_string(),
                target: "https://b.com/2".to_string(),
                mention_type: Some("quote-of".to_string()),
            })
            .await;

        assert!(result.is_err());
    }
}
