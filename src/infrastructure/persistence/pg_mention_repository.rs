//! PostgreSQL implementation of the mention repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Mention, NewMention, PendingMention};
use crate::domain::repositories::{MentionRepository, MENTIONS_PER_PAGE};
use crate::error::AppError;

/// PostgreSQL repository for mentions and the pending queue.
///
/// The claim operation relies on `FOR UPDATE SKIP LOCKED` so concurrent
/// drains never receive overlapping rows.
pub struct PgMentionRepository {
    pool: Arc<PgPool>,
}

impl PgMentionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MentionRepository for PgMentionRepository {
    async fn add_pending(&self, source: &str, target: &str) -> Result<PendingMention, AppError> {
        let row = sqlx::query_as::<_, PendingMention>(
            r#"
            INSERT INTO pending_mentions (source, target, processed)
            VALUES ($1, $2, FALSE)
            RETURNING id, source, target, processed, created_at
            "#,
        )
        .bind(source)
        .bind(target)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn claim_pending(&self, max: i64) -> Result<Vec<PendingMention>, AppError> {
        let mut rows = sqlx::query_as::<_, PendingMention>(
            r#"
            UPDATE pending_mentions SET processed = TRUE
            WHERE id IN (
                SELECT id FROM pending_mentions
                WHERE processed = FALSE
                ORDER BY id
                LIMIT $1
                FOR UPDATE SKIP LOCKED
            )
            RETURNING id, source, target, processed, created_at
            "#,
        )
        .bind(max)
        .fetch_all(self.pool.as_ref())
        .await?;

        // RETURNING gives no ordering guarantee; restore insertion order.
        rows.sort_by_key(|r| r.id);
        Ok(rows)
    }

    async fn store_mention(&self, mention: NewMention) -> Result<Mention, AppError> {
        let row = sqlx::query_as::<_, Mention>(
            r#"
            INSERT INTO mentions (source, target, type)
            VALUES ($1, $2, $3)
            RETURNING id, source, target, type, parsed_at
            "#,
        )
        .bind(&mention.source)
        .bind(&mention.target)
        .bind(&mention.mention_type)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn mentions_for_page<'a>(
        &self,
        page: &str,
        mention_type: Option<&'a str>,
    ) -> Result<Vec<Mention>, AppError> {
        let rows = sqlx::query_as::<_, Mention>(
            r#"
            SELECT id, source, target, type, parsed_at
            FROM mentions
            WHERE target = $1
              AND ($2::TEXT IS NULL OR type = $2)
            ORDER BY parsed_at, id
            LIMIT $3
            "#,
        )
        .bind(page)
        .bind(mention_type)
        .bind(MENTIONS_PER_PAGE)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }
}
