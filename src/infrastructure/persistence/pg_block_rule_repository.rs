//! PostgreSQL implementation of the block rule repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{BlockRule, NewBlockRule};
use crate::domain::repositories::BlockRuleRepository;
use crate::error::AppError;

/// PostgreSQL repository for block rules.
pub struct PgBlockRuleRepository {
    pool: Arc<PgPool>,
}

impl PgBlockRuleRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

const COLUMNS: &str =
    "id, domain_pattern, pattern_kind, source_url_prefix, mention_type, label, created_at";

#[async_trait]
impl BlockRuleRepository for PgBlockRuleRepository {
    async fn create(&self, rule: NewBlockRule) -> Result<BlockRule, AppError> {
        let row = sqlx::query_as::<_, BlockRule>(&format!(
            r#"
            INSERT INTO block_rules
                (domain_pattern, pattern_kind, source_url_prefix, mention_type, label)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&rule.domain_pattern)
        .bind(rule.pattern_kind.map(|k| k.as_str()))
        .bind(&rule.source_url_prefix)
        .bind(&rule.mention_type)
        .bind(&rule.label)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn list(&self) -> Result<Vec<BlockRule>, AppError> {
        let rows = sqlx::query_as::<_, BlockRule>(&format!(
            "SELECT {COLUMNS} FROM block_rules ORDER BY created_at, id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM block_rules WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Block rule not found", json!({ "id": id })));
        }

        Ok(())
    }
}
