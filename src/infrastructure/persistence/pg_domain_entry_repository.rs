//! PostgreSQL implementation of the domain registry repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{DomainEntry, ListType, NewDomainEntry};
use crate::domain::repositories::DomainEntryRepository;
use crate::error::AppError;

/// PostgreSQL repository for the domain allow/deny registry.
pub struct PgDomainEntryRepository {
    pool: Arc<PgPool>,
}

impl PgDomainEntryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

const COLUMNS: &str =
    "id, domain, list_type, verification_token, verified, last_verified_at, created_at";

#[async_trait]
impl DomainEntryRepository for PgDomainEntryRepository {
    async fn create(&self, entry: NewDomainEntry) -> Result<DomainEntry, AppError> {
        let row = sqlx::query_as::<_, DomainEntry>(&format!(
            r#"
            INSERT INTO domain_entries (domain, list_type, verification_token, verified)
            VALUES ($1, $2, $3, FALSE)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&entry.domain)
        .bind(entry.list_type.as_str())
        .bind(&entry.verification_token)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::Conflict { .. } => {
                AppError::conflict("Domain already exists", json!({ "domain": entry.domain }))
            }
            other => other,
        })?;

        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<DomainEntry>, AppError> {
        let row = sqlx::query_as::<_, DomainEntry>(&format!(
            "SELECT {COLUMNS} FROM domain_entries WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn find_by_domain(
        &self,
        domain: &str,
        list_type: ListType,
    ) -> Result<Option<DomainEntry>, AppError> {
        let row = sqlx::query_as::<_, DomainEntry>(&format!(
            r#"
            SELECT {COLUMNS} FROM domain_entries
            WHERE domain = $1 AND list_type = $2
            LIMIT 1
            "#
        ))
        .bind(domain)
        .bind(list_type.as_str())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn list(
        &self,
        list_type: Option<ListType>,
        verified: Option<bool>,
    ) -> Result<Vec<DomainEntry>, AppError> {
        let rows = sqlx::query_as::<_, DomainEntry>(&format!(
            r#"
            SELECT {COLUMNS} FROM domain_entries
            WHERE ($1::TEXT IS NULL OR list_type = $1)
              AND ($2::BOOLEAN IS NULL OR verified = $2)
            ORDER BY created_at, id
            "#
        ))
        .bind(list_type.map(|t| t.as_str()))
        .bind(verified)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn set_verified(
        &self,
        id: i64,
        verified: bool,
        checked_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE domain_entries
            SET verified = $2, last_verified_at = $3
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(verified)
        .bind(checked_at)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Domain entry not found", json!({ "id": id })));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM domain_entries WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Domain entry not found", json!({ "id": id })));
        }

        Ok(())
    }
}
