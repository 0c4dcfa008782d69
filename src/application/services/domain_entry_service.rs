//! Domain registry service: registration, ownership verification, and the
//! re-verification sweep.

use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{DomainEntry, ListType, NewDomainEntry};
use crate::domain::repositories::DomainEntryRepository;
use crate::error::AppError;
use crate::infrastructure::fetch::PageFetcher;
use crate::utils::token_scan::{token_present_in_html, LINK_REL, META_NAME};
use crate::utils::url_norm::normalize_domain;

/// Proof markup the operator publishes on their site.
#[derive(Debug, Clone, serde::Serialize)]
pub struct VerificationInstructions {
    pub meta: String,
    pub link: String,
}

/// Outcome of one on-demand verification check.
#[derive(Debug, Clone, serde::Serialize)]
pub struct VerificationOutcome {
    pub verified: bool,
    pub last_verified_at: DateTime<Utc>,
}

/// Per-domain result of a re-verification sweep.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SweepResult {
    pub domain: String,
    pub verified: bool,
}

/// Service for the domain allow/deny registry and its verification
/// workflow.
///
/// Verification state machine per entry: unverified → verified on a
/// successful check, verified → unverified when a re-check fails, and
/// re-verifying an already verified domain is idempotent.
pub struct DomainEntryService {
    repository: Arc<dyn DomainEntryRepository>,
    fetcher: Arc<dyn PageFetcher>,
    /// Public origin used in the link-tag proof instruction.
    base_url: String,
}

impl DomainEntryService {
    /// Creates a new domain entry service.
    pub fn new(
        repository: Arc<dyn DomainEntryRepository>,
        fetcher: Arc<dyn PageFetcher>,
        base_url: String,
    ) -> Self {
        Self {
            repository,
            fetcher,
            base_url,
        }
    }

    /// Registers a domain, issuing a fresh verification token.
    ///
    /// The input is normalized (scheme/path stripped, lowercased, leading
    /// `www.` removed). Returns the stored entry together with the two
    /// proof instructions the operator can publish.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the domain is empty after
    /// normalization. Returns [`AppError::Conflict`] if the domain is
    /// already registered. Returns [`AppError::Internal`] on database
    /// errors.
    pub async fn register_domain(
        &self,
        raw_domain: &str,
        list_type: ListType,
    ) -> Result<(DomainEntry, VerificationInstructions), AppError> {
        let domain = normalize_domain(raw_domain);
        if domain.is_empty() {
            return Err(AppError::bad_request(
                "Invalid domain",
                json!({ "domain": raw_domain }),
            ));
        }

        let token = Uuid::new_v4().to_string();
        let entry = self
            .repository
            .create(NewDomainEntry {
                domain,
                list_type,
                verification_token: token.clone(),
            })
            .await?;

        let instructions = self.instructions_for(&token);
        Ok((entry, instructions))
    }

    /// Lists registry entries, optionally restricted to one list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_domains(
        &self,
        list_type: Option<ListType>,
    ) -> Result<Vec<DomainEntry>, AppError> {
        self.repository.list(list_type, None).await
    }

    /// Deletes a registry entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entry does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_domain(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await
    }

    /// Runs an on-demand verification check for one whitelist entry.
    ///
    /// The outcome is recorded unconditionally: `last_verified_at` advances
    /// even when the check fails, so the attempt itself is visible.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entry does not exist.
    /// Returns [`AppError::Validation`] for blacklist entries.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn verify_domain(&self, id: i64) -> Result<VerificationOutcome, AppError> {
        let entry = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Domain entry not found", json!({ "id": id })))?;

        if !entry.is_whitelist() {
            return Err(AppError::bad_request(
                "Only whitelist domains are verified",
                json!({ "id": id }),
            ));
        }

        let verified = self
            .check_token(&entry.domain, &entry.verification_token)
            .await;
        let now = Utc::now();
        self.repository.set_verified(id, verified, now).await?;

        Ok(VerificationOutcome {
            verified,
            last_verified_at: now,
        })
    }

    /// Re-runs the verification check for every verified whitelist entry.
    ///
    /// Entries are checked independently: one domain failing its check (or
    /// even its status write) does not affect the others.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the entry listing itself fails.
    pub async fn reverify_all(&self) -> Result<Vec<SweepResult>, AppError> {
        let entries = self
            .repository
            .list(Some(ListType::Whitelist), Some(true))
            .await?;

        let mut results = Vec::with_capacity(entries.len());
        for entry in entries {
            let verified = self
                .check_token(&entry.domain, &entry.verification_token)
                .await;

            if let Err(e) = self.repository.set_verified(entry.id, verified, Utc::now()).await {
                tracing::warn!(domain = %entry.domain, error = %e, "sweep status write failed");
                continue;
            }

            results.push(SweepResult {
                domain: entry.domain,
                verified,
            });
        }

        Ok(results)
    }

    /// Fetches the domain root and scans for the token. Network failures,
    /// timeouts, and non-2xx responses all read as "not verified".
    async fn check_token(&self, domain: &str, token: &str) -> bool {
        match self.fetcher.fetch_root(domain).await {
            Some(html) => token_present_in_html(&html, token),
            None => false,
        }
    }

    fn instructions_for(&self, token: &str) -> VerificationInstructions {
        let origin = self.base_url.trim_end_matches('/');
        VerificationInstructions {
            meta: format!(r#"<meta name="{META_NAME}" content="{token}">"#),
            link: format!(r#"<link rel="{LINK_REL}" href="{origin}/verify?token={token}">"#),
        }
    }
}
