//! Webmention admission pipeline.
//!
//! Decides whether an inbound notification is accepted and, if so, appends
//! it to the pending queue. Two classes of checks are kept structurally
//! separate:
//!
//! - **Filtering metadata lookups** (deny-list, block rules, allow-list
//!   override, mode) are fail-open: if the store is unreachable or the
//!   tables are missing, the pipeline degrades to the default accepted-host
//!   set and admit-all semantics instead of failing the request.
//! - **Fixed policy** (https scheme, source ≠ target, target host) and the
//!   final queue write propagate errors normally.

use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;
use url::Url;

use crate::domain::entities::{ListType, PendingMention, WebmentionMode, WEBMENTION_MODE_KEY};
use crate::domain::repositories::{
    BlockRuleRepository, DomainEntryRepository, MentionRepository, SettingsRepository,
};
use crate::error::AppError;
use crate::utils::url_norm::normalize_host;

/// Outcome of the fail-open filtering stage.
struct FilterVerdict {
    /// First matching rejection reason, if any.
    rejection: Option<String>,
    /// Hosts accepted as webmention targets. Starts from the configured
    /// default and is replaced wholesale by a non-empty verified allow-list.
    accepted_hosts: Vec<String>,
}

/// Service running the admission pipeline for inbound webmentions.
pub struct AdmissionService {
    mentions: Arc<dyn MentionRepository>,
    domain_entries: Arc<dyn DomainEntryRepository>,
    block_rules: Arc<dyn BlockRuleRepository>,
    settings: Arc<dyn SettingsRepository>,
    default_accepted_hosts: Vec<String>,
}

impl AdmissionService {
    /// Creates a new admission service.
    ///
    /// `default_accepted_hosts` is the configured target-host set used when
    /// no verified allow-list entries exist.
    pub fn new(
        mentions: Arc<dyn MentionRepository>,
        domain_entries: Arc<dyn DomainEntryRepository>,
        block_rules: Arc<dyn BlockRuleRepository>,
        settings: Arc<dyn SettingsRepository>,
        default_accepted_hosts: Vec<String>,
    ) -> Self {
        Self {
            mentions,
            domain_entries,
            block_rules,
            settings,
            default_accepted_hosts,
        }
    }

    /// Runs the full pipeline for one notification.
    ///
    /// On accept, writes a pending mention and returns it. Every rejection,
    /// including a failed final write, is an [`AppError::Validation`] so the
    /// handler responds 400 with a readable message.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when either URL is not an absolute
    /// URL with a host, when a filter rejects the source, when the fixed
    /// policy rejects the pair, or when the queue write fails.
    pub async fn admit(&self, source: &str, target: &str) -> Result<PendingMention, AppError> {
        let source_url = parse_absolute(source, "source")?;
        let target_url = parse_absolute(target, "target")?;

        let verdict = match self.evaluate_filters(&source_url, source).await {
            Ok(verdict) => verdict,
            Err(e) => {
                // Store unreachable or schema missing: filtering degrades to
                // default-permit rather than failing the request.
                tracing::warn!(error = %e, "filter lookups failed, using default-permit");
                FilterVerdict {
                    rejection: None,
                    accepted_hosts: self.default_accepted_hosts.clone(),
                }
            }
        };

        if let Some(reason) = verdict.rejection {
            return Err(AppError::bad_request(reason, Value::Null));
        }

        if source_url.scheme() != "https" || target_url.scheme() != "https" {
            return Err(AppError::bad_request(
                "Source and target URLs must use the https protocol",
                Value::Null,
            ));
        }

        // Trailing-slash-sensitive comparison of the normalized URLs. The
        // message text is preserved verbatim for compatibility even though
        // it reads inverted; flagged for product-owner review.
        if source_url == target_url {
            return Err(AppError::bad_request(
                "The target URL must be the same as the source URL",
                Value::Null,
            ));
        }

        let target_host = target_url.host_str().unwrap_or_default();
        if !verdict.accepted_hosts.iter().any(|h| h == target_host) {
            return Err(AppError::bad_request("Unsupported Target", Value::Null));
        }

        // Intake contract: a storage failure at the accept-write surfaces as
        // a 400 carrying the underlying error text.
        self.mentions
            .add_pending(source, target)
            .await
            .map_err(|e| AppError::bad_request(e.to_string(), Value::Null))
    }

    /// Runs the filtering metadata lookups. Any `Err` from the store makes
    /// the caller fall back to default-permit; a policy rejection is an
    /// `Ok` verdict with `rejection` set.
    async fn evaluate_filters(
        &self,
        source_url: &Url,
        source: &str,
    ) -> Result<FilterVerdict, AppError> {
        let source_host = source_url.host_str();

        if let Some(host) = source_host
            && self
                .domain_entries
                .find_by_domain(host, ListType::Blacklist)
                .await?
                .is_some()
        {
            return Ok(FilterVerdict {
                rejection: Some("Source domain is blacklisted".to_string()),
                accepted_hosts: self.default_accepted_hosts.clone(),
            });
        }

        for rule in self.block_rules.list().await? {
            if rule.matches_source(source) {
                let reason = match &rule.label {
                    Some(label) => format!("Blocked: {label}"),
                    None => "Source matched a block rule".to_string(),
                };
                return Ok(FilterVerdict {
                    rejection: Some(reason),
                    accepted_hosts: self.default_accepted_hosts.clone(),
                });
            }
        }

        let verified_whitelist = self
            .domain_entries
            .list(Some(ListType::Whitelist), Some(true))
            .await?;
        let accepted_hosts = if verified_whitelist.is_empty() {
            self.default_accepted_hosts.clone()
        } else {
            verified_whitelist.into_iter().map(|e| e.domain).collect()
        };

        let mode_value = self.settings.get(WEBMENTION_MODE_KEY).await?;
        if WebmentionMode::resolve(mode_value.as_deref()) == WebmentionMode::WhitelistOnly {
            let allowed: HashSet<String> = self
                .domain_entries
                .list(Some(ListType::Whitelist), None)
                .await?
                .into_iter()
                .map(|e| normalize_host(&e.domain))
                .collect();

            let on_whitelist = source_host
                .map(normalize_host)
                .map(|h| allowed.contains(&h))
                .unwrap_or(false);

            if !on_whitelist {
                return Ok(FilterVerdict {
                    rejection: Some("Source domain not on whitelist".to_string()),
                    accepted_hosts,
                });
            }
        }

        Ok(FilterVerdict {
            rejection: None,
            accepted_hosts,
        })
    }
}

/// Parses an absolute URL with a non-empty host, naming the offending field
/// in the client error.
fn parse_absolute(value: &str, field: &str) -> Result<Url, AppError> {
    let url = Url::parse(value).map_err(|_| {
        AppError::bad_request(
            format!("Invalid {field} URL"),
            json!([{ "field": field, "value": value }]),
        )
    })?;

    if url.host_str().is_none() {
        return Err(AppError::bad_request(
            format!("Invalid {field} URL"),
            json!([{ "field": field, "value": value }]),
        ));
    }

    Ok(url)
}
