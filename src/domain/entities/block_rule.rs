//! Block rules: ad-hoc filters beyond the domain registry.
//!
//! A rule carries at least one clause: a domain pattern (with a kind), a
//! literal source-URL prefix, or a mention type. Mention-type clauses are
//! not evaluated at admission — the type is unknown until the source page
//! has been fetched, so the downstream processor re-applies them.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::utils::host_pattern::{matches_domain_pattern, PatternKind};
use crate::utils::url_norm::host_from_url;

/// A stored block rule. Rules are created and deleted, never updated.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BlockRule {
    pub id: i64,
    pub domain_pattern: Option<String>,
    pub pattern_kind: Option<String>,
    pub source_url_prefix: Option<String>,
    pub mention_type: Option<String>,
    pub label: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl BlockRule {
    /// Returns true if this rule blocks the given source URL.
    ///
    /// Checks the URL-prefix clause (literal, case-sensitive) and the
    /// domain-pattern clause (on the parsed hostname; a malformed URL makes
    /// that clause match nothing). An unrecognized stored pattern kind also
    /// matches nothing.
    pub fn matches_source(&self, source_url: &str) -> bool {
        if let Some(prefix) = &self.source_url_prefix {
            let prefix = prefix.trim();
            if !prefix.is_empty() && source_url.starts_with(prefix) {
                return true;
            }
        }

        if let (Some(pattern), Some(kind)) = (&self.domain_pattern, &self.pattern_kind)
            && let Some(kind) = PatternKind::parse(kind)
            && let Some(host) = host_from_url(source_url)
            && matches_domain_pattern(&host, pattern, kind)
        {
            return true;
        }

        false
    }
}

/// Input data for creating a block rule.
///
/// At least one of `domain_pattern` (with `pattern_kind`),
/// `source_url_prefix`, or `mention_type` must be set; the service layer
/// enforces this before insertion.
#[derive(Debug, Clone, Default)]
pub struct NewBlockRule {
    pub domain_pattern: Option<String>,
    pub pattern_kind: Option<PatternKind>,
    pub source_url_prefix: Option<String>,
    pub mention_type: Option<String>,
    pub label: Option<String>,
}
