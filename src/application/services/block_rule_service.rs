//! Block rule management service.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{BlockRule, NewBlockRule, MENTION_TYPES};
use crate::domain::repositories::BlockRuleRepository;
use crate::error::AppError;
use crate::utils::host_pattern::PatternKind;

/// Raw operator input for a block rule, before normalization.
#[derive(Debug, Default)]
pub struct BlockRuleInput {
    pub domain_pattern: Option<String>,
    pub pattern_kind: Option<String>,
    pub source_url_prefix: Option<String>,
    pub mention_type: Option<String>,
    pub label: Option<String>,
}

/// Service for managing block rules.
pub struct BlockRuleService {
    repository: Arc<dyn BlockRuleRepository>,
}

impl BlockRuleService {
    /// Creates a new block rule service.
    pub fn new(repository: Arc<dyn BlockRuleRepository>) -> Self {
        Self { repository }
    }

    /// Creates a block rule from operator input.
    ///
    /// Blank fields, unknown pattern kinds, and unknown mention types are
    /// treated as absent. The domain-pattern clause requires both a pattern
    /// and a kind; at least one clause must remain after normalization.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if no clause remains.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_rule(&self, input: BlockRuleInput) -> Result<BlockRule, AppError> {
        let domain_pattern = non_blank(input.domain_pattern);
        let pattern_kind = input
            .pattern_kind
            .as_deref()
            .and_then(PatternKind::parse);
        let source_url_prefix = non_blank(input.source_url_prefix);
        let mention_type =
            non_blank(input.mention_type).filter(|t| MENTION_TYPES.contains(&t.as_str()));
        let label = non_blank(input.label);

        let has_domain = domain_pattern.is_some() && pattern_kind.is_some();
        let has_prefix = source_url_prefix.is_some();
        let has_type = mention_type.is_some();

        if !has_domain && !has_prefix && !has_type {
            return Err(AppError::bad_request(
                "Provide at least one: domain_pattern + pattern_kind (exact/suffix/prefix), \
                 source_url_prefix, or mention_type",
                json!({}),
            ));
        }

        let rule = NewBlockRule {
            domain_pattern: if has_domain { domain_pattern } else { None },
            pattern_kind: if has_domain { pattern_kind } else { None },
            source_url_prefix,
            mention_type,
            label,
        };

        self.repository.create(rule).await
    }

    /// Lists all rules in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_rules(&self) -> Result<Vec<BlockRule>, AppError> {
        self.repository.list().await
    }

    /// Deletes a rule.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the rule does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_rule(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
