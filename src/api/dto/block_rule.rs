//! DTOs for block rule endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::BlockRule;

/// Request to create a block rule. At least one clause must be supplied.
#[derive(Debug, Deserialize)]
pub struct CreateBlockRuleRequest {
    pub domain_pattern: Option<String>,
    pub pattern_kind: Option<String>,
    pub source_url_prefix: Option<String>,
    pub mention_type: Option<String>,
    pub label: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BlockRuleListResponse {
    pub rules: Vec<BlockRule>,
}

#[derive(Debug, Serialize)]
pub struct CreateBlockRuleResponse {
    pub rule: BlockRule,
}
