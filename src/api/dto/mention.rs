//! DTOs for queue drain and confirmed-mention endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Mention, PendingMention};

/// Request body for the queue drain endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ClaimRequest {
    /// Maximum rows to claim; defaults to 5.
    pub max: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub mentions: Vec<PendingMention>,
}

/// Query parameters for listing confirmed mentions.
#[derive(Debug, Deserialize)]
pub struct MentionsQuery {
    pub target: String,
    #[serde(rename = "type")]
    pub mention_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MentionListResponse {
    pub mentions: Vec<Mention>,
}

/// Request to store a confirmed mention (written by the downstream
/// processor once the source page has been parsed).
#[derive(Debug, Deserialize)]
pub struct StoreMentionRequest {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub mention_type: Option<String>,
}
