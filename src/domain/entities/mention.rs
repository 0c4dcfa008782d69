//! Mention entities: confirmed mentions and the pending intake queue.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A confirmed mention: page `source` references page `target`.
///
/// Created once the source page has been fetched and parsed by the
/// downstream processor. Immutable once stored. Looked up by
/// (source, target), though duplicates are not rejected at this layer.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Mention {
    pub id: i64,
    pub source: String,
    pub target: String,
    /// Optional classification, e.g. `in-reply-to` or `like-of`.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub mention_type: Option<String>,
    pub parsed_at: DateTime<Utc>,
}

/// Input data for storing a confirmed mention.
#[derive(Debug, Clone)]
pub struct NewMention {
    pub source: String,
    pub target: String,
    pub mention_type: Option<String>,
}

/// An accepted-but-not-yet-processed intake record.
///
/// Written by the admission pipeline, claimed (processed = true) exclusively
/// by the queue drain. `processed` is monotone false→true and never reset.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PendingMention {
    pub id: i64,
    pub source: String,
    pub target: String,
    pub processed: bool,
    pub created_at: DateTime<Utc>,
}

/// Classification values a mention type may take.
///
/// Used when validating `mention_type` block rules; the type itself is only
/// known after the source page has been parsed.
pub const MENTION_TYPES: [&str; 5] = [
    "mention",
    "in-reply-to",
    "like-of",
    "repost-of",
    "bookmark-of",
];
