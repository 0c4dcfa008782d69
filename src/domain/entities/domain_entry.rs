//! Domain registry entity: per-domain allow/deny entries with ownership
//! verification state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Which list a registry entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Whitelist,
    Blacklist,
}

impl ListType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "whitelist" => Some(Self::Whitelist),
            "blacklist" => Some(Self::Blacklist),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Whitelist => "whitelist",
            Self::Blacklist => "blacklist",
        }
    }
}

/// A domain registered on the allow-list or deny-list.
///
/// `verified` and `last_verified_at` are mutated only by the verification
/// workflow; whitelist entries take effect on target-host acceptance only
/// once verified.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DomainEntry {
    pub id: i64,
    pub domain: String,
    pub list_type: String,
    pub verification_token: String,
    pub verified: bool,
    pub last_verified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl DomainEntry {
    pub fn is_whitelist(&self) -> bool {
        self.list_type == ListType::Whitelist.as_str()
    }
}

/// Input data for registering a domain.
#[derive(Debug, Clone)]
pub struct NewDomainEntry {
    /// Already normalized: lowercase, no scheme/path, no leading `www.`.
    pub domain: String,
    pub list_type: ListType,
    pub verification_token: String,
}
