//! DTOs for domain registry endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::services::{SweepResult, VerificationInstructions};
use crate::domain::entities::DomainEntry;

/// Request to register a domain.
#[derive(Debug, Deserialize)]
pub struct CreateDomainRequest {
    pub domain: String,
    /// `whitelist` (default) or `blacklist`.
    pub list_type: Option<String>,
}

/// Query parameters for the registry listing.
#[derive(Debug, Deserialize)]
pub struct ListDomainsQuery {
    pub list_type: Option<String>,
}

/// A registry entry as returned by the admin API.
#[derive(Debug, Serialize)]
pub struct DomainItem {
    pub id: i64,
    pub domain: String,
    pub list_type: String,
    pub verification_token: String,
    pub verified: bool,
    pub last_verified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<DomainEntry> for DomainItem {
    fn from(e: DomainEntry) -> Self {
        Self {
            id: e.id,
            domain: e.domain,
            list_type: e.list_type,
            verification_token: e.verification_token,
            verified: e.verified,
            last_verified_at: e.last_verified_at,
            created_at: e.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DomainListResponse {
    pub domains: Vec<DomainItem>,
}

/// Creation response: the stored row plus the proof markup to publish.
#[derive(Debug, Serialize)]
pub struct CreateDomainResponse {
    pub domain: DomainItem,
    pub instructions: VerificationInstructions,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub verified: bool,
    pub last_verified_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct SweepResponse {
    pub results: Vec<SweepResult>,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: bool,
}
