use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    AdmissionService, BlockRuleService, DomainEntryService, MentionService, SettingsService,
};

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub admission_service: Arc<AdmissionService>,
    pub mention_service: Arc<MentionService>,
    pub domain_entry_service: Arc<DomainEntryService>,
    pub block_rule_service: Arc<BlockRuleService>,
    pub settings_service: Arc<SettingsService>,
    /// Pool handle kept for the health check.
    pub db: Arc<PgPool>,
    /// Bearer secret protecting the admin API.
    pub admin_token: String,
}
