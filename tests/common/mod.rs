#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use webmention_receiver::application::services::{
    AdmissionService, BlockRuleService, DomainEntryService, MentionService, SettingsService,
};
use webmention_receiver::infrastructure::fetch::HttpPageFetcher;
use webmention_receiver::infrastructure::persistence::{
    PgBlockRuleRepository, PgDomainEntryRepository, PgMentionRepository, PgSettingsRepository,
};
use webmention_receiver::state::AppState;

pub const TEST_ADMIN_TOKEN: &str = "test-admin-token";

pub async fn create_blacklist_domain(pool: &PgPool, domain: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO domain_entries (domain, list_type, verification_token)
         VALUES ($1, 'blacklist', 'unused') RETURNING id",
    )
    .bind(domain)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_whitelist_domain(pool: &PgPool, domain: &str, verified: bool) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO domain_entries (domain, list_type, verification_token, verified)
         VALUES ($1, 'whitelist', 'test-token', $2) RETURNING id",
    )
    .bind(domain)
    .bind(verified)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_prefix_block_rule(pool: &PgPool, prefix: &str, label: Option<&str>) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO block_rules (source_url_prefix, label) VALUES ($1, $2) RETURNING id",
    )
    .bind(prefix)
    .bind(label)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_domain_block_rule(pool: &PgPool, pattern: &str, kind: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO block_rules (domain_pattern, pattern_kind) VALUES ($1, $2) RETURNING id",
    )
    .bind(pattern)
    .bind(kind)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn set_webmention_mode(pool: &PgPool, mode: &str) {
    sqlx::query(
        "INSERT INTO settings (key, value) VALUES ('webmention_mode', $1)
         ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value",
    )
    .bind(mode)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_pending_mention(pool: &PgPool, source: &str, target: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO pending_mentions (source, target) VALUES ($1, $2) RETURNING id",
    )
    .bind(source)
    .bind(target)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_confirmed_mention(pool: &PgPool, source: &str, target: &str, kind: &str) {
    sqlx::query("INSERT INTO mentions (source, target, type) VALUES ($1, $2, $3)")
        .bind(source)
        .bind(target)
        .bind(kind)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_pending(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pending_mentions")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_unprocessed_pending(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pending_mentions WHERE processed = FALSE")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    create_test_state_with_hosts(pool, vec!["localhost".to_string()])
}

pub fn create_test_state_with_hosts(pool: PgPool, accepted_hosts: Vec<String>) -> AppState {
    let pool = Arc::new(pool);

    let mention_repo = Arc::new(PgMentionRepository::new(pool.clone()));
    let domain_entry_repo = Arc::new(PgDomainEntryRepository::new(pool.clone()));
    let block_rule_repo = Arc::new(PgBlockRuleRepository::new(pool.clone()));
    let settings_repo = Arc::new(PgSettingsRepository::new(pool.clone()));

    let fetcher = Arc::new(HttpPageFetcher::new(Duration::from_secs(2)).unwrap());

    let admission_service = Arc::new(AdmissionService::new(
        mention_repo.clone(),
        domain_entry_repo.clone(),
        block_rule_repo.clone(),
        settings_repo.clone(),
        accepted_hosts,
    ));
    let mention_service = Arc::new(MentionService::new(mention_repo));
    let domain_entry_service = Arc::new(DomainEntryService::new(
        domain_entry_repo,
        fetcher,
        "https://mentions.example.net/".to_string(),
    ));
    let block_rule_service = Arc::new(BlockRuleService::new(block_rule_repo));
    let settings_service = Arc::new(SettingsService::new(settings_repo));

    AppState {
        admission_service,
        mention_service,
        domain_entry_service,
        block_rule_service,
        settings_service,
        db: pool,
        admin_token: TEST_ADMIN_TOKEN.to_string(),
    }
}
