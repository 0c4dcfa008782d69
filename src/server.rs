//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, service wiring, and Axum server lifecycle.

use crate::application::services::{
    AdmissionService, BlockRuleService, DomainEntryService, MentionService, SettingsService,
};
use crate::config::Config;
use crate::infrastructure::fetch::HttpPageFetcher;
use crate::infrastructure::persistence::{
    PgBlockRuleRepository, PgDomainEntryRepository, PgMentionRepository, PgSettingsRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Repositories and services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate");

    let pool_arc = Arc::new(pool);
    let mention_repository = Arc::new(PgMentionRepository::new(pool_arc.clone()));
    let domain_entry_repository = Arc::new(PgDomainEntryRepository::new(pool_arc.clone()));
    let block_rule_repository = Arc::new(PgBlockRuleRepository::new(pool_arc.clone()));
    let settings_repository = Arc::new(PgSettingsRepository::new(pool_arc.clone()));

    let fetcher = Arc::new(HttpPageFetcher::new(Duration::from_secs(
        config.verify_timeout_seconds,
    ))?);

    let admission_service = Arc::new(AdmissionService::new(
        mention_repository.clone(),
        domain_entry_repository.clone(),
        block_rule_repository.clone(),
        settings_repository.clone(),
        config.accepted_target_hosts.clone(),
    ));
    let mention_service = Arc::new(MentionService::new(mention_repository));
    let domain_entry_service = Arc::new(DomainEntryService::new(
        domain_entry_repository,
        fetcher,
        config.base_url.clone(),
    ));
    let block_rule_service = Arc::new(BlockRuleService::new(block_rule_repository));
    let settings_service = Arc::new(SettingsService::new(settings_repository));

    let state = AppState {
        admission_service,
        mention_service,
        domain_entry_service,
        block_rule_service,
        settings_service,
        db: pool_arc,
        admin_token: config.admin_token.clone(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
