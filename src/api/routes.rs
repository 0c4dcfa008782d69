//! Admin API route configuration.
//!
//! All endpoints here require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    block_rule_list_handler, claim_pending_handler, create_block_rule_handler,
    create_domain_handler, delete_block_rule_handler, delete_domain_handler, domain_list_handler,
    mention_list_handler, reverify_domains_handler, settings_handler, store_mention_handler,
    update_settings_handler, verify_domain_handler,
};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// All admin API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET    /domains`              - List registry entries
/// - `POST   /domains`              - Register a domain (issues a token)
/// - `DELETE /domains/{id}`         - Remove a registry entry
/// - `POST   /domains/{id}/verify`  - On-demand ownership check
/// - `POST   /domains/reverify`     - Re-verification sweep
/// - `GET    /block-rules`          - List block rules
/// - `POST   /block-rules`          - Create a block rule
/// - `DELETE /block-rules/{id}`     - Delete a block rule
/// - `GET    /settings`             - Read settings
/// - `PATCH  /settings`             - Update the admission mode
/// - `GET    /mentions`             - Confirmed mentions for a page
/// - `POST   /mentions`             - Store a confirmed mention
/// - `POST   /pending/claim`        - Drain a batch from the pending queue
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/domains",
            get(domain_list_handler).post(create_domain_handler),
        )
        .route("/domains/reverify", post(reverify_domains_handler))
        .route("/domains/{id}", axum::routing::delete(delete_domain_handler))
        .route("/domains/{id}/verify", post(verify_domain_handler))
        .route(
            "/block-rules",
            get(block_rule_list_handler).post(create_block_rule_handler),
        )
        .route(
            "/block-rules/{id}",
            axum::routing::delete(delete_block_rule_handler),
        )
        .route(
            "/settings",
            get(settings_handler).patch(update_settings_handler),
        )
        .route(
            "/mentions",
            get(mention_list_handler).post(store_mention_handler),
        )
        .route("/pending/claim", post(claim_pending_handler))
}
