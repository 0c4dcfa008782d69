//! HTTP request handlers.

pub mod block_rules;
pub mod domains;
pub mod health;
pub mod mentions;
pub mod settings;
pub mod webmention;

pub use block_rules::{block_rule_list_handler, create_block_rule_handler, delete_block_rule_handler};
pub use domains::{
    create_domain_handler, delete_domain_handler, domain_list_handler, reverify_domains_handler,
    verify_domain_handler,
};
pub use health::health_handler;
pub use mentions::{claim_pending_handler, mention_list_handler, store_mention_handler};
pub use settings::{settings_handler, update_settings_handler};
pub use webmention::webmention_handler;
