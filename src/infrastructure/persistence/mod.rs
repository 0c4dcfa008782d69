//! PostgreSQL implementations of the repository traits.

pub mod pg_block_rule_repository;
pub mod pg_domain_entry_repository;
pub mod pg_mention_repository;
pub mod pg_settings_repository;

pub use pg_block_rule_repository::PgBlockRuleRepository;
pub use pg_domain_entry_repository::PgDomainEntryRepository;
pub use pg_mention_repository::PgMentionRepository;
pub use pg_settings_repository::PgSettingsRepository;
