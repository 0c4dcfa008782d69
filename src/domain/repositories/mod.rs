//! Repository traits defining the storage contract.
//!
//! All storage access goes through these narrow traits so backends stay
//! pluggable and services are testable with mocks.

pub mod block_rule_repository;
pub mod domain_entry_repository;
pub mod mention_repository;
pub mod settings_repository;

pub use block_rule_repository::BlockRuleRepository;
pub use domain_entry_repository::DomainEntryRepository;
pub use mention_repository::{MentionRepository, DEFAULT_CLAIM_BATCH, MENTIONS_PER_PAGE};
pub use settings_repository::SettingsRepository;

#[cfg(test)]
pub use block_rule_repository::MockBlockRuleRepository;
#[cfg(test)]
pub use domain_entry_repository::MockDomainEntryRepository;
#[cfg(test)]
pub use mention_repository::MockMentionRepository;
#[cfg(test)]
pub use settings_repository::MockSettingsRepository;
