//! Application services orchestrating business logic over the repository
//! traits.

pub mod admission_service;
pub mod block_rule_service;
pub mod domain_entry_service;
pub mod mention_service;
pub mod settings_service;

pub use admission_service::AdmissionService;
pub use block_rule_service::{BlockRuleInput, BlockRuleService};
pub use domain_entry_service::{
    DomainEntryService, SweepResult, VerificationInstructions, VerificationOutcome,
};
pub use mention_service::MentionService;
pub use settings_service::SettingsService;
