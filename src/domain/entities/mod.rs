//! Core business entities.

pub mod block_rule;
pub mod domain_entry;
pub mod mention;
pub mod mode;

pub use block_rule::{BlockRule, NewBlockRule};
pub use domain_entry::{DomainEntry, ListType, NewDomainEntry};
pub use mention::{Mention, NewMention, PendingMention, MENTION_TYPES};
pub use mode::{WebmentionMode, WEBMENTION_MODE_KEY};
