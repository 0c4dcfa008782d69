//! Request/response DTOs for the HTTP API.

pub mod block_rule;
pub mod domain_entry;
pub mod health;
pub mod mention;
pub mod settings;
pub mod webmention;
