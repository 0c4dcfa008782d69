//! Infrastructure layer: database persistence and outbound HTTP.

pub mod fetch;
pub mod persistence;
