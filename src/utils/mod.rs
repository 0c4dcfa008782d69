//! Utility functions for hostname matching, URL normalization, and
//! verification token scanning.
//!
//! - [`host_pattern`] - Block-rule domain pattern matching
//! - [`url_norm`] - URL/hostname normalization
//! - [`token_scan`] - Verification token detection in HTML

pub mod host_pattern;
pub mod token_scan;
pub mod url_norm;
