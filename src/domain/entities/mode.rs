//! Site-wide webmention admission mode.

use serde::{Deserialize, Serialize};

/// Settings key under which the admission mode is stored.
pub const WEBMENTION_MODE_KEY: &str = "webmention_mode";

/// Policy switch between permissive and allow-list-restricted admission.
///
/// Absent or unrecognized stored values resolve to [`WebmentionMode::AdmitAll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebmentionMode {
    #[default]
    AdmitAll,
    WhitelistOnly,
}

impl WebmentionMode {
    /// Resolves a stored value, defaulting to `admit_all`.
    pub fn resolve(value: Option<&str>) -> Self {
        match value {
            Some("whitelist_only") => Self::WhitelistOnly,
            _ => Self::AdmitAll,
        }
    }

    /// Strict parse used when an operator sets the mode.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admit_all" => Some(Self::AdmitAll),
            "whitelist_only" => Some(Self::WhitelistOnly),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdmitAll => "admit_all",
            Self::WhitelistOnly => "whitelist_only",
        }
    }
}
