//! Hostname pattern matching for block rules.
//!
//! Patterns are compared as full DNS-style hostnames, never as URLs.
//! Three kinds are supported:
//!
//! - `exact` — host equals the pattern
//! - `suffix` — `*.evil.com` (or bare `evil.com`) matches `evil.com` and any
//!   host ending with `.evil.com`
//! - `prefix` — `spam.*` (or bare `spam`) matches `spam` and any host
//!   starting with `spam.`
//!
//! Both sides are lowercased before comparison.

use serde::{Deserialize, Serialize};

/// How a block rule's `domain_pattern` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Exact,
    Suffix,
    Prefix,
}

impl PatternKind {
    /// Parses a stored kind string. Unknown values yield `None` so that
    /// rules with an unrecognized kind match nothing instead of blocking.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "exact" => Some(Self::Exact),
            "suffix" => Some(Self::Suffix),
            "prefix" => Some(Self::Prefix),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Suffix => "suffix",
            Self::Prefix => "prefix",
        }
    }
}

/// Returns true if `host` matches `pattern` under the given kind.
pub fn matches_domain_pattern(host: &str, pattern: &str, kind: PatternKind) -> bool {
    let h = host.to_lowercase();
    let p = pattern.to_lowercase();

    match kind {
        PatternKind::Exact => h == p,
        PatternKind::Suffix => {
            let base = p.strip_prefix("*.").unwrap_or(&p);
            h == base || h.ends_with(&format!(".{base}"))
        }
        PatternKind::Prefix => {
            let base = p.strip_suffix(".*").unwrap_or(&p);
            h == base || h.starts_with(&format!("{base}."))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_is_case_insensitive() {
        assert!(matches_domain_pattern("A.com", "a.com", PatternKind::Exact));
        assert!(matches_domain_pattern("a.com", "A.COM", PatternKind::Exact));
        assert!(!matches_domain_pattern("b.com", "a.com", PatternKind::Exact));
    }

    #[test]
    fn test_suffix_with_wildcard() {
        let cases = [
            ("evil.com", true),
            ("a.evil.com", true),
            ("b.a.evil.com", true),
            // Ends with ".evil.com", so it matches by design.
            ("evil.com.evil.com", true),
            ("notevil.com", false),
            ("evil.com.uk", false),
        ];
        for (host, expected) in cases {
            assert_eq!(
                matches_domain_pattern(host, "*.evil.com", PatternKind::Suffix),
                expected,
                "host: {host}"
            );
        }
    }

    #[test]
    fn test_suffix_without_wildcard() {
        assert!(matches_domain_pattern(
            "evil.com",
            "evil.com",
            PatternKind::Suffix
        ));
        assert!(matches_domain_pattern(
            "a.evil.com",
            "evil.com",
            PatternKind::Suffix
        ));
        assert!(!matches_domain_pattern(
            "notevil.com",
            "evil.com",
            PatternKind::Suffix
        ));
    }

    #[test]
    fn test_prefix_with_wildcard() {
        let cases = [
            ("spam.com", true),
            ("spam.net", true),
            ("spam", true),
            ("nospam.com", false),
            ("myspam.com", false),
        ];
        for (host, expected) in cases {
            assert_eq!(
                matches_domain_pattern(host, "spam.*", PatternKind::Prefix),
                expected,
                "host: {host}"
            );
        }
    }

    #[test]
    fn test_prefix_without_wildcard() {
        assert!(matches_domain_pattern("spam.com", "spam", PatternKind::Prefix));
        assert!(matches_domain_pattern("spam", "spam", PatternKind::Prefix));
        assert!(!matches_domain_pattern("spammy.com", "spam", PatternKind::Prefix));
    }

    #[test]
    fn test_suffix_case_insensitive() {
        assert!(matches_domain_pattern(
            "A.EVIL.com",
            "*.Evil.Com",
            PatternKind::Suffix
        ));
    }

    #[test]
    fn test_pattern_kind_parse() {
        assert_eq!(PatternKind::parse("exact"), Some(PatternKind::Exact));
        assert_eq!(PatternKind::parse("suffix"), Some(PatternKind::Suffix));
        assert_eq!(PatternKind::parse("prefix"), Some(PatternKind::Prefix));
        assert_eq!(PatternKind::parse("glob"), None);
    }
}
