//! URL and hostname normalization helpers used by the admission pipeline
//! and the domain registry.

use url::Url;

/// Extracts the hostname from a URL string.
///
/// Returns `None` if the URL does not parse or has no host, so callers
/// fail closed to "no match" on malformed input.
pub fn host_from_url(url: &str) -> Option<String> {
    Url::parse(url).ok()?.host_str().map(|h| h.to_string())
}

/// Normalizes a hostname for whitelist membership: lowercase, leading
/// `www.` stripped.
pub fn normalize_host(host: &str) -> String {
    let h = host.to_lowercase();
    h.strip_prefix("www.").unwrap_or(&h).to_string()
}

/// Normalizes operator input into a bare registry domain.
///
/// Accepts `https://www.Example.com/path` and the like; strips scheme,
/// path, and leading `www.`.
pub fn normalize_domain(input: &str) -> String {
    let d = input.trim().to_lowercase();
    let d = d
        .strip_prefix("https://")
        .or_else(|| d.strip_prefix("http://"))
        .unwrap_or(&d);
    let d = d.split('/').next().unwrap_or(d);
    normalize_host(d)
}
