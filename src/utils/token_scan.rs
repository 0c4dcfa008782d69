//! Verification token detection in fetched HTML.
//!
//! A domain proves ownership by publishing its token in either tag form:
//!
//! ```html
//! <meta name="webmentions-verification" content="TOKEN">
//! <link rel="webmentions-verification" href="https://host/verify?token=TOKEN">
//! ```
//!
//! Attribute order within the tag is insignificant. Tag and attribute names
//! match case-insensitively; the token itself matches exactly.

use regex::Regex;

/// `name` attribute expected on the meta tag form.
pub const META_NAME: &str = "webmentions-verification";

/// `rel` attribute expected on the link tag form.
pub const LINK_REL: &str = "webmentions-verification";

/// Returns true if `html` carries the token in one of the accepted tag forms.
///
/// The token appearing in unrelated page text does not count.
pub fn token_present_in_html(html: &str, token: &str) -> bool {
    let marker = regex::escape(META_NAME);
    let tok = regex::escape(token);

    // Case-insensitivity is scoped to the tag/attribute parts; the token
    // itself must match exactly.
    let patterns = [
        // <meta name="..." content="TOKEN">, either attribute order
        format!(r#"(?i:<meta[^>]+name=["']{marker}["'][^>]+content=["']){tok}["']"#),
        format!(r#"(?i:<meta[^>]+content=["']){tok}(?i:["'][^>]+name=["']{marker}["'])"#),
        // <link rel="..." href="...TOKEN...">, either attribute order
        format!(r#"(?i:<link[^>]+rel=["']{marker}["'][^>]+href=["'][^"']*){tok}[^"']*["']"#),
        format!(r#"(?i:<link[^>]+href=["'][^"']*){tok}(?i:[^"']*["'][^>]+rel=["']{marker}["'])"#),
    ];

    patterns.iter().any(|p| {
        Regex::new(p)
            .map(|re| re.is_match(html))
            .unwrap_or(false)
    })
}
