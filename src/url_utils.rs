//! URL utilities for validating and resolving references found in article markup.
//!
//! All resolution goes through `url::Url::join`, which applies the standard
//! relative-reference rules and percent-encodes unsafe characters. A
//! reference that cannot be turned into an absolute http(s) URL is reported
//! as `None`, never as an error.

use url::Url;

use crate::error::{Error, Result};
use crate::patterns::URI_SCHEME;

/// Schemes accepted for links and images.
const WEB_SCHEMES: [&str; 2] = ["http", "https"];

/// Check if a string is a valid absolute http(s) URL with a host.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if is_web_url(&url) => (true, Some(url)),
        _ => (false, None),
    }
}

/// Parse the canonical article URI used as the base for relative references.
pub fn parse_base_url(uri: &str) -> Result<Url> {
    match is_absolute_url(uri) {
        (true, Some(url)) => Ok(url),
        _ => Err(Error::InvalidUri(uri.to_string())),
    }
}

/// Get the explicit scheme of a reference, if it has one.
///
/// Scheme-relative (`//host/path`) and relative references have none.
#[must_use]
pub fn reference_scheme(reference: &str) -> Option<&str> {
    URI_SCHEME
        .captures(reference)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Check whether a reference may point to a web page: no scheme at all, or
/// an http(s) scheme.
#[must_use]
pub fn has_web_scheme(reference: &str) -> bool {
    reference_scheme(reference)
        .is_none_or(|scheme| WEB_SCHEMES.iter().any(|s| scheme.eq_ignore_ascii_case(s)))
}

/// Check for an inline `data:` URI (case-insensitive).
#[must_use]
pub fn is_data_uri(reference: &str) -> bool {
    reference
        .trim_start()
        .get(..5)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("data:"))
}

/// Resolve a reference against the article base URL.
///
/// # Returns
/// * The absolute, percent-encoded URL, or `None` when the reference is
///   empty, malformed, or does not resolve to an http(s) URL with a host
#[must_use]
pub fn resolve_reference(reference: &str, base: &Url) -> Option<String> {
    let reference = reference.trim();

    if reference.is_empty() {
        return None;
    }

    let resolved = base.join(reference).ok()?;
    if !is_web_url(&resolved) {
        return None;
    }

    Some(resolved.to_string())
}

fn is_web_url(url: &Url) -> bool {
    WEB_SCHEMES.contains(&url.scheme()) && url.host_str().is_some_and(|h| !h.is_empty())
}
