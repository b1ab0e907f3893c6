//! Text normalization helpers.
//!
//! Site-authored markup is full of non-breaking spaces, zero-width joiners,
//! stray line breaks and decorative punctuation. These helpers turn raw DOM
//! text into item bodies and decide whether a fragment is worth emitting.

use crate::patterns::{CONTROL_CHARS, INVISIBLE_CHARS, PUNCTUATION, WHITESPACE_RUN};

/// Characters stripped from both ends when comparing link text with its URL.
const LINK_TRIM_CHARS: &[char] = &[' ', '/', '\t', '\n', '\r', '\0', '\u{0B}'];

/// Collapse every run of whitespace (including U+2800) into a single space.
///
/// Leading and trailing runs are collapsed, not removed, so fragments split
/// by inline markup can be concatenated back together.
#[must_use]
pub fn normalize_spaces(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Strip line breaks and control/format characters, then collapse spaces.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let stripped = CONTROL_CHARS.replace_all(text, "");
    normalize_spaces(&stripped)
}

/// Check whether a fragment carries real content.
///
/// More than five visible characters always pass. Shorter fragments pass
/// only if something other than punctuation remains, which rejects
/// decorative separators such as "—" or "·" while keeping short words.
#[must_use]
pub fn is_acceptable_text(text: &str) -> bool {
    let visible = INVISIBLE_CHARS.replace_all(text, "");

    if visible.chars().count() > 5 {
        return true;
    }

    !PUNCTUATION.replace_all(&visible, "").is_empty()
}

/// Trim spaces, slashes and ASCII control whitespace from both ends.
#[must_use]
pub fn trim_link(text: &str) -> &str {
    text.trim_matches(LINK_TRIM_CHARS)
}
