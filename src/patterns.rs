//! Compiled regex patterns for text normalization and node classification.
//!
//! All patterns are compiled once at first use using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Normalization Patterns
// =============================================================================

/// Runs of Unicode whitespace and the braille blank (U+2800) that some sites
/// use as an invisible spacer.
pub static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s\x{2800}]+").expect("WHITESPACE_RUN regex")
});

/// Line breaks plus every control, format, private-use and unassigned code point.
pub static CONTROL_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\r\n\p{C}]").expect("CONTROL_CHARS regex")
});

/// Everything that carries no visible glyph: separators, control characters
/// and the braille blank.
pub static INVISIBLE_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Z}\p{C}\t\r\n\x{2800}]").expect("INVISIBLE_CHARS regex")
});

/// Unicode punctuation.
pub static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{P}").expect("PUNCTUATION regex")
});

// =============================================================================
// Reference Patterns
// =============================================================================

/// Leading URI scheme (`javascript:`, `mailto:`, `https:`).
pub static URI_SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z][A-Za-z0-9+.\-]*):").expect("URI_SCHEME regex")
});

/// YouTube watch, short, embed and legacy `/v/` URLs. Group 5 is the video id.
pub static YOUTUBE_VIDEO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(youtu\.be/|youtube\.com/(watch\?(.*&)?v=|(embed|v)/))([\w-]{11})")
        .expect("YOUTUBE_VIDEO regex")
});

// =============================================================================
// Encoding Patterns
// =============================================================================

/// Charset declared in a `<meta charset>` tag or in the `content` of a
/// `<meta http-equiv="Content-Type">` tag.
pub static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;/]+)"#).expect("META_CHARSET regex")
});
