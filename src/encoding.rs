//! Character encoding detection and transcoding.
//!
//! Regional news sites still serve legacy code pages (windows-1251,
//! KOI8-R, ISO-8859-x). Raw page bytes are decoded to UTF-8 before parsing,
//! using the byte order mark first and the `<meta>` charset declaration
//! second.

use encoding_rs::{Encoding, UTF_8};

use crate::patterns::META_CHARSET;

/// Bytes scanned for a `<meta>` charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// Detect the character encoding of an HTML page.
///
/// Looks, in order, at:
/// 1. A byte order mark
/// 2. `<meta charset="...">` or `<meta http-equiv="Content-Type" content="...; charset=...">`
///    within the first 1024 bytes
/// 3. UTF-8
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    declared_charset(html)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Charset label declared in the page head, if any.
fn declared_charset(html: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);
    META_CHARSET
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Malformed sequences become U+FFFD instead of failing; a matching byte
/// order mark is stripped.
///
/// # Examples
///
/// ```
/// use rs_newspost::encoding::decode_html;
///
/// let html = b"<meta charset=\"windows-1251\"><p>\xcf\xf0\xe8\xe2\xe5\xf2</p>";
/// assert!(decode_html(html).contains("Привет"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, used, had_errors) = encoding.decode(html);

    if had_errors {
        tracing::debug!(encoding = used.name(), "replaced malformed byte sequences");
    }
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_from_meta_charset() {
        let html = br#"<html><head><meta charset="windows-1251"></head></html>"#;
        assert_eq!(detect_encoding(html).name(), "windows-1251");
    }

    #[test]
    fn detect_from_content_type() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=KOI8-R">"#;
        assert_eq!(detect_encoding(html).name(), "KOI8-R");
    }

    #[test]
    fn detect_case_insensitive_unquoted() {
        let html = b"<HEAD><META CHARSET=UTF-8></HEAD>";
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn bom_wins_over_meta() {
        let html = b"\xEF\xBB\xBF<meta charset=\"windows-1251\"><p>x</p>";
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn unknown_label_defaults_to_utf8() {
        let html = br#"<meta charset="klingon-1">"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn declaration_past_sniff_limit_ignored() {
        let mut html = vec![b' '; SNIFF_LIMIT];
        html.extend_from_slice(br#"<meta charset="windows-1251">"#);
        assert_eq!(detect_encoding(&html), UTF_8);
    }

    #[test]
    fn decode_windows1251() {
        let html = b"<meta charset=\"windows-1251\"><p>\xcd\xee\xe2\xee\xf1\xf2\xe8</p>";
        assert!(decode_html(html).contains("Новости"));
    }

    #[test]
    fn decode_strips_bom() {
        let html = b"\xEF\xBB\xBF<p>text</p>";
        assert_eq!(decode_html(html), "<p>text</p>");
    }

    #[test]
    fn decode_invalid_utf8_gracefully() {
        let html = b"<p>Test \xFF\xFE end</p>";
        let decoded = decode_html(html);
        assert!(decoded.contains("Test"));
        assert!(decoded.contains('\u{FFFD}'));
    }
}
