//! Tag catalogs and node predicates.
//!
//! Pure classifying functions over a single DOM node. None of them look at
//! attribution state; the handlers combine them with the ancestor search.

use dom_query::NodeRef;

use crate::dom;
use crate::patterns::YOUTUBE_VIDEO;
use crate::url_utils::has_web_scheme;

// === Tag Lists ===

/// Quote tags: q, blockquote
pub static QUOTE_TAGS: [&str; 2] = ["q", "blockquote"];

/// Heading tags in level order: h1-h6
pub static HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Image tags: img, amp-img
pub static IMAGE_TAGS: [&str; 2] = ["img", "amp-img"];

/// Inline formatting wrappers that split one paragraph into several text nodes.
pub static FORMATTING_TAGS: [&str; 7] = ["strong", "b", "span", "s", "i", "a", "em"];

/// Elements stripped from content before walking.
pub static PURGED_TAGS: [&str; 5] = ["script", "video", "style", "form", "table"];

// === Predicates ===

/// Check for a quote element: `q`, `blockquote`, or an element carrying one
/// of the site's quote classes.
#[must_use]
pub fn is_quote(node: &NodeRef, quote_classes: &[String]) -> bool {
    if dom::has_any_tag(node, &QUOTE_TAGS) {
        return true;
    }
    quote_classes.iter().any(|class| dom::has_class(node, class))
}

/// Get the heading level (1-6) of `h1`-`h6` elements.
#[must_use]
pub fn heading_level(node: &NodeRef) -> Option<u8> {
    if !node.is_element() {
        return None;
    }
    let name = node.node_name()?;
    HEADING_TAGS
        .iter()
        .zip(1u8..)
        .find(|(tag, _)| name.eq_ignore_ascii_case(tag))
        .map(|(_, level)| level)
}

/// Check for an anchor with a usable `href`: non-empty, and either without a
/// scheme or with an http(s) scheme.
#[must_use]
pub fn is_link(node: &NodeRef) -> bool {
    if !dom::has_tag(node, "a") {
        return false;
    }
    let href = dom::attribute_or_empty(node, "href");
    !href.is_empty() && has_web_scheme(&href)
}

/// Check for `img` or `amp-img`.
#[must_use]
pub fn is_image(node: &NodeRef) -> bool {
    dom::has_any_tag(node, &IMAGE_TAGS)
}

/// Check whether the node sits directly inside a `picture` element.
#[must_use]
pub fn is_in_picture(node: &NodeRef) -> bool {
    dom::parent(node).is_some_and(|parent| dom::has_tag(&parent, "picture"))
}

/// Check for an inline formatting wrapper.
#[must_use]
pub fn is_formatting_tag(node: &NodeRef) -> bool {
    dom::has_any_tag(node, &FORMATTING_TAGS)
}

/// Check for an `iframe` element.
#[must_use]
pub fn is_iframe(node: &NodeRef) -> bool {
    dom::has_tag(node, "iframe")
}

/// Check for a `br` element.
#[must_use]
pub fn is_line_break(node: &NodeRef) -> bool {
    dom::has_tag(node, "br")
}

/// Extract the 11-character YouTube video id from an embed or watch URL.
#[must_use]
pub fn youtube_video_id(link: &str) -> Option<String> {
    YOUTUBE_VIDEO
        .captures(link)
        .and_then(|caps| caps.get(5))
        .map(|m| m.as_str().to_string())
}
