//! HTML Processing
//!
//! Functions that prepare the parsed page before classification: locating
//! the content roots, capturing the lead image and lead paragraph, and
//! stripping markup that never carries article content.

use dom_query::{Document, Matcher, Selection};
use tracing::debug;
use url::Url;

use crate::dom;
use crate::error::{Error, Result};
use crate::extractor::tags::PURGED_TAGS;
use crate::text::normalize_text;
use crate::url_utils::{is_data_uri, resolve_reference};

/// Anchors whose `href` runs script instead of navigating.
const SCRIPT_LINK_SELECTOR: &str = r#"a[href^="javascript"]"#;

/// Attributes that may carry the lead image source, in priority order.
/// Lazy-loading themes keep the real source in a `data-` attribute.
const LEAD_IMAGE_ATTRIBUTES: [&str; 3] = ["src", "data-lazy-src", "data-src"];

/// Paragraphs inspected when looking for the lead paragraph.
const LEAD_PARAGRAPH_SCAN_LIMIT: usize = 10;

/// Compile a CSS selector, reporting invalid syntax as a parse error.
pub fn compile_selector(css: &str) -> Result<Matcher> {
    Matcher::new(css).map_err(|_| Error::ParseError(format!("invalid selector: {css}")))
}

// === Content Roots ===

/// Select the content roots of a page.
///
/// # Errors
/// * `ParseError` - the selector is not valid CSS
/// * `NoContent` - the selector matched nothing
pub fn select_content_roots<'a>(
    doc: &'a Document,
    content_selector: &str,
) -> Result<Selection<'a>> {
    let matcher = compile_selector(content_selector)?;
    let roots = doc.select_matcher(&matcher);
    if roots.is_empty() {
        debug!(selector = content_selector, "content selector matched nothing");
        return Err(Error::NoContent);
    }
    Ok(roots)
}

// === Purification ===

/// Remove script links, scripts, videos, styles, forms and tables from the
/// content, then everything matching `extra_selectors`.
///
/// # Errors
/// * `ParseError` - one of `extra_selectors` is not valid CSS
pub fn purify_content(content: &Selection, extra_selectors: &[String]) -> Result<()> {
    let extra = extra_selectors
        .iter()
        .map(|css| compile_selector(css))
        .collect::<Result<Vec<_>>>()?;

    dom::remove(&content.select(SCRIPT_LINK_SELECTOR));
    dom::remove(&content.select(&PURGED_TAGS.join(", ")));

    for matcher in &extra {
        dom::remove(&content.select_matcher(matcher));
    }
    Ok(())
}

// === Lead Capture ===

/// Take the lead image out of the page.
///
/// The first element matching `selector` anywhere in the document supplies
/// the image from its first non-empty source attribute, then is removed so
/// the image is not extracted a second time from the body.
///
/// # Returns
/// * The resolved image URL, or `None` when nothing matched or the source
///   does not resolve
pub fn take_lead_image(doc: &Document, selector: &str, base: &Url) -> Result<Option<String>> {
    let matcher = compile_selector(selector)?;
    let matched = doc.select_matcher(&matcher);
    let Some(node) = matched.nodes().first().copied() else {
        return Ok(None);
    };

    let source = LEAD_IMAGE_ATTRIBUTES
        .iter()
        .filter_map(|attr| node.attr(attr))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty() && !is_data_uri(value));

    dom::remove(&Selection::from(node));

    Ok(source.and_then(|src| resolve_reference(&src, base)))
}

/// Take the first non-empty paragraph out of the content and return its
/// normalized text.
///
/// Empty paragraphs in front of it are removed too. Only the first
/// `LEAD_PARAGRAPH_SCAN_LIMIT` paragraphs are looked at.
pub fn take_lead_paragraph(content: &Selection) -> Option<String> {
    for node in content.select("p").nodes().iter().take(LEAD_PARAGRAPH_SCAN_LIMIT) {
        let text = normalize_text(&node.text());
        let text = text.trim().to_string();
        dom::remove(&Selection::from(*node));

        if !text.is_empty() {
            return Some(text);
        }
    }
    None
}
