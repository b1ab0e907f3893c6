//! # rs-newspost
//!
//! Structured content extraction for news articles.
//!
//! Given the HTML of an article page and its canonical URI, this library
//! produces an ordered list of typed content items (paragraphs, headings,
//! quotes, links, images, embedded videos) and a short description,
//! collapsing messy site markup into a clean semantic model.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_newspost::{extract_news_post, ContentItem, Options, PreviewMeta};
//!
//! let html = r#"<html><body><article>
//!     <p>Hello <b>world</b>.</p>
//!     <blockquote>Quoted text</blockquote>
//! </article></body></html>"#;
//!
//! let preview = PreviewMeta::new("https://x.test/news/1", "My Article");
//! let post = extract_news_post(html, preview, &Options::default())?;
//!
//! assert_eq!(post.description, "Hello world. Quoted text");
//! # Ok::<(), rs_newspost::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Roots**: `Options::content_selector` picks the article body
//! - **Purification**: scripts, styles, forms, tables and site-specific
//!   blocks are removed
//! - **Classification**: every leaf node runs through the classifier chain
//!   (quote > heading > link > video > image > text)
//! - **Assembly**: image and link dedup, auto-description

mod assembler;
mod error;
mod extract;
mod options;
mod patterns;
mod result;
mod text;

/// DOM helpers over `dom_query` node handles.
pub mod dom;

/// Root selection, purification and lead capture.
pub mod html_processing;

/// Content classification (predicates, ancestor search, attribution, handlers).
pub mod extractor;

/// URL utilities for validation and resolution.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use assembler::assemble_news_post;
pub use error::{Error, Result};
pub use extractor::parse_news_post_content;
pub use html_processing::purify_content;
pub use options::{Options, DEFAULT_DESCRIPTION_LENGTH};
pub use result::{ContentItem, NewsPost, PreviewMeta};
pub use text::{is_acceptable_text, normalize_spaces, normalize_text};

/// Extracts a news post from an article page.
///
/// # Arguments
///
/// * `html` - The page HTML
/// * `preview` - Metadata known up front; `uri` and `title` are required
/// * `options` - Site profile and description settings
///
/// # Errors
///
/// * `InvalidUri` - `preview.uri` is not an absolute http(s) URI
/// * `ParseError` - a selector in `options` is not valid CSS
/// * `NoContent` - the page has no content root
/// * `MissingField` - `preview.title` is absent
pub fn extract_news_post(html: &str, preview: PreviewMeta, options: &Options) -> Result<NewsPost> {
    extract::extract_news_post(html, preview, options)
}

/// Extracts a news post from raw page bytes with automatic encoding detection.
///
/// The encoding comes from a byte order mark or a `<meta>` charset
/// declaration, defaulting to UTF-8. Malformed sequences are replaced rather
/// than rejected.
///
/// # Example
///
/// ```rust
/// use rs_newspost::{extract_news_post_bytes, Options, PreviewMeta};
///
/// // windows-1251 encoded page
/// let html = b"<html><head><meta charset=\"windows-1251\"></head><body><article>\
///     <p>\xcd\xee\xe2\xee\xf1\xf2\xe8 \xe4\xed\xff.</p></article></body></html>";
/// let preview = PreviewMeta::new("https://x.test/news/1", "Title");
/// let post = extract_news_post_bytes(html, preview, &Options::default())?;
/// assert_eq!(post.description, "Новости дня.");
/// # Ok::<(), rs_newspost::Error>(())
/// ```
///
/// # Errors
///
/// Same as [`extract_news_post`].
pub fn extract_news_post_bytes(
    html: &[u8],
    preview: PreviewMeta,
    options: &Options,
) -> Result<NewsPost> {
    let html = encoding::decode_html(html);
    extract_news_post(&html, preview, options)
}
