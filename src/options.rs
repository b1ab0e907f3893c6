//! Configuration options for news content extraction.
//!
//! `Options` carries the generic tuning knobs (description budget) together
//! with the site profile a per-site caller supplies: where the article body
//! lives, which subtrees to strip, and where the lead image sits.

/// Default auto-description budget in characters.
pub const DEFAULT_DESCRIPTION_LENGTH: usize = 200;

/// Configuration options for news content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_newspost::Options;
///
/// let options = Options {
///     content_selector: "div.entry-content".to_string(),
///     remove_selectors: vec!["div.share-buttons".to_string()],
///     ..Options::default()
/// };
/// assert_eq!(options.description_length, 200);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Name of the site profile producing the post.
    ///
    /// Copied into `NewsPost::source`.
    ///
    /// Default: `"generic"`
    pub source: String,

    /// CSS selector for the article body. Every match becomes a content root.
    ///
    /// A page where nothing matches has no content.
    ///
    /// Default: `"article"`
    pub content_selector: String,

    /// Extra CSS selectors removed from the content roots before walking,
    /// after the built-in cleanup (scripts, styles, forms, tables, ...).
    ///
    /// Default: empty
    pub remove_selectors: Vec<String>,

    /// CSS selector for the lead image of the article.
    ///
    /// When set and the preview carries no image, the first match supplies
    /// the post image and is removed from the content so it is not emitted
    /// twice.
    ///
    /// Default: `None`
    pub lead_image_selector: Option<String>,

    /// Use the first non-empty paragraph of the content as the explicit
    /// description and remove it from the content.
    ///
    /// Ignored when the preview already carries a description.
    ///
    /// Default: `false`
    pub lead_paragraph_description: bool,

    /// Class names that mark an element as a quote, in addition to
    /// `q` and `blockquote`.
    ///
    /// Default: `["line-quote"]`
    pub quote_classes: Vec<String>,

    /// Target length of the auto-generated description (characters).
    ///
    /// Default: `200`
    pub description_length: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            source: "generic".to_string(),
            content_selector: "article".to_string(),
            remove_selectors: Vec::new(),
            lead_image_selector: None,
            lead_paragraph_description: false,
            quote_classes: vec!["line-quote".to_string()],
            description_length: DEFAULT_DESCRIPTION_LENGTH,
        }
    }
}

impl Options {
    /// Create options for a named site profile rooted at `content_selector`.
    #[must_use]
    pub fn for_site(source: &str, content_selector: &str) -> Self {
        Self {
            source: source.to_string(),
            content_selector: content_selector.to_string(),
            ..Self::default()
        }
    }
}
