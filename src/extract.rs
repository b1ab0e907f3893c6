//! News post extraction from a raw page.
//!
//! Ties the stages together: parse, select the content roots, strip
//! non-content markup, capture the lead image and paragraph, classify, and
//! assemble.

use tracing::debug;

use crate::assembler::assemble_news_post;
use crate::dom;
use crate::error::Result;
use crate::extractor::parse_news_post_content;
use crate::html_processing;
use crate::options::Options;
use crate::result::{NewsPost, PreviewMeta};
use crate::url_utils::parse_base_url;

/// Main entry point for news post extraction.
pub(crate) fn extract_news_post(
    html: &str,
    mut preview: PreviewMeta,
    options: &Options,
) -> Result<NewsPost> {
    debug!(
        uri = %preview.uri,
        html_len = html.len(),
        source = %options.source,
        "extracting news post"
    );

    let base = parse_base_url(&preview.uri)?;
    let document = dom::parse(html);

    let roots = html_processing::select_content_roots(&document, &options.content_selector)?;
    html_processing::purify_content(&roots, &options.remove_selectors)?;

    if preview.image.is_none() {
        if let Some(selector) = &options.lead_image_selector {
            preview.image = html_processing::take_lead_image(&document, selector, &base)?;
            debug!(found = preview.image.is_some(), "lead image lookup");
        }
    }

    let needs_description = preview.description.as_deref().is_none_or(|d| d.trim().is_empty());
    if options.lead_paragraph_description && needs_description {
        preview.description = html_processing::take_lead_paragraph(&roots);
        debug!(found = preview.description.is_some(), "lead paragraph lookup");
    }

    let items = parse_news_post_content(&roots, &base, options);
    let post = assemble_news_post(preview, items, options)?;

    debug!(
        items = post.items.len(),
        description_len = post.description.chars().count(),
        "extraction complete"
    );
    Ok(post)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::result::ContentItem;

    fn preview() -> PreviewMeta {
        PreviewMeta::new("https://x.test/news/1", "Title").with_description("Summary")
    }

    #[test]
    fn test_extract_from_article() {
        let html = concat!(
            "<html><body><nav>Menu items</nav>",
            "<article><h2>Heading</h2><p>Paragraph text.</p></article>",
            "</body></html>",
        );

        let post = extract_news_post(html, preview(), &Options::default()).unwrap();

        assert_eq!(
            post.items,
            vec![ContentItem::heading("Heading", 2), ContentItem::text("Paragraph text.")]
        );
    }

    #[test]
    fn test_invalid_uri() {
        let preview = PreviewMeta::new("not a uri", "Title");
        let result = extract_news_post("<article>x</article>", preview, &Options::default());
        assert!(matches!(result, Err(Error::InvalidUri(_))));
    }

    #[test]
    fn test_invalid_remove_selector() {
        let opts = Options {
            remove_selectors: vec!["div[".to_string()],
            ..Options::default()
        };
        let result = extract_news_post("<article>x</article>", preview(), &opts);
        assert!(matches!(result, Err(Error::ParseError(_))));
    }

    #[test]
    fn test_lead_image_not_repeated() {
        let html = concat!(
            r#"<article><figure class="main"><img src="/lead.jpg"></figure>"#,
            r#"<p>Body text.</p><img src="/second.jpg"></article>"#,
        );
        let opts = Options {
            lead_image_selector: Some("figure.main img".to_string()),
            ..Options::default()
        };

        let post = extract_news_post(html, preview(), &opts).unwrap();

        assert_eq!(post.image.as_deref(), Some("https://x.test/lead.jpg"));
        assert_eq!(
            post.items,
            vec![
                ContentItem::text("Body text."),
                ContentItem::image("https://x.test/second.jpg", None),
            ]
        );
    }

    #[test]
    fn test_lead_paragraph_description() {
        let html = "<article><p>Lead paragraph.</p><p>Body paragraph.</p></article>";
        let opts = Options {
            lead_paragraph_description: true,
            ..Options::default()
        };
        let preview = PreviewMeta::new("https://x.test/news/1", "Title");

        let post = extract_news_post(html, preview, &opts).unwrap();

        assert_eq!(post.description, "Lead paragraph.");
        assert_eq!(post.items, vec![ContentItem::text("Body paragraph.")]);
    }
}
