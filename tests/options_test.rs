use rs_newspost::{extract_news_post, ContentItem, Error, NewsPost, Options, PreviewMeta};

const PAGE: &str = r#"<html><body>
    <div class="hero"><img class="cover" data-src="/img/cover.jpg" src=""></div>
    <div class="article-text">
        <p class="lead">Lead paragraph of the story.</p>
        <div class="share">Share this on social networks</div>
        <div class="line-quote">Words of the mayor</div>
        <div class="pull-quote">Pulled quote text</div>
        <p>Main body text.</p>
        <img src="/img/inline.jpg">
    </div>
</body></html>"#;

fn preview() -> PreviewMeta {
    PreviewMeta::new("https://city.test/news/42", "Story")
}

fn extract(options: &Options) -> NewsPost {
    match extract_news_post(PAGE, preview().with_description("d"), options) {
        Ok(post) => post,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn content_selector_and_remove_selectors() {
    let options = Options {
        remove_selectors: vec![".share".to_string()],
        ..Options::for_site("city", "div.article-text")
    };

    let post = extract(&options);

    assert_eq!(
        post.items,
        vec![
            ContentItem::text("Lead paragraph of the story."),
            ContentItem::quote("Words of the mayor"),
            ContentItem::text("Pulled quote text"),
            ContentItem::text("Main body text."),
        ]
    );
    assert_eq!(post.image.as_deref(), Some("https://city.test/img/inline.jpg"));
}

#[test]
fn quote_classes_replace_default_class() {
    let options = Options {
        remove_selectors: vec![".share".to_string()],
        quote_classes: vec!["pull-quote".to_string()],
        ..Options::for_site("city", "div.article-text")
    };

    let post = extract(&options);

    assert!(post.items.contains(&ContentItem::quote("Pulled quote text")));
    assert!(post.items.contains(&ContentItem::text("Words of the mayor")));
}

#[test]
fn lead_image_selector_sets_post_image() {
    let options = Options {
        lead_image_selector: Some("img.cover".to_string()),
        ..Options::for_site("city", "div.article-text")
    };

    let post = extract(&options);

    assert_eq!(post.image.as_deref(), Some("https://city.test/img/cover.jpg"));
    assert!(post
        .items
        .contains(&ContentItem::image("https://city.test/img/inline.jpg", None)));
}

#[test]
fn preview_image_skips_lead_image_lookup() {
    let options = Options {
        lead_image_selector: Some("img.cover".to_string()),
        ..Options::for_site("city", "div.article-text")
    };
    let preview = preview().with_description("d").with_image("https://cdn.test/given.jpg");

    let post = match extract_news_post(PAGE, preview, &options) {
        Ok(post) => post,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(post.image.as_deref(), Some("https://cdn.test/given.jpg"));
}

#[test]
fn lead_paragraph_becomes_description() {
    let options = Options {
        lead_paragraph_description: true,
        remove_selectors: vec![".share".to_string()],
        ..Options::for_site("city", "div.article-text")
    };

    let post = match extract_news_post(PAGE, preview(), &options) {
        Ok(post) => post,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(post.description, "Lead paragraph of the story.");
    assert_eq!(post.items.first(), Some(&ContentItem::quote("Words of the mayor")));
}

#[test]
fn explicit_description_wins_over_lead_paragraph() {
    let options = Options {
        lead_paragraph_description: true,
        ..Options::for_site("city", "div.article-text")
    };

    let post = extract(&options);

    assert_eq!(post.description, "d");
    assert_eq!(post.items.first(), Some(&ContentItem::text("Lead paragraph of the story.")));
}

#[test]
fn invalid_content_selector_is_parse_error() {
    let options = Options::for_site("city", "div[[[");

    let result = extract_news_post(PAGE, preview(), &options);

    assert!(matches!(result, Err(Error::ParseError(_))));
}

#[test]
fn invalid_lead_image_selector_is_parse_error() {
    let options = Options {
        lead_image_selector: Some("img[[[".to_string()),
        ..Options::for_site("city", "div.article-text")
    };

    let result = extract_news_post(PAGE, preview(), &options);

    assert!(matches!(result, Err(Error::ParseError(_))));
}
