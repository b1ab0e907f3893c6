use encoding_rs::{Encoding, KOI8_R, WINDOWS_1251};
use rs_newspost::{extract_news_post_bytes, ContentItem, NewsPost, Options, PreviewMeta};

fn encode(encoding: &'static Encoding, html: &str) -> Vec<u8> {
    let (bytes, _, had_errors) = encoding.encode(html);
    assert!(!had_errors, "{} cannot represent the fixture", encoding.name());
    bytes.into_owned()
}

fn extract(bytes: &[u8]) -> NewsPost {
    let preview =
        PreviewMeta::new("https://gazeta.test/news/7", "Заголовок").with_description("Кратко");
    match extract_news_post_bytes(bytes, preview, &Options::default()) {
        Ok(post) => post,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn windows_1251_meta_charset() {
    let html = r#"<html><head><meta charset="windows-1251"></head><body><article>
        <h2>Погода</h2><p>Завтра ожидается снег.</p>
    </article></body></html>"#;

    let post = extract(&encode(WINDOWS_1251, html));

    assert_eq!(
        post.items,
        vec![ContentItem::heading("Погода", 2), ContentItem::text("Завтра ожидается снег.")]
    );
}

#[test]
fn koi8_r_content_type_declaration() {
    let html = r#"<html><head>
        <meta http-equiv="Content-Type" content="text/html; charset=koi8-r">
    </head><body><article><blockquote>Цитата дня</blockquote></article></body></html>"#;

    let post = extract(&encode(KOI8_R, html));

    assert_eq!(post.items, vec![ContentItem::quote("Цитата дня")]);
}

#[test]
fn utf8_bom_is_stripped() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice("<article><p>Текст статьи.</p></article>".as_bytes());

    let post = extract(&bytes);

    assert_eq!(post.items, vec![ContentItem::text("Текст статьи.")]);
}

#[test]
fn undeclared_bytes_default_to_utf8() {
    let post = extract("<article><p>Обычный UTF-8.</p></article>".as_bytes());

    assert_eq!(post.items, vec![ContentItem::text("Обычный UTF-8.")]);
}

#[test]
fn malformed_bytes_are_replaced() {
    let bytes = b"<article><p>Broken \xff\xfe bytes.</p></article>";

    let post = extract(bytes);

    assert_eq!(post.items, vec![ContentItem::text("Broken \u{fffd}\u{fffd} bytes.")]);
}
