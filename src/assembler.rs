//! News post assembly.
//!
//! Combines the classified content items with the caller's preview metadata:
//! picks the post image, drops repeated images and links, and synthesizes a
//! short description from the leading text when the preview has none.

use std::collections::HashSet;

use chrono::Utc;
use tracing::debug;

use crate::error::{Error, Result};
use crate::result::{ContentItem, NewsPost, PreviewMeta};
use crate::text::{is_acceptable_text, normalize_spaces};
use crate::Options;

/// Build a news post from preview metadata and extracted content items.
///
/// # Description synthesis
///
/// Without an explicit description, leading text items are consumed into the
/// description until the target length is reached and a sentence ends. The
/// rest of the sentence-ending item stays in the content when it is
/// substantive. Links keep their place in the content (once per URL) while
/// their text also feeds the description.
///
/// # Errors
/// * `MissingField("title")` - the preview carries no title
pub fn assemble_news_post(
    preview: PreviewMeta,
    items: Vec<ContentItem>,
    opts: &Options,
) -> Result<NewsPost> {
    let title = preview
        .title
        .filter(|title| !title.trim().is_empty())
        .ok_or(Error::MissingField("title"))?;

    let explicit_description = preview.description.filter(|d| !d.trim().is_empty());
    let mut image = preview.image;
    let mut synthesizer = explicit_description
        .is_none()
        .then(|| DescriptionSynthesizer::new(opts.description_length));
    let mut content = Vec::with_capacity(items.len());

    for item in items {
        if let ContentItem::Image { url, .. } = &item {
            match &image {
                None => {
                    image = Some(url.clone());
                    continue;
                }
                Some(current) if current == url => continue,
                Some(_) => {}
            }
        }

        match synthesizer.as_mut() {
            Some(synth) if synth.wants(&item) => synth.consume(item, &mut content),
            _ => content.push(item),
        }
    }

    let description = match (explicit_description, synthesizer) {
        (Some(description), _) => description,
        (None, Some(synth)) => synth.finish().unwrap_or_else(|| title.clone()),
        (None, None) => title.clone(),
    };

    debug!(items = content.len(), image = image.is_some(), "news post assembled");

    Ok(NewsPost {
        source: opts.source.clone(),
        title,
        description,
        published_at: preview.published_at.unwrap_or_else(Utc::now),
        uri: preview.uri,
        image,
        items: content,
    })
}

/// Accumulates the auto-generated description.
struct DescriptionSynthesizer {
    buffer: String,
    length: usize,
    target: usize,
    done: bool,
    seen_links: HashSet<String>,
}

impl DescriptionSynthesizer {
    fn new(target: usize) -> Self {
        Self {
            buffer: String::new(),
            length: 0,
            target,
            done: false,
            seen_links: HashSet::new(),
        }
    }

    /// Text-bearing items feed the description until a sentence ends past
    /// the target length.
    fn wants(&self, item: &ContentItem) -> bool {
        !self.done && !item.is_image() && item.text_content().is_some()
    }

    fn consume(&mut self, mut item: ContentItem, content: &mut Vec<ContentItem>) {
        if let ContentItem::Link { url, .. } = &item {
            if self.seen_links.insert(url.clone()) {
                content.push(item.clone());
            }
        }

        let Some(text) = item.text_content() else {
            return;
        };
        let candidate = if self.buffer.is_empty() {
            text.to_string()
        } else {
            format!(" {text}")
        };

        let budget = self.target.saturating_sub(self.length);
        let Some(split) = split_at_sentence(&candidate, budget) else {
            self.append(&candidate);
            return;
        };

        if split.terminator.is_empty() {
            self.append(&candidate);
            return;
        }

        self.append(split.prefix);
        self.append(split.terminator);
        self.done = true;

        let residue = split.residue.trim();
        if is_acceptable_text(residue) && !item.is_link() {
            item.set_text(residue.to_string());
            content.push(item);
        }
    }

    fn append(&mut self, fragment: &str) {
        self.buffer.push_str(fragment);
        self.length += fragment.chars().count();
    }

    fn finish(self) -> Option<String> {
        let description = normalize_spaces(&self.buffer).trim().to_string();
        (!description.is_empty()).then_some(description)
    }
}

/// A text cut after `n` characters and the sentence end that follows.
#[derive(Debug, PartialEq, Eq)]
struct SentenceSplit<'a> {
    /// Exactly the first `n` characters.
    prefix: &'a str,
    /// Text up to and including the next run of periods; empty when no
    /// period follows the prefix.
    terminator: &'a str,
    /// Everything after the terminator.
    residue: &'a str,
}

/// Split `text` after `n` characters, then after the next run of periods.
///
/// `None` when `text` is shorter than `n` characters.
fn split_at_sentence(text: &str, n: usize) -> Option<SentenceSplit<'_>> {
    let prefix_end = text
        .char_indices()
        .map(|(index, _)| index)
        .chain(std::iter::once(text.len()))
        .nth(n)?;
    let (prefix, rest) = text.split_at(prefix_end);

    let Some(dot) = rest.find('.') else {
        return Some(SentenceSplit {
            prefix,
            terminator: "",
            residue: rest,
        });
    };

    let terminator_end = rest[dot..]
        .find(|c: char| c != '.')
        .map_or(rest.len(), |offset| dot + offset);
    let (terminator, residue) = rest.split_at(terminator_end);

    Some(SentenceSplit {
        prefix,
        terminator,
        residue,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn preview() -> PreviewMeta {
        PreviewMeta::new("https://x.test/news/1", "Title")
    }

    fn options(description_length: usize) -> Options {
        Options {
            description_length,
            ..Options::default()
        }
    }

    #[test]
    fn test_split_at_sentence() {
        assert_eq!(
            split_at_sentence("Hello world. Next.", 3),
            Some(SentenceSplit {
                prefix: "Hel",
                terminator: "lo world.",
                residue: " Next.",
            })
        );
    }

    #[test]
    fn test_split_short_text() {
        assert_eq!(split_at_sentence("short", 10), None);
        assert_eq!(
            split_at_sentence("exact", 5),
            Some(SentenceSplit {
                prefix: "exact",
                terminator: "",
                residue: "",
            })
        );
    }

    #[test]
    fn test_split_ellipsis_and_multibyte() {
        assert_eq!(
            split_at_sentence("Привет мир... Дальше", 2),
            Some(SentenceSplit {
                prefix: "Пр",
                terminator: "ивет мир...",
                residue: " Дальше",
            })
        );
    }

    #[test]
    fn test_split_without_period() {
        assert_eq!(
            split_at_sentence("no period here", 3),
            Some(SentenceSplit {
                prefix: "no ",
                terminator: "",
                residue: "period here",
            })
        );
    }

    #[test]
    fn test_missing_title() {
        let preview = PreviewMeta {
            uri: "https://x.test/".to_string(),
            ..PreviewMeta::default()
        };
        let result = assemble_news_post(preview, Vec::new(), &Options::default());
        assert!(matches!(result, Err(Error::MissingField("title"))));

        let blank = PreviewMeta::new("https://x.test/", "   ");
        assert!(assemble_news_post(blank, Vec::new(), &Options::default()).is_err());
    }

    #[test]
    fn test_short_text_becomes_description() {
        let items = vec![ContentItem::text("Hello world."), ContentItem::text("More.")];

        let post = assemble_news_post(preview(), items, &Options::default()).unwrap();

        assert_eq!(post.description, "Hello world. More.");
        assert!(post.items.is_empty());
    }

    #[test]
    fn test_residue_kept_as_item() {
        let items = vec![
            ContentItem::text("First sentence is long enough. Second sentence here."),
            ContentItem::heading("After", 2),
        ];

        let post = assemble_news_post(preview(), items, &options(20)).unwrap();

        assert_eq!(post.description, "First sentence is long enough.");
        assert_eq!(
            post.items,
            vec![ContentItem::text("Second sentence here."), ContentItem::heading("After", 2)]
        );
    }

    #[test]
    fn test_unterminated_item_kept_whole() {
        let items = vec![
            ContentItem::text("No terminator at all here"),
            ContentItem::text("Next one. Tail words"),
        ];

        let post = assemble_news_post(preview(), items, &options(10)).unwrap();

        assert_eq!(post.description, "No terminator at all here Next one.");
        assert_eq!(post.items, vec![ContentItem::text("Tail words")]);
    }

    #[test]
    fn test_explicit_description_keeps_all_items() {
        let items = vec![ContentItem::text("Body."), ContentItem::quote("Quote.")];
        let preview = preview().with_description("Given summary");

        let post = assemble_news_post(preview, items.clone(), &Options::default()).unwrap();

        assert_eq!(post.description, "Given summary");
        assert_eq!(post.items, items);
    }

    #[test]
    fn test_blank_description_is_synthesized() {
        let preview = preview().with_description("  ");

        let items = vec![ContentItem::text("Body.")];

        let post = assemble_news_post(preview, items, &Options::default()).unwrap();

        assert_eq!(post.description, "Body.");
    }

    #[test]
    fn test_description_falls_back_to_title() {
        let items = vec![ContentItem::image("https://x.test/a.jpg", None)];

        let post = assemble_news_post(preview(), items, &Options::default()).unwrap();

        assert_eq!(post.description, "Title");
        assert_eq!(post.image.as_deref(), Some("https://x.test/a.jpg"));
        assert!(post.items.is_empty());
    }

    #[test]
    fn test_image_dedup() {
        let items = vec![
            ContentItem::image("https://x.test/a.jpg", None),
            ContentItem::image("https://x.test/a.jpg", Some("again".to_string())),
            ContentItem::image("https://x.test/b.jpg", None),
        ];
        let preview = preview().with_description("d");

        let post = assemble_news_post(preview, items, &Options::default()).unwrap();

        assert_eq!(post.image.as_deref(), Some("https://x.test/a.jpg"));
        assert_eq!(post.items, vec![ContentItem::image("https://x.test/b.jpg", None)]);
    }

    #[test]
    fn test_preview_image_suppresses_duplicate() {
        let items = vec![
            ContentItem::image("https://x.test/lead.jpg", None),
            ContentItem::image("https://x.test/other.jpg", None),
        ];
        let preview = preview().with_description("d").with_image("https://x.test/lead.jpg");

        let post = assemble_news_post(preview, items, &Options::default()).unwrap();

        assert_eq!(post.items, vec![ContentItem::image("https://x.test/other.jpg", None)]);
    }

    #[test]
    fn test_links_emitted_once_while_describing() {
        let link = ContentItem::link("https://x.test/ref", Some("reference".to_string()));
        let items = vec![ContentItem::text("See the"), link.clone(), link.clone()];

        let post = assemble_news_post(preview(), items, &Options::default()).unwrap();

        assert_eq!(post.description, "See the reference reference");
        assert_eq!(post.items, vec![link]);
    }

    #[test]
    fn test_bare_link_not_part_of_description() {
        let bare = ContentItem::link("https://x.test/ref", None);
        let items = vec![ContentItem::text("Intro."), bare.clone(), bare.clone()];

        let post = assemble_news_post(preview(), items, &Options::default()).unwrap();

        assert_eq!(post.description, "Intro.");
        assert_eq!(post.items, vec![bare.clone(), bare]);
    }

    #[test]
    fn test_items_after_description_done() {
        let items = vec![
            ContentItem::text("Lead sentence."),
            ContentItem::text("Body one."),
            ContentItem::link("https://x.test/x", Some("x link".to_string())),
            ContentItem::link("https://x.test/x", Some("x link".to_string())),
        ];

        let post = assemble_news_post(preview(), items, &options(5)).unwrap();

        assert_eq!(post.description, "Lead sentence.");
        assert_eq!(post.items.len(), 3);
        assert_eq!(post.items[0], ContentItem::text("Body one."));
    }

    #[test]
    fn test_metadata_carried_over() {
        let published = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let preview = preview().with_published_at(published);
        let opts = Options::for_site("kostroma-news", "div.article");

        let post = assemble_news_post(preview, Vec::new(), &opts).unwrap();

        assert_eq!(post.source, "kostroma-news");
        assert_eq!(post.title, "Title");
        assert_eq!(post.uri, "https://x.test/news/1");
        assert_eq!(post.published_at, published);
    }
}
