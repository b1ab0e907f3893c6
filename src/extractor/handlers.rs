//! Node classifiers: quotes, headings, links, videos, images and text.
//!
//! Each walked leaf goes through the classifiers in priority order. A
//! classifier either produces an item, merges text into an existing one,
//! reports that the enclosing node was already handled, or passes.

use dom_query::NodeRef;
use tracing::trace;

use super::search::{
    find_ancestor, Search, DEFAULT_SEARCH_DEPTH, FORMATTING_SEARCH_DEPTH, IFRAME_SEARCH_DEPTH,
};
use super::state::{ExtractionState, ItemHandle, RELEASE_DEPTH};
use super::tags::{
    heading_level, is_formatting_tag, is_iframe, is_image, is_in_picture, is_line_break, is_link,
    is_quote, youtube_video_id,
};
use crate::dom;
use crate::result::ContentItem;
use crate::text::{is_acceptable_text, normalize_spaces, normalize_text, trim_link};
use crate::url_utils::{is_data_uri, resolve_reference};

/// Outcome of classifying one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classified {
    /// A new item was produced.
    Emitted(ItemHandle),
    /// The node's text was appended to an existing item.
    Merged(ItemHandle),
    /// The enclosing node already produced an item.
    AlreadyAttributed,
    /// The classifier does not apply; try the next one.
    NoMatch,
}

impl Classified {
    /// Check whether the node produced or extended an item.
    #[must_use]
    pub fn is_contribution(self) -> bool {
        matches!(self, Self::Emitted(_) | Self::Merged(_))
    }
}

type Classifier = fn(&NodeRef, &mut ExtractionState) -> Classified;

/// Classifiers in priority order.
const CLASSIFIERS: [(&str, Classifier); 6] = [
    ("quote", handle_quote),
    ("heading", handle_heading),
    ("link", handle_link),
    ("video", handle_video),
    ("image", handle_image),
    ("text", handle_text),
];

/// Run the classifier chain on one node.
///
/// The first classifier that does not answer `NoMatch` decides. A `br` that
/// nothing claims releases the enclosing text attribution, so text after a
/// manual line break becomes a new item.
pub fn classify_node(node: &NodeRef, state: &mut ExtractionState) -> Classified {
    if state.is_classified(node) {
        return Classified::AlreadyAttributed;
    }

    for (name, classify) in CLASSIFIERS {
        let outcome = classify(node, state);
        if outcome == Classified::NoMatch {
            continue;
        }

        trace!(classifier = name, ?outcome, "node classified");
        if outcome.is_contribution() {
            state.mark_classified(node);
        }
        return outcome;
    }

    if is_line_break(node) {
        release_parent(node, state);
    }
    Classified::NoMatch
}

/// Quote element around the node with acceptable text.
pub fn handle_quote(node: &NodeRef, state: &mut ExtractionState) -> Classified {
    let Some(quote) =
        search_enclosing(node, state, DEFAULT_SEARCH_DEPTH, |n| is_quote(n, state.quote_classes()))
    else {
        return Classified::NoMatch;
    };

    let text = dom::text_content(&quote);
    if !is_acceptable_text(&text) {
        return Classified::NoMatch;
    }
    if state.is_attributed(&quote) {
        return Classified::AlreadyAttributed;
    }

    let handle = state.emit_for(&quote, ContentItem::quote(normalize_text(&text)));
    release_parent(&quote, state);
    Classified::Emitted(handle)
}

/// `h1`-`h6` element around the node with acceptable text.
pub fn handle_heading(node: &NodeRef, state: &mut ExtractionState) -> Classified {
    let Some(heading) =
        search_enclosing(node, state, DEFAULT_SEARCH_DEPTH, |n| heading_level(n).is_some())
    else {
        return Classified::NoMatch;
    };
    let Some(level) = heading_level(&heading) else {
        return Classified::NoMatch;
    };

    let text = dom::text_content(&heading);
    if !is_acceptable_text(&text) {
        return Classified::NoMatch;
    }
    if state.is_attributed(&heading) {
        return Classified::AlreadyAttributed;
    }

    let handle = state.emit_for(&heading, ContentItem::heading(normalize_text(&text), level));
    release_parent(&heading, state);
    Classified::Emitted(handle)
}

/// Anchor around the node whose `href` resolves to a web URL.
///
/// The anchor text is kept only when it says something the URL does not.
pub fn handle_link(node: &NodeRef, state: &mut ExtractionState) -> Classified {
    if is_image(node) {
        return Classified::NoMatch;
    }

    let Some(anchor) = search_enclosing(node, state, DEFAULT_SEARCH_DEPTH, is_link) else {
        return Classified::NoMatch;
    };

    let href = dom::attribute_or_empty(&anchor, "href");
    let Some(url) = resolve_reference(&href, state.base_url()) else {
        trace!(href = %href, "unresolvable link");
        return Classified::NoMatch;
    };

    if state.is_attributed(&anchor) {
        return Classified::AlreadyAttributed;
    }

    let raw = dom::text_content(&anchor);
    let text = (is_acceptable_text(&raw) && trim_link(&raw) != trim_link(&url))
        .then(|| normalize_spaces(&raw));

    let handle = state.emit_for(&anchor, ContentItem::link(url, text));
    release_parent(&anchor, state);
    Classified::Emitted(handle)
}

/// Embedded YouTube player.
pub fn handle_video(node: &NodeRef, state: &mut ExtractionState) -> Classified {
    let Some(iframe) = search_enclosing(node, state, IFRAME_SEARCH_DEPTH, is_iframe) else {
        return Classified::NoMatch;
    };

    if state.is_attributed(&iframe) {
        return Classified::AlreadyAttributed;
    }

    let Some(video_id) = youtube_video_id(&dom::attribute_or_empty(&iframe, "src")) else {
        return Classified::NoMatch;
    };

    let handle = state.emit_for(&iframe, ContentItem::video(video_id));
    Classified::Emitted(handle)
}

/// `img`/`amp-img`, or any element of a `picture`.
///
/// Inside a `picture` the first `img` supplies the source and the picture
/// element takes the attribution, so its other children are skipped.
/// Standalone images are never attributed.
pub fn handle_image(node: &NodeRef, state: &mut ExtractionState) -> Classified {
    if !dom::is_element(node) {
        return Classified::NoMatch;
    }

    let picture = if is_in_picture(node) { node.parent() } else { None };
    if picture.is_none() && !is_image(node) {
        return Classified::NoMatch;
    }

    let mut src = dom::attribute_or_empty(node, "src");
    if let Some(picture) = &picture {
        if state.is_attributed(picture) {
            return Classified::AlreadyAttributed;
        }
        if let Some(img) = dom::first_descendant(picture, "img") {
            src = dom::attribute_or_empty(&img, "src");
        }
    }

    if src.trim().is_empty() || is_data_uri(&src) {
        return Classified::NoMatch;
    }

    let Some(url) = resolve_reference(&src, state.base_url()) else {
        trace!(src = %src, "unresolvable image");
        return Classified::NoMatch;
    };

    let alt = dom::get_attribute(node, "alt").filter(|alt| !alt.is_empty());
    let item = ContentItem::image(url, alt);

    let handle = match &picture {
        Some(picture) => state.emit_for(picture, item),
        None => state.emit(item),
    };
    Classified::Emitted(handle)
}

/// Plain text, attributed to the block that holds it.
///
/// Text split by inline formatting is attributed to the element around the
/// outermost formatting wrapper, so the pieces of one paragraph merge into a
/// single item.
pub fn handle_text(node: &NodeRef, state: &mut ExtractionState) -> Classified {
    if dom::is_comment(node) {
        return Classified::NoMatch;
    }

    let found = if dom::is_text(node) {
        find_ancestor(node, FORMATTING_SEARCH_DEPTH, |candidate| {
            let formatting = is_formatting_tag(candidate);
            if state.is_root(candidate) && !formatting {
                return Search::Reject;
            }
            if candidate.parent().is_some_and(|parent| is_formatting_tag(&parent)) {
                return Search::Continue;
            }
            Search::accept_if(formatting)
        })
        .or_else(|| node.parent())
    } else {
        Some(*node)
    };

    let Some(mut attach) = found else {
        return Classified::NoMatch;
    };
    if is_formatting_tag(&attach) {
        match attach.parent() {
            Some(parent) => attach = parent,
            None => return Classified::NoMatch,
        }
    }

    let text = dom::text_content(node);

    if let Some(handle) = state.attribution(&attach) {
        state.append_text(handle, &normalize_text(&text));
        return Classified::Merged(handle);
    }

    if !is_acceptable_text(&text) {
        return Classified::NoMatch;
    }

    let handle = state.emit_for(&attach, ContentItem::text(normalize_text(&text)));
    Classified::Emitted(handle)
}

/// Nearest node at or above `node` accepted by `matches`. A content root that
/// does not match stops the search.
fn search_enclosing<'a>(
    node: &NodeRef<'a>,
    state: &ExtractionState,
    max_depth: usize,
    matches: impl Fn(&NodeRef<'a>) -> bool,
) -> Option<NodeRef<'a>> {
    find_ancestor(node, max_depth, |candidate| {
        let matched = matches(candidate);
        if state.is_root(candidate) && !matched {
            Search::Reject
        } else {
            Search::accept_if(matched)
        }
    })
}

fn release_parent(node: &NodeRef, state: &mut ExtractionState) {
    if let Some(parent) = node.parent() {
        state.release_ancestor(&parent, RELEASE_DEPTH);
    }
}
