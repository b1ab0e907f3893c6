//! Content extraction pipeline.
//!
//! Walks the leaves of every content root in document order and runs the
//! classifier chain on each, collecting the typed items.

use dom_query::Selection;
use tracing::debug;
use url::Url;

use crate::result::ContentItem;
use crate::Options;

use super::handlers::classify_node;
use super::state::ExtractionState;
use super::walker::LeafWalker;

/// Extract the ordered content items of an article.
///
/// Every node of `roots` is a content root: ancestor searches never cross
/// one. Relative references resolve against `base`. The roots should already
/// be purified.
#[must_use]
pub fn parse_news_post_content(roots: &Selection, base: &Url, opts: &Options) -> Vec<ContentItem> {
    let mut state = ExtractionState::new(base.clone(), opts.quote_classes.clone());

    for root in roots.nodes() {
        state.add_root(root.id);
    }

    let mut visited = 0usize;
    for root in roots.nodes() {
        for leaf in LeafWalker::new(root) {
            classify_node(&leaf, &mut state);
            visited += 1;
        }
    }

    debug!(
        roots = roots.length(),
        leaves = visited,
        items = state.len(),
        "content classified"
    );
    state.into_items()
}
