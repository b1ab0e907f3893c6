//! Bounded ancestor search.
//!
//! Classifiers often meet a text node whose meaning is decided by an
//! enclosing element (the `blockquote` around a `span`, the `a` around a
//! `strong`). The search walks upward a limited number of levels and lets the
//! predicate veto the walk when it reaches the edge of the article body.

use dom_query::NodeRef;

/// Default number of levels above the start node.
pub const DEFAULT_SEARCH_DEPTH: usize = 5;

/// Levels searched for an enclosing `iframe`.
pub const IFRAME_SEARCH_DEPTH: usize = 3;

/// Levels searched for the outermost formatting wrapper of a text node.
pub const FORMATTING_SEARCH_DEPTH: usize = 6;

/// Verdict of a search predicate on one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Search {
    /// This node is the one we are looking for.
    Accept,
    /// Stop searching without a result.
    Reject,
    /// Not this node, try its parent.
    Continue,
}

impl Search {
    /// `Accept` when `matched`, otherwise `Continue`.
    #[must_use]
    pub fn accept_if(matched: bool) -> Self {
        if matched {
            Self::Accept
        } else {
            Self::Continue
        }
    }
}

/// Find the nearest node, starting with `node` itself, accepted by `predicate`.
///
/// At most `max_depth` ancestors above `node` are visited. A `Reject` verdict,
/// an exhausted depth or a missing parent end the search with `None`.
pub fn find_ancestor<'a, F>(
    node: &NodeRef<'a>,
    max_depth: usize,
    mut predicate: F,
) -> Option<NodeRef<'a>>
where
    F: FnMut(&NodeRef<'a>) -> Search,
{
    let mut current = *node;
    let mut remaining = max_depth;

    loop {
        match predicate(&current) {
            Search::Accept => return Some(current),
            Search::Reject => return None,
            Search::Continue => {}
        }

        if remaining == 0 {
            return None;
        }
        current = current.parent()?;
        remaining -= 1;
    }
}
