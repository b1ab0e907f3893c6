//! Extraction state tracking.
//!
//! `ExtractionState` is the per-article context of the classifier: the
//! attribution store that maps DOM nodes to the content item they produced,
//! the item arena in emission order, the root set that bounds ancestor
//! searches, and the base URL for resolving references.

use std::collections::{HashMap, HashSet};

use dom_query::{NodeId, NodeRef};
use url::Url;

use crate::result::ContentItem;

/// Levels walked upward when releasing an enclosing attribution.
pub const RELEASE_DEPTH: usize = 5;

/// Index of an item in the extraction arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemHandle(usize);

/// Per-article classification state.
///
/// # Purpose
///
/// - **Attributions**: node id to item handle. A node appears at most once;
///   an attributed node absorbs later text from its descendants.
/// - **Items**: every item ever created, in creation order. Detaching a node
///   never removes its item, so the arena order is the emission order.
/// - **Roots**: content roots; ancestor searches never cross them.
/// - **Classified**: nodes that already produced or extended an item.
pub struct ExtractionState {
    attributions: HashMap<NodeId, ItemHandle>,
    items: Vec<ContentItem>,
    roots: HashSet<NodeId>,
    classified: HashSet<NodeId>,
    base_url: Url,
    quote_classes: Vec<String>,
}

impl ExtractionState {
    /// Create an empty state for an article at `base_url`.
    #[must_use]
    pub fn new(base_url: Url, quote_classes: Vec<String>) -> Self {
        Self {
            attributions: HashMap::new(),
            items: Vec::new(),
            roots: HashSet::new(),
            classified: HashSet::new(),
            base_url,
            quote_classes,
        }
    }

    // === Roots ===

    /// Register a content root.
    pub fn add_root(&mut self, node_id: NodeId) {
        self.roots.insert(node_id);
    }

    /// Check whether the node is one of the content roots.
    #[must_use]
    pub fn is_root(&self, node: &NodeRef) -> bool {
        self.roots.contains(&node.id)
    }

    // === Classified Nodes ===

    /// Remember that `node` produced or extended an item.
    pub fn mark_classified(&mut self, node: &NodeRef) {
        self.classified.insert(node.id);
    }

    /// Check whether `node` already produced or extended an item.
    #[must_use]
    pub fn is_classified(&self, node: &NodeRef) -> bool {
        self.classified.contains(&node.id)
    }

    // === Context ===

    /// Base URL for relative references.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Class names that mark an element as a quote.
    #[must_use]
    pub fn quote_classes(&self) -> &[String] {
        &self.quote_classes
    }

    // === Items ===

    /// Add an item to the output without attributing it to any node.
    pub fn emit(&mut self, item: ContentItem) -> ItemHandle {
        let handle = ItemHandle(self.items.len());
        self.items.push(item);
        handle
    }

    /// Add an item to the output and attribute it to `node`.
    pub fn emit_for(&mut self, node: &NodeRef, item: ContentItem) -> ItemHandle {
        let handle = self.emit(item);
        self.attributions.insert(node.id, handle);
        handle
    }

    /// Get an item by handle.
    #[must_use]
    pub fn item(&self, handle: ItemHandle) -> Option<&ContentItem> {
        self.items.get(handle.0)
    }

    /// Append a text fragment to an existing item.
    pub fn append_text(&mut self, handle: ItemHandle, fragment: &str) {
        if let Some(item) = self.items.get_mut(handle.0) {
            item.append_text(fragment);
        }
    }

    /// Number of items emitted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether nothing has been emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the state, returning the items in emission order.
    #[must_use]
    pub fn into_items(self) -> Vec<ContentItem> {
        self.items
    }

    // === Attributions ===

    /// Get the item attributed to `node`.
    #[must_use]
    pub fn attribution(&self, node: &NodeRef) -> Option<ItemHandle> {
        self.attributions.get(&node.id).copied()
    }

    /// Check whether `node` has an attributed item.
    #[must_use]
    pub fn is_attributed(&self, node: &NodeRef) -> bool {
        self.attributions.contains_key(&node.id)
    }

    /// Drop the attribution of `node`. The item itself stays in the output.
    pub fn detach(&mut self, node: &NodeRef) {
        self.attributions.remove(&node.id);
    }

    /// Release the nearest attributed node at or above `node`, so that text
    /// after a structural item starts a fresh item instead of merging into
    /// the one before it.
    ///
    /// Walks at most `max_level` levels. The first attributed node found ends
    /// the walk: it is detached unless its item is a heading, quote or link.
    pub fn release_ancestor(&mut self, node: &NodeRef, max_level: usize) {
        let mut current = *node;
        let mut level = max_level;

        while level > 0 {
            let Some(parent) = current.parent() else {
                return;
            };

            if let Some(handle) = self.attribution(&current) {
                let structural = self.item(handle).is_some_and(ContentItem::is_structural);
                if !structural {
                    self.detach(&current);
                }
                return;
            }

            current = parent;
            level -= 1;
        }
    }
}
