//! Leaf iteration over a content root.
//!
//! Only nodes without children are classified; their enclosing elements are
//! reached through ancestor search instead. The walk uses an explicit stack,
//! so deeply nested markup cannot overflow the call stack.

use dom_query::NodeRef;

use crate::dom;

/// Document-order iterator over the leaf descendants of a root node.
///
/// The root itself is never yielded, even when it has no children.
pub struct LeafWalker<'a> {
    stack: Vec<NodeRef<'a>>,
}

impl<'a> LeafWalker<'a> {
    /// Start a walk below `root`.
    #[must_use]
    pub fn new(root: &NodeRef<'a>) -> Self {
        Self {
            stack: dom::child_nodes(root).into_iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for LeafWalker<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if !dom::has_child_nodes(&node) {
                return Some(node);
            }
            self.stack.extend(dom::child_nodes(&node).into_iter().rev());
        }
        None
    }
}
