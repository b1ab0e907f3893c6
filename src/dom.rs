//! DOM Operations Adapter
//!
//! Thin helpers over `dom_query` node handles. The classifier looks at every
//! node kind (elements, text, comments), so most helpers take a `NodeRef`
//! rather than a `Selection`.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Node Kind ===

/// Check if node is an element.
#[inline]
#[must_use]
pub fn is_element(node: &NodeRef) -> bool {
    node.is_element()
}

/// Check if node is a text node.
#[inline]
#[must_use]
pub fn is_text(node: &NodeRef) -> bool {
    node.is_text()
}

/// Check if node is a comment.
#[inline]
#[must_use]
pub fn is_comment(node: &NodeRef) -> bool {
    node.is_comment()
}

// === Tag/Node Information ===

/// Get tag name (lowercase) of an element, `None` for other node kinds.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Check if node is an element with the given (lowercase) tag name.
#[must_use]
pub fn has_tag(node: &NodeRef, tag: &str) -> bool {
    node.is_element()
        && node
            .node_name()
            .is_some_and(|name| name.eq_ignore_ascii_case(tag))
}

/// Check if node is an element whose tag is one of `tags`.
#[must_use]
pub fn has_any_tag(node: &NodeRef, tags: &[&str]) -> bool {
    node.is_element()
        && node
            .node_name()
            .is_some_and(|name| tags.iter().any(|tag| name.eq_ignore_ascii_case(tag)))
}

// === Attribute Operations ===

/// Get any attribute value. Non-elements have no attributes.
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.attr(name).map(|s| s.to_string())
}

/// Get an attribute value, empty string when absent.
#[inline]
#[must_use]
pub fn attribute_or_empty(node: &NodeRef, name: &str) -> String {
    get_attribute(node, name).unwrap_or_default()
}

/// Check if element has `class` among its whitespace-separated class names.
#[must_use]
pub fn has_class(node: &NodeRef, class: &str) -> bool {
    get_attribute(node, "class")
        .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class))
}

// === Text Content ===

/// Get all text content of node and descendants.
///
/// For a text node this is the node's own text.
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

// === Tree Navigation ===

/// Get parent node
#[inline]
#[must_use]
pub fn parent<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    node.parent()
}

/// Check whether the node has any child node (text and comments included).
#[inline]
#[must_use]
pub fn has_child_nodes(node: &NodeRef) -> bool {
    node.first_child().is_some()
}

/// Get all child nodes (text and comments included) in document order.
#[must_use]
pub fn child_nodes<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut children = Vec::new();
    let mut next = node.first_child();
    while let Some(child) = next {
        next = child.next_sibling();
        children.push(child);
    }
    children
}

/// Find the first descendant element with the given tag, in document order.
#[must_use]
pub fn first_descendant<'a>(node: &NodeRef<'a>, tag: &str) -> Option<NodeRef<'a>> {
    let mut stack: Vec<NodeRef<'a>> = child_nodes(node).into_iter().rev().collect();
    while let Some(current) = stack.pop() {
        if has_tag(&current, tag) {
            return Some(current);
        }
        stack.extend(child_nodes(&current).into_iter().rev());
    }
    None
}

// === Tree Manipulation ===

/// Remove elements from tree
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
