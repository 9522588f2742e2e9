//! Element construction and tree mutation helpers
//!
//! Small wrappers around the kuchiki node API that enforce the attached-node
//! contract: every mutation that positions a node relative to an existing one
//! requires that node to still have a parent, and reports
//! [`DomError::DetachedNode`] otherwise instead of silently doing nothing.

use html5ever::{LocalName, QualName, namespace_url, ns};
use kuchiki::{Attribute, ExpandedName, NodeRef};

use super::errors::{DomError, DomResult};

/// Create a detached element with the given tag name and attributes.
///
/// The element belongs to no tree until it is attached with
/// [`insert_before`], [`insert_after`], [`replace_node`] or
/// `NodeRef::append`.
pub fn create_element<'a, I>(tag: &str, attributes: I) -> NodeRef
where
    I: IntoIterator<Item = (&'a str, String)>,
{
    NodeRef::new_element(
        QualName::new(None, ns!(html), LocalName::from(tag)),
        attributes.into_iter().map(|(name, value)| {
            (
                ExpandedName::new(ns!(), LocalName::from(name)),
                Attribute {
                    prefix: None,
                    value,
                },
            )
        }),
    )
}

/// Lowercase tag name of an element node, `None` for text/comment nodes.
pub fn tag_name(node: &NodeRef) -> Option<String> {
    node.as_element()
        .map(|el| el.name.local.to_ascii_lowercase())
}

/// Read a single attribute value, cloned out of the attribute map.
pub fn attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.as_element().and_then(|el| {
        let attrs = el.attributes.borrow();
        attrs.get(name).map(str::to_string)
    })
}

/// Set an attribute on an element node. No-op for non-element nodes.
pub fn set_attribute(node: &NodeRef, name: &str, value: impl Into<String>) {
    if let Some(el) = node.as_element() {
        el.attributes.borrow_mut().insert(name, value.into());
    }
}

/// Remove an attribute from an element node if present.
pub fn remove_attribute(node: &NodeRef, name: &str) {
    if let Some(el) = node.as_element() {
        el.attributes.borrow_mut().remove(name);
    }
}

/// True when the element carries the attribute, regardless of its value.
pub fn has_attribute(node: &NodeRef, name: &str) -> bool {
    node.as_element()
        .is_some_and(|el| el.attributes.borrow().contains(name))
}

/// Insert `new` as the previous sibling of `anchor`.
pub fn insert_before(anchor: &NodeRef, new: NodeRef) -> DomResult<()> {
    if anchor.parent().is_none() {
        return Err(DomError::DetachedNode("insert_before anchor has no parent"));
    }
    anchor.insert_before(new);
    Ok(())
}

/// Insert `new` as the next sibling of `anchor`.
pub fn insert_after(anchor: &NodeRef, new: NodeRef) -> DomResult<()> {
    if anchor.parent().is_none() {
        return Err(DomError::DetachedNode("insert_after anchor has no parent"));
    }
    anchor.insert_after(new);
    Ok(())
}

/// Replace `old` with `new` in the tree.
///
/// `old` is detached and keeps its subtree; the caller decides whether to
/// move any of its children into the replacement first.
pub fn replace_node(old: &NodeRef, new: NodeRef) -> DomResult<()> {
    if old.parent().is_none() {
        return Err(DomError::DetachedNode("replace target has no parent"));
    }
    old.insert_before(new);
    old.detach();
    Ok(())
}

/// Detach `node` and its whole subtree from the tree.
pub fn remove_node(node: &NodeRef) -> DomResult<()> {
    if node.parent().is_none() {
        return Err(DomError::DetachedNode("remove target has no parent"));
    }
    node.detach();
    Ok(())
}

/// Move every child of `from` to the end of `to`, preserving order.
pub fn move_children(from: &NodeRef, to: &NodeRef) {
    let children: Vec<NodeRef> = from.children().collect();
    for child in children {
        to.append(child);
    }
}
