//! Lenient HTML parsing and body-scoped serialization
//!
//! One [`Document`] owns the full node tree for a single input fragment.
//! Parsing wraps the fragment in a synthetic `html`/`body` shell exactly the
//! way browsers recover arbitrary markup, every pipeline pass mutates the
//! tree in place, and serialization emits only the body children so the
//! caller gets a fragment back, not a full page.

use kuchiki::traits::TendrilSink;
use kuchiki::NodeRef;

use super::errors::{DomError, DomResult};

/// Maximum accepted input size in bytes.
///
/// Real post content is a few hundred kilobytes at the very worst; anything
/// beyond this is either an attack or a caller bug, and parsing it would only
/// burn memory.
pub const MAX_CONTENT_SIZE: usize = 10 * 1024 * 1024;

/// A parsed HTML fragment, queryable and mutable in place.
pub struct Document {
    root: NodeRef,
    body: NodeRef,
}

impl Document {
    /// Parse an HTML fragment into a mutable tree.
    ///
    /// Parsing is lenient: unclosed tags, stray entities, and misnested
    /// elements are all recovered the way a browser would recover them.
    /// The only rejected inputs are those exceeding [`MAX_CONTENT_SIZE`]
    /// and those the parser cannot shape into a tree at all.
    pub fn parse(html: &str) -> DomResult<Self> {
        if html.len() > MAX_CONTENT_SIZE {
            return Err(DomError::MalformedMarkup(format!(
                "input too large: {} bytes (limit {} bytes)",
                html.len(),
                MAX_CONTENT_SIZE
            )));
        }

        let root = kuchiki::parse_html().one(html.to_string());
        let body = root
            .select_first("body")
            .map_err(|()| DomError::MalformedMarkup("no body element in parsed tree".to_string()))?
            .as_node()
            .clone();

        Ok(Self { root, body })
    }

    /// The synthetic body element containing the fragment's content.
    pub fn body(&self) -> &NodeRef {
        &self.body
    }

    /// All elements matching a CSS selector, in document order.
    ///
    /// Matches are collected before being returned, so callers are free to
    /// detach or replace any of them while iterating.
    pub fn query(&self, selector: &str) -> DomResult<Vec<NodeRef>> {
        query_in(&self.root, selector)
    }

    /// Serialize the body children back to an HTML fragment.
    pub fn serialize(&self) -> DomResult<String> {
        let mut output = Vec::new();
        for child in self.body.children() {
            child
                .serialize(&mut output)
                .map_err(|e| DomError::Serialize(e.to_string()))?;
        }
        String::from_utf8(output).map_err(|e| DomError::Serialize(e.to_string()))
    }
}

/// All elements under `scope` matching a CSS selector, in document order.
pub fn query_in(scope: &NodeRef, selector: &str) -> DomResult<Vec<NodeRef>> {
    let matches = scope
        .select(selector)
        .map_err(|()| DomError::BadSelector(selector.to_string()))?;
    Ok(matches.map(|m| m.as_node().clone()).collect())
}

/// Serialize a single node, including itself, to HTML.
pub fn serialize_node(node: &NodeRef) -> DomResult<String> {
    let mut output = Vec::new();
    node.serialize(&mut output)
        .map_err(|e| DomError::Serialize(e.to_string()))?;
    String::from_utf8(output).map_err(|e| DomError::Serialize(e.to_string()))
}

/// Parse a fragment of HTML and return its top-level body nodes.
///
/// The parser wraps every input in a full `html`/`head`/`body` shell; this
/// strips that shell off again so the returned nodes can be grafted straight
/// into another tree.
pub fn parse_fragment(html: &str) -> DomResult<Vec<NodeRef>> {
    let tree = kuchiki::parse_html().one(html.to_string());
    let body = tree
        .select_first("body")
        .map_err(|()| DomError::MalformedMarkup("no body element in parsed fragment".to_string()))?;
    Ok(body.as_node().children().collect())
}
