//! Mutable DOM wrapper used by every pipeline pass
//!
//! Parsing, querying, mutation, and serialization for one HTML fragment at a
//! time. The tree itself is kuchiki's reference-counted node structure:
//! strong links point down (children) and weak links point up (parents), so
//! detaching a subtree drops it without reference cycles.

mod document;
mod errors;
mod node;

pub use document::{parse_fragment, query_in, serialize_node, Document, MAX_CONTENT_SIZE};
pub use errors::{DomError, DomResult};
pub use node::{
    attribute, create_element, has_attribute, insert_after, insert_before, move_children,
    remove_attribute, remove_node, replace_node, set_attribute, tag_name,
};
