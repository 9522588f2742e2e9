//! Error types for document parsing and tree mutation
//!
//! Only [`DomError::MalformedMarkup`] is ever surfaced to callers of the
//! rendering pipeline; the remaining variants signal internal invariant
//! violations in the passes that mutate the tree.

/// Error types for DOM operations
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    /// Input could not be turned into any tree at all
    #[error("markup cannot be parsed: {0}")]
    MalformedMarkup(String),

    /// A mutation was attempted on a node that is no longer in the tree
    #[error("node is detached from the tree: {0}")]
    DetachedNode(&'static str),

    /// A hardcoded CSS selector failed to parse
    #[error("invalid selector: {0}")]
    BadSelector(String),

    /// Serializing the tree back to HTML failed
    #[error("failed to serialize tree: {0}")]
    Serialize(String),
}

/// Convenience alias for DOM operation results
pub type DomResult<T> = Result<T, DomError>;
