//! Pipeline error types

use thiserror::Error;

use crate::dom::DomError;

#[derive(Error, Debug)]
pub enum RenderError {
    /// The input could not be parsed into a workable document.
    #[error("malformed markup: {0}")]
    MalformedMarkup(String),

    /// A DOM operation failed mid-pipeline. Indicates a bug rather than
    /// bad input, since every stage operates on attached nodes.
    #[error("internal DOM failure: {0}")]
    Internal(DomError),
}

impl From<DomError> for RenderError {
    fn from(e: DomError) -> Self {
        match e {
            DomError::MalformedMarkup(msg) => Self::MalformedMarkup(msg),
            other => Self::Internal(other),
        }
    }
}

pub type RenderResult<T> = Result<T, RenderError>;
