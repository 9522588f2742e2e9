//! Embed handler error types

use thiserror::Error;

use crate::dom::DomError;

#[derive(Error, Debug)]
pub enum EmbedError {
    /// The matched markup carried no source URL at all, so there is
    /// nothing to degrade to. The node is left for the sanitizer.
    #[error("embed markup has no source URL")]
    MissingUrl,

    /// A URL was present but the provider's media ID could not be read
    /// from it. The URL is kept so the embed can degrade to a plain link.
    #[error("no media ID recognized in {url}")]
    MissingId { url: String },

    #[error(transparent)]
    Dom(#[from] DomError),
}

pub type EmbedResult<T> = Result<T, EmbedError>;
