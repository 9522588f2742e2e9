//! The rendering pipeline
//!
//! Ties the stages together for a single piece of content: parse, run the
//! embed handlers, convert the native media tags, sanitize against the
//! rule tables, reconcile the script manifest, serialize.

mod content;
mod context;
mod errors;
mod manifest;

pub use content::{render, AmpContent};
pub use context::RenderContext;
pub use errors::{RenderError, RenderResult};
pub use manifest::ScriptManifest;
