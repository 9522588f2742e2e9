//! Configuration module for content rendering
//!
//! Provides `RenderConfig`, the options struct consumed by the rendering
//! pipeline, with sensible defaults and chainable builders.

pub mod types;

pub use types::{ContentFilter, RenderConfig};
