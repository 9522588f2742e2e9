pub mod config;
pub mod convert;
pub mod dom;
pub mod embed;
pub mod pipeline;
pub mod sanitize;
pub mod spec;

pub use config::{ContentFilter, RenderConfig};
pub use convert::{run_converters, DimensionProvider};
pub use dom::{Document, DomError, DomResult, MAX_CONTENT_SIZE};
pub use embed::{active_handlers, built_in_handlers, EmbedError, EmbedHandler, EmbedResult};
pub use pipeline::{render, AmpContent, RenderContext, RenderError, RenderResult, ScriptManifest};
pub use sanitize::sanitize;
pub use spec::{registry, SpecRegistry, SPEC_VERSION};
