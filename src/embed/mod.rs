//! Provider embed handlers
//!
//! Each handler recognizes one provider's embed markup (an iframe URL
//! shape, a marker class, a data attribute) and rewrites it into the
//! matching `amp-*` custom element, registering the extension script the
//! element needs. A handler that finds a URL but no usable media ID
//! degrades the embed to a plain `a.amp-wp-embed-fallback` link; a handler
//! failure never aborts the rest of the pipeline.

mod dailymotion;
mod errors;
mod facebook;
mod instagram;
mod pinterest;
mod playbuzz;
mod soundcloud;
mod twitter;
mod util;
mod vimeo;
mod vine;
mod youtube;

pub use errors::{EmbedError, EmbedResult};

use kuchiki::NodeRef;

use crate::config::RenderConfig;
use crate::dom::{self, Document};
use crate::pipeline::RenderContext;

pub trait EmbedHandler: Send + Sync {
    /// Stable handler name, matched case-insensitively against
    /// `RenderConfig::enabled_embed_handlers`.
    fn name(&self) -> &'static str;

    /// Extension the produced element needs, e.g. `amp-youtube`.
    fn extension(&self) -> &'static str;

    /// Collect the nodes in `doc` this handler wants to transform.
    fn matches(&self, doc: &Document) -> Vec<NodeRef>;

    /// Rewrite `node` in place into the provider's AMP element.
    fn transform(&self, node: &NodeRef, ctx: &mut RenderContext) -> EmbedResult<()>;
}

/// All built-in handlers in dispatch order.
#[must_use]
pub fn built_in_handlers() -> Vec<Box<dyn EmbedHandler>> {
    vec![
        Box::new(youtube::Youtube),
        Box::new(vimeo::Vimeo),
        Box::new(twitter::Twitter),
        Box::new(instagram::Instagram),
        Box::new(facebook::Facebook),
        Box::new(soundcloud::Soundcloud),
        Box::new(pinterest::Pinterest),
        Box::new(dailymotion::Dailymotion),
        Box::new(vine::Vine),
        Box::new(playbuzz::Playbuzz),
    ]
}

/// The handlers enabled by `config`. An empty selection enables all
/// built-ins; names the registry does not know are logged and ignored.
#[must_use]
pub fn active_handlers(config: &RenderConfig) -> Vec<Box<dyn EmbedHandler>> {
    let enabled = config.enabled_embed_handlers();
    let mut handlers = built_in_handlers();
    if enabled.is_empty() {
        return handlers;
    }
    for name in enabled {
        if !handlers.iter().any(|h| h.name().eq_ignore_ascii_case(name)) {
            log::warn!("unknown embed handler in config: {name}");
        }
    }
    handlers.retain(|h| enabled.iter().any(|name| name.eq_ignore_ascii_case(h.name())));
    handlers
}

/// Run every handler over the document.
pub fn run_handlers(doc: &Document, handlers: &[Box<dyn EmbedHandler>], ctx: &mut RenderContext) {
    for handler in handlers {
        for node in handler.matches(doc) {
            // A prior transform may have detached this match, e.g. a
            // nested iframe inside replaced provider markup.
            if node.parent().is_none() {
                continue;
            }
            match handler.transform(&node, ctx) {
                Ok(()) => ctx.require_extension(handler.extension()),
                Err(EmbedError::MissingId { url }) => {
                    log::warn!("{} embed without usable media ID: {url}", handler.name());
                    if let Err(e) = dom::replace_node(&node, util::fallback_anchor(&url)) {
                        log::warn!("failed to degrade {} embed: {e}", handler.name());
                    }
                }
                Err(e) => {
                    log::warn!("{} embed left for the sanitizer: {e}", handler.name());
                }
            }
        }
    }
}
