//! End-to-end content rendering

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::config::RenderConfig;
use crate::convert;
use crate::dom::{self, Document};
use crate::embed;
use crate::sanitize;
use crate::spec::registry;

use super::context::RenderContext;
use super::errors::RenderResult;

/// A rendered piece of content: the AMP body markup plus the extension
/// scripts it needs, ready for a page template to splice in.
#[derive(Debug, Clone, Serialize)]
pub struct AmpContent {
    pub amp_html: String,
    pub scripts: BTreeMap<String, String>,
}

/// Convert one piece of post HTML into its AMP rendition.
///
/// Stages run in a fixed order: the optional pre-parse content filter,
/// embed handlers (which need the raw provider markup), the media tag
/// converters, the generic sanitizer, and finally reconciliation of the
/// script manifest against the elements that actually survived.
pub fn render(html: &str, config: &RenderConfig) -> RenderResult<AmpContent> {
    let html = match config.content_filter() {
        Some(filter) => filter(html.to_string()),
        None => html.to_string(),
    };

    let doc = Document::parse(&html)?;
    let mut ctx = RenderContext::new(config);

    let handlers = embed::active_handlers(config);
    embed::run_handlers(&doc, &handlers, &mut ctx);
    convert::run_converters(&doc, &mut ctx);
    sanitize::sanitize(&doc);
    reconcile_manifest(&doc, &mut ctx);

    let amp_html = doc.serialize()?;
    Ok(AmpContent {
        amp_html,
        scripts: ctx.into_manifest().into_map(),
    })
}

/// Square the manifest with the tags that survived sanitization: drop
/// entries whose component was stripped along the way, add entries for
/// components that reached the output without passing through a handler,
/// e.g. hand-authored `amp-youtube` in the source.
fn reconcile_manifest(doc: &Document, ctx: &mut RenderContext) {
    let mut required = BTreeSet::new();
    for node in doc.body().descendants() {
        if let Some(extension) = dom::tag_name(&node)
            .as_deref()
            .and_then(|tag| registry().extension_for(tag))
        {
            required.insert(extension);
        }
    }

    ctx.manifest_mut().retain(|name| required.contains(name));
    for name in required {
        if !ctx.manifest().contains(name) {
            ctx.require_extension(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_hand_authored_component_gets_its_script() {
        let config = RenderConfig::default();
        let content = render(
            r#"<amp-youtube data-videoid="dQw4w9WgXcQ" width="480" height="270" layout="responsive"></amp-youtube>"#,
            &config,
        )
        .unwrap();
        assert!(content.amp_html.contains("<amp-youtube"));
        assert_eq!(
            content.scripts.get("amp-youtube").map(String::as_str),
            Some("https://cdn.ampproject.org/v0/amp-youtube-0.1.js")
        );
    }

    #[test]
    fn test_stripped_component_loses_its_script() {
        // The wrapper is unknown, so the sanitizer takes it and the
        // converted embed inside it; the manifest must follow suit.
        let config = RenderConfig::default();
        let content = render(
            r#"<custom-wrap><iframe src="https://www.youtube.com/embed/dQw4w9WgXcQ"></iframe></custom-wrap>"#,
            &config,
        )
        .unwrap();
        assert!(!content.amp_html.contains("amp-youtube"));
        assert!(content.scripts.is_empty());
    }

    #[test]
    fn test_content_filter_runs_before_parsing() {
        let config = RenderConfig::default().with_content_filter(Arc::new(|html: String| {
            html.replace("[gallery]", r#"<img src="https://example.com/g-100x80.jpg">"#)
        }));
        let content = render("<p>[gallery]</p>", &config).unwrap();
        assert!(content.amp_html.contains("<amp-img"));
        assert!(!content.amp_html.contains("[gallery]"));
    }

    #[test]
    fn test_plain_paragraph_needs_no_scripts() {
        let config = RenderConfig::default();
        let content = render("<p>plain text</p>", &config).unwrap();
        assert_eq!(content.amp_html, "<p>plain text</p>");
        assert!(content.scripts.is_empty());
    }
}
