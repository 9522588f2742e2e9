//! Instagram embed handler

use std::sync::LazyLock;

use kuchiki::NodeRef;
use regex::Regex;

use super::util::{placeholder_anchor, remove_provider_script, scaled_embed_size};
use super::{EmbedError, EmbedHandler, EmbedResult};
use crate::dom::{self, query_in, Document};
use crate::pipeline::RenderContext;

const DEFAULT_WIDTH: u32 = 400;
const DEFAULT_HEIGHT: u32 = 400;
const SCRIPT_SRC: &str = "platform.instagram.com";

static SHORTCODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)instagram\.com/p/([A-Za-z0-9_-]+)")
        .expect("SHORTCODE: hardcoded regex is valid")
});

pub(super) struct Instagram;

impl EmbedHandler for Instagram {
    fn name(&self) -> &'static str {
        "instagram"
    }

    fn extension(&self) -> &'static str {
        "amp-instagram"
    }

    fn matches(&self, doc: &Document) -> Vec<NodeRef> {
        doc.query("blockquote.instagram-media").unwrap_or_default()
    }

    fn transform(&self, node: &NodeRef, ctx: &mut RenderContext) -> EmbedResult<()> {
        let shortcode = permalink_shortcode(node).ok_or(EmbedError::MissingUrl)?;

        let (width, height) = scaled_embed_size(ctx, DEFAULT_WIDTH, DEFAULT_HEIGHT);
        let amp = dom::create_element(
            "amp-instagram",
            [
                ("data-shortcode", shortcode.clone()),
                ("width", width.to_string()),
                ("height", height.to_string()),
                ("layout", "responsive".to_string()),
            ],
        );
        amp.append(placeholder_anchor(&format!(
            "https://www.instagram.com/p/{shortcode}/"
        )));
        dom::replace_node(node, amp.clone())?;
        remove_provider_script(&amp, SCRIPT_SRC);
        Ok(())
    }
}

fn permalink_shortcode(node: &NodeRef) -> Option<String> {
    for anchor in query_in(node, "a").unwrap_or_default() {
        if let Some(code) = dom::attribute(&anchor, "href")
            .as_deref()
            .and_then(|href| SHORTCODE.captures(href))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
        {
            return Some(code);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::embed::run_handlers;

    fn render_embed(html: &str) -> String {
        let config = RenderConfig::default();
        let doc = Document::parse(html).unwrap();
        let mut ctx = RenderContext::new(&config);
        let handlers: Vec<Box<dyn EmbedHandler>> = vec![Box::new(Instagram)];
        run_handlers(&doc, &handlers, &mut ctx);
        doc.serialize().unwrap()
    }

    #[test]
    fn test_media_blockquote_is_converted() {
        let html = render_embed(concat!(
            r#"<blockquote class="instagram-media" data-instgrm-version="7">"#,
            r#"<a href="https://www.instagram.com/p/fA9uwTtkSN/">A photo</a>"#,
            "</blockquote>",
            r#"<p><script async defer src="//platform.instagram.com/en_US/embeds.js"></script></p>"#,
        ));
        assert!(html.contains("<amp-instagram"));
        assert!(html.contains(r#"data-shortcode="fA9uwTtkSN""#));
        assert!(html.contains(r#"width="400""#));
        assert!(html.contains(r#"height="400""#));
        assert!(html.contains(r#"href="https://www.instagram.com/p/fA9uwTtkSN/""#));
        assert!(!html.contains("blockquote"));
        assert!(!html.contains("embeds.js"));
    }

    #[test]
    fn test_blockquote_without_permalink_is_left_alone() {
        let html = render_embed(r#"<blockquote class="instagram-media"><p>caption</p></blockquote>"#);
        assert!(html.contains("<blockquote"));
        assert!(!html.contains("amp-instagram"));
    }
}
