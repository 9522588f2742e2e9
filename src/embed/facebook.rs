//! Facebook embed handler
//!
//! Handles both post and video embeds. The SDK snippet marks them with
//! `fb-post`/`fb-video` classes and carries the permalink in `data-href`.

use kuchiki::NodeRef;

use super::util::{placeholder_anchor, remove_provider_script, scaled_embed_size};
use super::{EmbedError, EmbedHandler, EmbedResult};
use crate::dom::{self, Document};
use crate::pipeline::RenderContext;

const DEFAULT_WIDTH: u32 = 552;
const DEFAULT_HEIGHT: u32 = 310;
const SCRIPT_SRC: &str = "connect.facebook.net";

pub(super) struct Facebook;

impl EmbedHandler for Facebook {
    fn name(&self) -> &'static str {
        "facebook"
    }

    fn extension(&self) -> &'static str {
        "amp-facebook"
    }

    fn matches(&self, doc: &Document) -> Vec<NodeRef> {
        doc.query("div.fb-post, div.fb-video").unwrap_or_default()
    }

    fn transform(&self, node: &NodeRef, ctx: &mut RenderContext) -> EmbedResult<()> {
        let href = dom::attribute(node, "data-href")
            .filter(|href| !href.trim().is_empty())
            .ok_or(EmbedError::MissingUrl)?;
        let embed_as = if has_class(node, "fb-video") { "video" } else { "post" };

        let (width, height) = scaled_embed_size(ctx, DEFAULT_WIDTH, DEFAULT_HEIGHT);
        let amp = dom::create_element(
            "amp-facebook",
            [
                ("data-href", href.clone()),
                ("data-embed-as", embed_as.to_string()),
                ("width", width.to_string()),
                ("height", height.to_string()),
                ("layout", "responsive".to_string()),
            ],
        );
        amp.append(placeholder_anchor(&href));
        dom::replace_node(node, amp.clone())?;
        remove_provider_script(&amp, SCRIPT_SRC);
        Ok(())
    }
}

fn has_class(node: &NodeRef, class: &str) -> bool {
    dom::attribute(node, "class")
        .is_some_and(|value| value.split_whitespace().any(|token| token == class))
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
        let handlers: Vec<Box<dyn EmbedHandler>> = vec![Box::new(Facebook)];
        run_handlers(&doc, &handlers, &mut ctx);
        doc.serialize().unwrap()
    }

    #[test]
    fn test_post_div_is_converted() {
        let html = render_embed(concat!(
            r#"<div class="fb-post" data-href="https://www.facebook.com/zuck/posts/10102577175875681"></div>"#,
            r#"<script async defer src="//connect.facebook.net/en_US/sdk.js#xfbml=1"></script>"#,
        ));
        assert!(html.contains("<amp-facebook"));
        assert!(html.contains(r#"data-href="https://www.facebook.com/zuck/posts/10102577175875681""#));
        assert!(html.contains(r#"data-embed-as="post""#));
        assert!(html.contains(r#"width="552""#));
        assert!(html.contains(r#"height="310""#));
        assert!(!html.contains("sdk.js"));
    }

    #[test]
    fn test_video_div_embeds_as_video() {
        let html = render_embed(
            r#"<div class="fb-video" data-href="https://www.facebook.com/facebook/videos/101545"></div>"#,
        );
        assert!(html.contains(r#"data-embed-as="video""#));
    }

    #[test]
    fn test_div_without_href_is_left_alone() {
        let html = render_embed(r#"<div class="fb-post"><p>cached copy</p></div>"#);
        assert!(html.contains(r#"class="fb-post""#));
        assert!(!html.contains("amp-facebook"));
    }
}
