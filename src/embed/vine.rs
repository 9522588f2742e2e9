//! Vine embed handler

use std::sync::LazyLock;

use kuchiki::NodeRef;
use regex::Regex;

use super::util::{placeholder_anchor, remove_provider_script, scaled_embed_size};
use super::{EmbedError, EmbedHandler, EmbedResult};
use crate::dom::{self, Document};
use crate::pipeline::RenderContext;

const DEFAULT_WIDTH: u32 = 400;
const DEFAULT_HEIGHT: u32 = 400;
const SCRIPT_SRC: &str = "platform.vine.co";

static VINE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)vine\.co/v/([A-Za-z0-9]+)/embed")
        .expect("VINE_ID: hardcoded regex is valid")
});

pub(super) struct Vine;

impl EmbedHandler for Vine {
    fn name(&self) -> &'static str {
        "vine"
    }

    fn extension(&self) -> &'static str {
        "amp-vine"
    }

    fn matches(&self, doc: &Document) -> Vec<NodeRef> {
        let Ok(frames) = doc.query("iframe") else {
            return Vec::new();
        };
        frames
            .into_iter()
            .filter(|node| dom::attribute(node, "src").is_some_and(|src| src.contains("vine.co/v/")))
            .collect()
    }

    fn transform(&self, node: &NodeRef, ctx: &mut RenderContext) -> EmbedResult<()> {
        let url = dom::attribute(node, "src").ok_or(EmbedError::MissingUrl)?;
        let id = VINE_ID
            .captures(&url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| EmbedError::MissingId { url: url.clone() })?;

        let (width, height) = scaled_embed_size(ctx, DEFAULT_WIDTH, DEFAULT_HEIGHT);
        let amp = dom::create_element(
            "amp-vine",
            [
                ("data-vineid", id.clone()),
                ("width", width.to_string()),
                ("height", height.to_string()),
                ("layout", "responsive".to_string()),
            ],
        );
        amp.append(placeholder_anchor(&format!("https://vine.co/v/{id}")));
        dom::replace_node(node, amp.clone())?;
        remove_provider_script(&amp, SCRIPT_SRC);
        Ok(())
    }
}
