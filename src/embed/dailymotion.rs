//! Dailymotion embed handler

use std::sync::LazyLock;

use kuchiki::NodeRef;
use regex::Regex;

use super::util::{placeholder_anchor, scaled_embed_size};
use super::{EmbedError, EmbedHandler, EmbedResult};
use crate::dom::{self, Document};
use crate::pipeline::RenderContext;

const DEFAULT_WIDTH: u32 = 480;
const DEFAULT_HEIGHT: u32 = 270;

static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)dailymotion\.com/embed/video/([A-Za-z0-9]+)")
        .expect("VIDEO_ID: hardcoded regex is valid")
});

pub(super) struct Dailymotion;

impl EmbedHandler for Dailymotion {
    fn name(&self) -> &'static str {
        "dailymotion"
    }

    fn extension(&self) -> &'static str {
        "amp-dailymotion"
    }

    fn matches(&self, doc: &Document) -> Vec<NodeRef> {
        let Ok(frames) = doc.query("iframe") else {
            return Vec::new();
        };
        frames
            .into_iter()
            .filter(|node| {
                dom::attribute(node, "src").is_some_and(|src| src.contains("dailymotion.com"))
            })
            .collect()
    }

    fn transform(&self, node: &NodeRef, ctx: &mut RenderContext) -> EmbedResult<()> {
        let url = dom::attribute(node, "src").ok_or(EmbedError::MissingUrl)?;
        let id = VIDEO_ID
            .captures(&url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| EmbedError::MissingId { url: url.clone() })?;

        let (width, height) = scaled_embed_size(ctx, DEFAULT_WIDTH, DEFAULT_HEIGHT);
        let amp = dom::create_element(
            "amp-dailymotion",
            [
                ("data-videoid", id.clone()),
                ("width", width.to_string()),
                ("height", height.to_string()),
                ("layout", "responsive".to_string()),
            ],
        );
        amp.append(placeholder_anchor(&format!(
            "https://www.dailymotion.com/video/{id}"
        )));
        dom::replace_node(node, amp)?;
        Ok(())
    }
}
