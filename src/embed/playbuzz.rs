//! Playbuzz embed handler
//!
//! The publisher snippet is a `div.pb_feed` naming the item either by ID
//! (`data-item`) or by site path (`data-game`). Both shapes normalize
//! into the `src` attribute `amp-playbuzz` expects.

use kuchiki::NodeRef;

use super::util::{placeholder_anchor, remove_provider_script};
use super::{EmbedError, EmbedHandler, EmbedResult};
use crate::dom::{self, Document};
use crate::pipeline::RenderContext;

const DEFAULT_HEIGHT: u32 = 500;
const SCRIPT_SRC: &str = "cdn.playbuzz.com";

pub(super) struct Playbuzz;

impl EmbedHandler for Playbuzz {
    fn name(&self) -> &'static str {
        "playbuzz"
    }

    fn extension(&self) -> &'static str {
        "amp-playbuzz"
    }

    fn matches(&self, doc: &Document) -> Vec<NodeRef> {
        doc.query("div.pb_feed").unwrap_or_default()
    }

    fn transform(&self, node: &NodeRef, ctx: &mut RenderContext) -> EmbedResult<()> {
        let src = item_url(node).ok_or(EmbedError::MissingUrl)?;

        let amp = dom::create_element(
            "amp-playbuzz",
            [
                ("src", src.clone()),
                ("id", ctx.next_id("amp-playbuzz")),
                ("height", DEFAULT_HEIGHT.to_string()),
                ("layout", "fixed-height".to_string()),
            ],
        );
        amp.append(placeholder_anchor(&src));
        dom::replace_node(node, amp.clone())?;
        remove_provider_script(&amp, SCRIPT_SRC);
        Ok(())
    }
}

fn item_url(node: &NodeRef) -> Option<String> {
    if let Some(item) = dom::attribute(node, "data-item").filter(|v| !v.trim().is_empty()) {
        return Some(format!("https://www.playbuzz.com/item/{}", item.trim()));
    }
    let game = dom::attribute(node, "data-game").filter(|v| !v.trim().is_empty())?;
    let game = game.trim();
    if game.starts_with("http://") || game.starts_with("https://") {
        Some(game.to_string())
    } else if let Some(rest) = game.strip_prefix("//") {
        Some(format!("https://{rest}"))
    } else {
        Some(format!("https://www.playbuzz.com/{}", game.trim_start_matches('/')))
    }
}
