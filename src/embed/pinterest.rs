//! Pinterest embed handler

use kuchiki::NodeRef;

use super::util::{placeholder_anchor, remove_provider_script};
use super::{EmbedError, EmbedHandler, EmbedResult};
use crate::dom::{self, Document};
use crate::pipeline::RenderContext;

const DEFAULT_WIDTH: u32 = 450;
const DEFAULT_HEIGHT: u32 = 750;
const SCRIPT_SRC: &str = "assets.pinterest.com";

pub(super) struct Pinterest;

impl EmbedHandler for Pinterest {
    fn name(&self) -> &'static str {
        "pinterest"
    }

    fn extension(&self) -> &'static str {
        "amp-pinterest"
    }

    fn matches(&self, doc: &Document) -> Vec<NodeRef> {
        doc.query(r#"a[data-pin-do="embedPin"]"#).unwrap_or_default()
    }

    fn transform(&self, node: &NodeRef, _ctx: &mut RenderContext) -> EmbedResult<()> {
        let href = dom::attribute(node, "href")
            .filter(|href| !href.trim().is_empty())
            .ok_or(EmbedError::MissingUrl)?;

        // amp-pinterest sizes itself around the pin card, so the
        // dimensions are hints rather than a scaled aspect ratio.
        let amp = dom::create_element(
            "amp-pinterest",
            [
                ("data-do", "embedPin".to_string()),
                ("data-url", href.clone()),
                ("width", DEFAULT_WIDTH.to_string()),
                ("height", DEFAULT_HEIGHT.to_string()),
            ],
        );
        amp.append(placeholder_anchor(&href));
        dom::replace_node(node, amp.clone())?;
        remove_provider_script(&amp, SCRIPT_SRC);
        Ok(())
    }
}
