//! `audio` conversion to `amp-audio`
//!
//! `amp-audio` sizes itself from the browser's native controls, so unlike
//! the other media converters this one forces no layout or dimensions.

use super::{build_element, collect_allowed, merge_defaults};
use crate::dom::{self, Document};
use crate::pipeline::RenderContext;

const ALLOWED_ATTRS: &[&str] = &[
    "src", "width", "height", "controls", "loop", "muted", "autoplay", "class",
];

pub(crate) fn convert(doc: &Document, ctx: &mut RenderContext, extra: &[(&str, &str)]) {
    let elements = match doc.query("audio") {
        Ok(nodes) => nodes,
        Err(e) => {
            log::warn!("audio conversion skipped: {e}");
            return;
        }
    };

    let mut converted = 0usize;
    for node in elements {
        let src = dom::attribute(&node, "src").filter(|s| !s.trim().is_empty());
        let has_sources = node
            .children()
            .any(|child| dom::tag_name(&child).as_deref() == Some("source"));
        if src.is_none() && !has_sources {
            log::debug!("skipping audio without src or source children");
            continue;
        }

        let mut attrs = collect_allowed(&node, ALLOWED_ATTRS);
        merge_defaults(&mut attrs, extra);

        let replacement = build_element("amp-audio", &attrs);
        dom::move_children(&node, &replacement);
        match dom::replace_node(&node, replacement) {
            Ok(()) => {
                converted += 1;
                log::debug!("converted audio: {}", src.as_deref().unwrap_or("<source list>"));
            }
            Err(e) => log::warn!("failed to replace audio: {e}"),
        }
    }

    if converted > 0 {
        ctx.require_extension("amp-audio");
    }
}
