//! `video` conversion to `amp-video`

use super::{apply_sizing, build_element, collect_allowed, merge_defaults};
use crate::dom::{self, Document};
use crate::pipeline::RenderContext;

const ALLOWED_ATTRS: &[&str] = &[
    "src", "poster", "width", "height", "controls", "loop", "muted", "autoplay", "class",
];
const FALLBACK_HEIGHT: u32 = 400;

pub(crate) fn convert(doc: &Document, ctx: &mut RenderContext, extra: &[(&str, &str)]) {
    let videos = match doc.query("video") {
        Ok(nodes) => nodes,
        Err(e) => {
            log::warn!("video conversion skipped: {e}");
            return;
        }
    };

    let mut converted = 0usize;
    for node in videos {
        let src = dom::attribute(&node, "src").filter(|s| !s.trim().is_empty());
        let has_sources = node
            .children()
            .any(|child| dom::tag_name(&child).as_deref() == Some("source"));
        if src.is_none() && !has_sources {
            log::debug!("skipping video without src or source children");
            continue;
        }

        let mut attrs = collect_allowed(&node, ALLOWED_ATTRS);
        merge_defaults(&mut attrs, extra);
        apply_sizing(&mut attrs, ctx.config().content_max_width(), FALLBACK_HEIGHT);

        let replacement = build_element("amp-video", &attrs);
        dom::move_children(&node, &replacement);
        match dom::replace_node(&node, replacement) {
            Ok(()) => {
                converted += 1;
                log::debug!("converted video: {}", src.as_deref().unwrap_or("<source list>"));
            }
            Err(e) => log::warn!("failed to replace video: {e}"),
        }
    }

    if converted > 0 {
        ctx.require_extension("amp-video");
    }
}
