//! `img` conversion to `amp-img`, or `amp-anim` for animated GIFs

use super::dimensions::infer_dimensions;
use super::{apply_sizing, attr_get, attr_set, build_element, collect_allowed, merge_defaults};
use crate::dom::{self, Document};
use crate::pipeline::RenderContext;

const ALLOWED_ATTRS: &[&str] = &["src", "srcset", "alt", "width", "height", "class"];
const FALLBACK_HEIGHT: u32 = 400;

pub(crate) fn convert(doc: &Document, ctx: &mut RenderContext, extra: &[(&str, &str)]) {
    let images = match doc.query("img") {
        Ok(nodes) => nodes,
        Err(e) => {
            log::warn!("image conversion skipped: {e}");
            return;
        }
    };

    let mut animated = 0usize;
    for node in images {
        let Some(src) = dom::attribute(&node, "src").filter(|s| !s.trim().is_empty()) else {
            log::debug!("skipping img without src");
            continue;
        };

        let mut attrs = collect_allowed(&node, ALLOWED_ATTRS);

        // Inference only fires when the markup carried no dimensions at
        // all; a lone width or height is resolved by the sizing policy.
        if attr_get(&attrs, "width").is_none() && attr_get(&attrs, "height").is_none() {
            if let Some((width, height)) =
                infer_dimensions(&src, ctx.config().dimension_provider())
            {
                attr_set(&mut attrs, "width", width.to_string());
                attr_set(&mut attrs, "height", height.to_string());
            }
        }

        merge_defaults(&mut attrs, extra);
        apply_sizing(&mut attrs, ctx.config().content_max_width(), FALLBACK_HEIGHT);

        let tag = if is_gif(&src) { "amp-anim" } else { "amp-img" };
        let replacement = build_element(tag, &attrs);
        match dom::replace_node(&node, replacement) {
            Ok(()) => {
                if tag == "amp-anim" {
                    animated += 1;
                }
                log::debug!("converted img to {tag}: {src}");
            }
            Err(e) => log::warn!("failed to replace img {src}: {e}"),
        }
    }

    if animated > 0 {
        ctx.require_extension("amp-anim");
    }
}

fn is_gif(src: &str) -> bool {
    let path = src.split(['?', '#']).next().unwrap_or(src);
    path.to_ascii_lowercase().ends_with(".gif")
}
