//! `iframe` conversion to `amp-iframe`
//!
//! The original children of the frame are discarded. `amp-iframe` only
//! renders `placeholder`/`fallback` children, and arbitrary carried-over
//! markup would be stripped by the validator anyway.

use kuchiki::NodeRef;

use super::{apply_sizing, build_element, collect_allowed, merge_defaults};
use crate::dom::{self, Document};
use crate::pipeline::RenderContext;

const ALLOWED_ATTRS: &[&str] = &[
    "src",
    "sandbox",
    "width",
    "height",
    "frameborder",
    "allowfullscreen",
    "allowtransparency",
    "class",
];
const FALLBACK_HEIGHT: u32 = 400;
const DEFAULT_SANDBOX: &str = "allow-scripts allow-same-origin";

pub(crate) fn convert(doc: &Document, ctx: &mut RenderContext, extra: &[(&str, &str)]) {
    let frames = match doc.query("iframe") {
        Ok(nodes) => nodes,
        Err(e) => {
            log::warn!("iframe conversion skipped: {e}");
            return;
        }
    };

    let mut converted = 0usize;
    for node in frames {
        let Some(src) = dom::attribute(&node, "src").filter(|s| !s.trim().is_empty()) else {
            log::debug!("skipping iframe without src");
            continue;
        };

        let mut attrs = collect_allowed(&node, ALLOWED_ATTRS);
        merge_defaults(&mut attrs, extra);
        merge_defaults(&mut attrs, &[("sandbox", DEFAULT_SANDBOX)]);
        apply_sizing(&mut attrs, ctx.config().content_max_width(), FALLBACK_HEIGHT);

        let replacement = build_element("amp-iframe", &attrs);
        if ctx.config().add_placeholder() {
            replacement.append(placeholder_div());
        }
        match dom::replace_node(&node, replacement) {
            Ok(()) => {
                converted += 1;
                log::debug!("converted iframe: {src}");
            }
            Err(e) => log::warn!("failed to replace iframe {src}: {e}"),
        }
    }

    if converted > 0 {
        ctx.require_extension("amp-iframe");
    }
}

fn placeholder_div() -> NodeRef {
    dom::create_element(
        "div",
        [
            ("placeholder", String::new()),
            ("class", "amp-wp-iframe-placeholder".to_string()),
        ],
    )
}
