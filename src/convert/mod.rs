//! Converters for the four natively AMP-capable HTML tags
//!
//! `img`, `video`, `audio`, and `iframe` each have a first-party `amp-*`
//! replacement, so they are rewritten in place rather than stripped. Every
//! converter filters the source element's attributes through a tag-specific
//! allow-list, merges caller defaults, and applies the shared sizing policy
//! before swapping the element. Anything left unconverted (for example an
//! `img` with no `src`) is handled later by the sanitizer's backstop pass.

mod audio;
mod dimensions;
mod iframe;
mod img;
mod video;

pub use dimensions::{dimensions_from_filename, infer_dimensions, DimensionProvider};

use kuchiki::NodeRef;

use crate::dom::{self, Document};
use crate::pipeline::RenderContext;

/// Run all four converters in their fixed order.
///
/// The order matters: attributes generated by an earlier converter must not
/// be re-examined by a later one, so each tag is processed exactly once,
/// `img` first and `iframe` last.
pub fn run_converters(doc: &Document, ctx: &mut RenderContext) {
    img::convert(doc, ctx, &[("layout", "responsive")]);
    video::convert(doc, ctx, &[("layout", "responsive")]);
    audio::convert(doc, ctx, &[]);
    iframe::convert(doc, ctx, &[("layout", "responsive")]);
}

// ============================================================================
// Shared attribute plumbing
// ============================================================================

/// Copy the attributes of `node` that appear in `allowed`, preserving their
/// values verbatim.
pub(crate) fn collect_allowed(node: &NodeRef, allowed: &[&str]) -> Vec<(String, String)> {
    let Some(el) = node.as_element() else {
        return Vec::new();
    };
    let attrs = el.attributes.borrow();
    attrs
        .map
        .iter()
        .filter_map(|(name, attr)| {
            let local: &str = &name.local;
            if allowed.contains(&local) {
                Some((local.to_string(), attr.value.clone()))
            } else {
                None
            }
        })
        .collect()
}

pub(crate) fn attr_get<'v>(attrs: &'v [(String, String)], name: &str) -> Option<&'v str> {
    attrs
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v.as_str())
}

pub(crate) fn attr_set(attrs: &mut Vec<(String, String)>, name: &str, value: String) {
    match attrs.iter_mut().find(|(n, _)| n == name) {
        Some(entry) => entry.1 = value,
        None => attrs.push((name.to_string(), value)),
    }
}

pub(crate) fn attr_remove(attrs: &mut Vec<(String, String)>, name: &str) {
    attrs.retain(|(n, _)| n != name);
}

/// Fill in caller-supplied defaults without overriding explicit values.
pub(crate) fn merge_defaults(attrs: &mut Vec<(String, String)>, defaults: &[(&str, &str)]) {
    for (name, value) in defaults {
        if attr_get(attrs, name).is_none() {
            attrs.push(((*name).to_string(), (*value).to_string()));
        }
    }
}

/// Reconcile the element's layout with whichever dimensions survived.
///
/// Both dimensions known: leave the merged layout alone. Height only: take
/// the configured content width so a responsive ratio exists. Anything
/// less: fall back to `fixed-height`, which needs a height but must not
/// carry a width.
pub(crate) fn apply_sizing(
    attrs: &mut Vec<(String, String)>,
    content_max_width: u32,
    fallback_height: u32,
) {
    let has_width = attr_get(attrs, "width").is_some();
    let has_height = attr_get(attrs, "height").is_some();

    match (has_width, has_height) {
        (true, true) => {}
        (false, true) => attr_set(attrs, "width", content_max_width.to_string()),
        _ => {
            attr_remove(attrs, "width");
            if !has_height {
                attr_set(attrs, "height", fallback_height.to_string());
            }
            attr_set(attrs, "layout", "fixed-height".to_string());
        }
    }
}

/// Build the replacement element from the filtered attribute set.
pub(crate) fn build_element(tag: &str, attrs: &[(String, String)]) -> NodeRef {
    dom::create_element(tag, attrs.iter().map(|(n, v)| (n.as_str(), v.clone())))
}
