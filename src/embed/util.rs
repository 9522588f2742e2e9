//! Shared helpers for the provider handlers

use kuchiki::NodeRef;

use crate::dom::{self, parse_fragment};
use crate::pipeline::RenderContext;

/// Class marking an embed that degraded to a plain link.
pub(crate) const FALLBACK_CLASS: &str = "amp-wp-embed-fallback";

/// Anchor that stands in for provider markup whose media ID could not be
/// read. The original URL stays reachable instead of the embed vanishing.
pub(crate) fn fallback_anchor(url: &str) -> NodeRef {
    let html = format!(
        r#"<a class="{FALLBACK_CLASS}" href="{href}">{text}</a>"#,
        href = html_escape::encode_double_quoted_attribute(url),
        text = html_escape::encode_text(url),
    );
    parse_fragment(&html)
        .ok()
        .and_then(|nodes| nodes.into_iter().next())
        .unwrap_or_else(|| {
            let anchor = dom::create_element(
                "a",
                [("class", FALLBACK_CLASS.to_string()), ("href", url.to_string())],
            );
            anchor.append(NodeRef::new_text(url));
            anchor
        })
}

/// Visible link rendered inside a successful embed until the extension's
/// JS takes over, and kept by non-AMP renderers that ignore `amp-*` tags.
pub(crate) fn placeholder_anchor(url: &str) -> NodeRef {
    let anchor = dom::create_element(
        "a",
        [("placeholder", String::new()), ("href", url.to_string())],
    );
    anchor.append(NodeRef::new_text(url));
    anchor
}

/// Detach the provider's loader `<script>` trailing the embed.
///
/// Scans forward siblings of `start`, skipping whitespace, and removes the
/// first script whose `src` contains `src_fragment`. Descends one level
/// into a wrapping `<p>` whose only element child is such a script, the
/// shape paragraph auto-wrapping produces, and drops the paragraph too
/// once it is empty. Stops at the first substantive sibling either way.
pub(crate) fn remove_provider_script(start: &NodeRef, src_fragment: &str) -> bool {
    let mut cursor = start.next_sibling();
    while let Some(node) = cursor {
        cursor = node.next_sibling();

        if let Some(text) = node.as_text() {
            if text.borrow().trim().is_empty() {
                continue;
            }
            return false;
        }
        let Some(tag) = dom::tag_name(&node) else {
            continue;
        };
        match tag.as_str() {
            "script" => {
                if is_provider_script(&node, src_fragment) {
                    node.detach();
                    return true;
                }
                return false;
            }
            "p" => {
                let elements: Vec<NodeRef> =
                    node.children().filter(|c| c.as_element().is_some()).collect();
                if elements.len() == 1 && is_provider_script(&elements[0], src_fragment) {
                    elements[0].detach();
                    if whitespace_only(&node) {
                        node.detach();
                    }
                    return true;
                }
                return false;
            }
            _ => return false,
        }
    }
    false
}

fn is_provider_script(node: &NodeRef, src_fragment: &str) -> bool {
    dom::tag_name(node).as_deref() == Some("script")
        && dom::attribute(node, "src").is_some_and(|src| src.contains(src_fragment))
}

fn whitespace_only(node: &NodeRef) -> bool {
    node.children()
        .all(|child| child.as_text().is_some_and(|t| t.borrow().trim().is_empty()))
}

/// Scale a provider's default embed size down to the configured content
/// width, preserving the aspect ratio. Sizes already inside the content
/// column pass through unchanged.
pub(crate) fn scaled_embed_size(
    ctx: &RenderContext,
    default_width: u32,
    default_height: u32,
) -> (u32, u32) {
    let max = ctx.config().content_max_width();
    if max > 0 && max < default_width {
        let height = (max * default_height + default_width / 2) / default_width;
        (max, height)
    } else {
        (default_width, default_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::dom::{serialize_node, Document};

    #[test]
    fn test_fallback_anchor_shape() {
        let anchor = fallback_anchor("https://youtu.be/broken");
        let html = serialize_node(&anchor).unwrap();
        assert_eq!(
            html,
            r#"<a class="amp-wp-embed-fallback" href="https://youtu.be/broken">https://youtu.be/broken</a>"#
        );
    }

    #[test]
    fn test_fallback_anchor_escapes_url() {
        let anchor = fallback_anchor("https://www.youtube.com/watch?v=abc&t=10");
        let html = serialize_node(&anchor).unwrap();
        assert!(html.contains(r#"href="https://www.youtube.com/watch?v=abc&amp;t=10""#));
        assert!(html.contains(">https://www.youtube.com/watch?v=abc&amp;t=10</a>"));
    }

    #[test]
    fn test_placeholder_anchor_carries_attribute() {
        let anchor = placeholder_anchor("https://vimeo.com/1234");
        let html = serialize_node(&anchor).unwrap();
        assert_eq!(
            html,
            r#"<a href="https://vimeo.com/1234" placeholder="">https://vimeo.com/1234</a>"#
        );
    }

    #[test]
    fn test_removes_direct_script_sibling() {
        let doc = Document::parse(concat!(
            r#"<div id="embed"></div>"#,
            r#"<script async src="https://platform.twitter.com/widgets.js"></script>"#,
        ))
        .unwrap();
        let embed = doc.query("#embed").unwrap().remove(0);
        assert!(remove_provider_script(&embed, "platform.twitter.com/widgets.js"));
        assert!(!doc.serialize().unwrap().contains("script"));
    }

    #[test]
    fn test_removes_paragraph_wrapped_script() {
        let doc = Document::parse(concat!(
            r#"<div id="embed"></div>"#,
            r#"<p><script async src="//platform.instagram.com/en_US/embeds.js"></script></p>"#,
        ))
        .unwrap();
        let embed = doc.query("#embed").unwrap().remove(0);
        assert!(remove_provider_script(&embed, "platform.instagram.com"));
        let html = doc.serialize().unwrap();
        assert!(!html.contains("script"));
        assert!(!html.contains("<p>"));
    }

    #[test]
    fn test_stops_at_substantive_sibling() {
        let doc = Document::parse(concat!(
            r#"<div id="embed"></div>"#,
            "<p>unrelated paragraph</p>",
            r#"<script src="https://platform.twitter.com/widgets.js"></script>"#,
        ))
        .unwrap();
        let embed = doc.query("#embed").unwrap().remove(0);
        assert!(!remove_provider_script(&embed, "platform.twitter.com"));
        assert!(doc.serialize().unwrap().contains("script"));
    }

    #[test]
    fn test_unrelated_script_is_kept() {
        let doc = Document::parse(concat!(
            r#"<div id="embed"></div>"#,
            r#"<script src="https://example.com/analytics.js"></script>"#,
        ))
        .unwrap();
        let embed = doc.query("#embed").unwrap().remove(0);
        assert!(!remove_provider_script(&embed, "platform.twitter.com"));
    }

    #[test]
    fn test_scaled_embed_size() {
        let config = RenderConfig::default().with_content_max_width(600);
        let ctx = RenderContext::new(&config);
        assert_eq!(scaled_embed_size(&ctx, 640, 360), (600, 338));
        assert_eq!(scaled_embed_size(&ctx, 480, 270), (480, 270));

        let wide = RenderConfig::default().with_content_max_width(0);
        let ctx = RenderContext::new(&wide);
        assert_eq!(scaled_embed_size(&ctx, 640, 360), (640, 360));
    }
}
