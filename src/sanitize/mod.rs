//! Generic attribute and tag sanitizer
//!
//! The backstop pass after embed handling and tag conversion: whatever the
//! embedded rule tables do not admit is removed here. Elements with no
//! rule are detached outright, subtree included; attributes are dropped
//! individually when their name or value fails. The pass never errors, so
//! a hostile document loses nodes instead of aborting the render.

use kuchiki::NodeRef;

use crate::dom::{self, Document};
use crate::spec::{registry, url_scheme, TagRule};

/// Tags stripped on sight, contents included.
const DISALLOWED_TAGS: &[&str] = &[
    "script", "noscript", "style", "frame", "frameset", "object", "param", "applet", "form",
    "input", "button", "textarea", "select", "option", "link", "meta",
];

/// Attributes whose values name a URL and therefore get scheme-checked.
const URL_ATTRIBUTES: &[&str] = &[
    "href", "src", "poster", "cite", "data-url", "data-href", "action", "formaction", "background",
];

const DISALLOWED_PROTOCOLS: &[&str] = &["javascript", "vbscript"];

/// Strip every element and attribute the rule tables do not admit.
///
/// Comments and text are preserved; only element nodes are judged.
pub fn sanitize(doc: &Document) {
    let elements: Vec<NodeRef> = doc
        .body()
        .descendants()
        .filter(|node| node.as_element().is_some())
        .collect();

    // Reverse document order, so descendants are settled before an
    // ancestor can take the whole subtree with it.
    for node in elements.iter().rev() {
        let Some(tag) = dom::tag_name(node) else {
            continue;
        };

        if DISALLOWED_TAGS.contains(&tag.as_str()) {
            log::debug!("removing disallowed element <{tag}>");
            node.detach();
            continue;
        }
        let Some(rule) = registry().tag_rule(&tag) else {
            log::debug!("removing unknown element <{tag}>");
            node.detach();
            continue;
        };

        sanitize_attributes(node, &tag, rule);
    }
}

fn sanitize_attributes(node: &NodeRef, tag: &str, rule: &TagRule) {
    let Some(el) = node.as_element() else {
        return;
    };

    let pairs: Vec<(String, String)> = el
        .attributes
        .borrow()
        .map
        .iter()
        .map(|(name, attr)| (name.local.to_string(), attr.value.clone()))
        .collect();
    let has_attr = |name: &str| pairs.iter().any(|(n, _)| n == name);

    let mut removals: Vec<String> = Vec::new();
    for (name, value) in &pairs {
        if let Some(reason) = removal_reason(tag, name, value, &has_attr) {
            log::debug!("dropping {name} from <{tag}>: {reason}");
            removals.push(name.clone());
        }
    }

    if !removals.is_empty() {
        let mut attrs = el.attributes.borrow_mut();
        for name in &removals {
            attrs.remove(name.as_str());
        }
    }

    // Presence requirements are diagnostics only. The AMP runtime copes
    // with an incomplete element better than readers cope with a hole
    // where their content used to be.
    let kept = |name: &str| has_attr(name) && !removals.iter().any(|r| r == name);
    if let Some(problem) = rule.unsatisfied_requirement(&kept) {
        log::debug!("<{tag}> is incomplete: {problem}");
    }
}

fn removal_reason<F: Fn(&str) -> bool + Copy>(
    tag: &str,
    name: &str,
    value: &str,
    has_attr: F,
) -> Option<&'static str> {
    let lower = name.to_ascii_lowercase();
    if lower == "style" {
        return Some("inline styles are not allowed");
    }
    if lower.starts_with("on") && lower.len() > 2 {
        return Some("event handler attribute");
    }
    if !registry().allows_attribute(tag, name) {
        return Some("not in the allowed set");
    }
    if URL_ATTRIBUTES.contains(&lower.as_str()) {
        if let Some(scheme) = url_scheme(value) {
            if DISALLOWED_PROTOCOLS.contains(&scheme.as_str()) {
                return Some("disallowed URL protocol");
            }
        }
    }
    if let Some(attr_rule) = registry().attribute_rule(tag, name) {
        if !attr_rule.permits(value, has_attr) {
            return Some("value fails its constraint");
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitized(html: &str) -> String {
        let doc = Document::parse(html).unwrap();
        sanitize(&doc);
        doc.serialize().unwrap()
    }

    #[test]
    fn test_script_subtree_is_removed() {
        let html = sanitized("<p>keep me</p><script>alert(1)</script>");
        assert!(html.contains("keep me"));
        assert!(!html.contains("script"));
        assert!(!html.contains("alert"));
    }

    #[test]
    fn test_nested_script_is_removed() {
        let html = sanitized("<div><p>text<script>alert(1)</script></p></div>");
        assert!(html.contains("text"));
        assert!(!html.contains("alert"));
    }

    #[test]
    fn test_unknown_element_is_removed() {
        let html = sanitized("<p>before</p><marquee>gone</marquee><p>after</p>");
        assert!(html.contains("before"));
        assert!(html.contains("after"));
        assert!(!html.contains("marquee"));
        assert!(!html.contains("gone"));
    }

    #[test]
    fn test_unconverted_media_tags_are_removed() {
        let html = sanitized(r#"<img src="https://example.com/pic.jpg"><video src="https://example.com/clip.mp4"></video>"#);
        assert!(!html.contains("<img"));
        assert!(!html.contains("<video"));
    }

    #[test]
    fn test_style_and_event_attributes_are_dropped() {
        let html = sanitized(r#"<p style="color:red" onclick="steal()" class="intro">hello</p>"#);
        assert!(html.contains(r#"class="intro""#));
        assert!(html.contains("hello"));
        assert!(!html.contains("style="));
        assert!(!html.contains("onclick"));
    }

    #[test]
    fn test_javascript_href_is_dropped() {
        let html = sanitized(r#"<a href="javascript:alert(1)">link</a>"#);
        assert!(html.contains("<a"));
        assert!(html.contains("link"));
        assert!(!html.contains("href"));
    }

    #[test]
    fn test_obfuscated_scheme_is_caught() {
        let html = sanitized("<a href=\"java\tscript:alert(1)\">link</a>");
        assert!(!html.contains("href"));
    }

    #[test]
    fn test_relative_href_survives() {
        let html = sanitized(r#"<a href="/about">about</a>"#);
        assert!(html.contains(r#"href="/about""#));
    }

    #[test]
    fn test_target_value_constraint() {
        let html = sanitized(r#"<a href="https://example.com/" target="_parent">out</a>"#);
        assert!(html.contains(r#"href="https://example.com/""#));
        assert!(!html.contains("target"));
    }

    #[test]
    fn test_data_and_aria_attributes_survive() {
        let html = sanitized(r#"<div data-section="news" aria-label="News">n</div>"#);
        assert!(html.contains(r#"data-section="news""#));
        assert!(html.contains(r#"aria-label="News""#));
    }

    #[test]
    fn test_pattern_constraint_on_amp_component() {
        let html = sanitized(
            r#"<amp-vimeo data-videoid="not-numeric" width="640" height="360" layout="responsive"></amp-vimeo>"#,
        );
        assert!(html.contains("<amp-vimeo"));
        assert!(!html.contains("data-videoid"));
    }

    #[test]
    fn test_comments_are_preserved() {
        let html = sanitized("<p>a</p><!-- editorial note -->");
        assert!(html.contains("<!-- editorial note -->"));
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let doc = Document::parse(concat!(
            r#"<p style="x:y">text</p><script>alert(1)</script>"#,
            r#"<a href="javascript:x">bad</a><unknown-tag>gone</unknown-tag>"#,
        ))
        .unwrap();
        sanitize(&doc);
        let first = doc.serialize().unwrap();
        sanitize(&doc);
        let second = doc.serialize().unwrap();
        assert_eq!(first, second);
    }
}
