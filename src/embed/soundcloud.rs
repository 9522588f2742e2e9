//! SoundCloud embed handler
//!
//! The player iframe carries the canonical track URL percent-encoded in
//! its `url` query parameter, e.g.
//! `https://w.soundcloud.com/player/?url=https%3A//api.soundcloud.com/tracks/89`.

use std::sync::LazyLock;

use kuchiki::NodeRef;
use regex::Regex;
use url::Url;

use super::util::placeholder_anchor;
use super::{EmbedError, EmbedHandler, EmbedResult};
use crate::dom::{self, Document};
use crate::pipeline::RenderContext;

const DEFAULT_HEIGHT: u32 = 200;
const PLAYER_HOST: &str = "w.soundcloud.com/player";

static TRACK_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/tracks/(\d+)").expect("TRACK_ID: hardcoded regex is valid")
});

pub(super) struct Soundcloud;

impl EmbedHandler for Soundcloud {
    fn name(&self) -> &'static str {
        "soundcloud"
    }

    fn extension(&self) -> &'static str {
        "amp-soundcloud"
    }

    fn matches(&self, doc: &Document) -> Vec<NodeRef> {
        let Ok(frames) = doc.query("iframe") else {
            return Vec::new();
        };
        frames
            .into_iter()
            .filter(|node| {
                dom::attribute(node, "src").is_some_and(|src| src.contains(PLAYER_HOST))
            })
            .collect()
    }

    fn transform(&self, node: &NodeRef, ctx: &mut RenderContext) -> EmbedResult<()> {
        let src = dom::attribute(node, "src").ok_or(EmbedError::MissingUrl)?;
        let player = parse_player_url(&src).ok_or_else(|| EmbedError::MissingId {
            url: src.clone(),
        })?;

        let track_url = player
            .query_pairs()
            .find(|(name, _)| name == "url")
            .map(|(_, value)| value.into_owned());
        let id = track_id(track_url.as_deref().unwrap_or(&src))
            .ok_or_else(|| EmbedError::MissingId { url: src.clone() })?;
        let visual = player
            .query_pairs()
            .any(|(name, value)| name == "visual" && value == "true");

        let mut attrs = vec![
            ("data-trackid".to_string(), id),
            ("height".to_string(), DEFAULT_HEIGHT.to_string()),
            ("layout".to_string(), "fixed-height".to_string()),
        ];
        if visual {
            attrs.push(("data-visual".to_string(), "true".to_string()));
        }
        let amp = dom::create_element(
            "amp-soundcloud",
            attrs.iter().map(|(name, value)| (name.as_str(), value.clone())),
        );
        amp.append(placeholder_anchor(track_url.as_deref().unwrap_or(&src)));
        dom::replace_node(node, amp)?;
        Ok(())
    }
}

fn parse_player_url(src: &str) -> Option<Url> {
    let absolute = if src.starts_with("//") {
        format!("https:{src}")
    } else {
        src.to_string()
    };
    Url::parse(&absolute).ok()
}

fn track_id(url: &str) -> Option<String> {
    TRACK_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
