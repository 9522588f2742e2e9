//! Twitter embed handler
//!
//! Publish-flow tweets arrive as `blockquote.twitter-tweet` plus a trailing
//! `widgets.js` loader script. The blockquote itself becomes the
//! `amp-twitter` placeholder so the tweet text stays readable wherever the
//! extension's JS never runs.

use std::sync::LazyLock;

use kuchiki::NodeRef;
use regex::Regex;

use super::util::{remove_provider_script, scaled_embed_size};
use super::{EmbedError, EmbedHandler, EmbedResult};
use crate::dom::{self, query_in, Document};
use crate::pipeline::RenderContext;

const DEFAULT_WIDTH: u32 = 600;
const DEFAULT_HEIGHT: u32 = 480;
const SCRIPT_SRC: &str = "platform.twitter.com/widgets.js";

static TWEET_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)twitter\.com/[^/]+/status(?:es)?/(\d+)")
        .expect("TWEET_ID: hardcoded regex is valid")
});

pub(super) struct Twitter;

impl EmbedHandler for Twitter {
    fn name(&self) -> &'static str {
        "twitter"
    }

    fn extension(&self) -> &'static str {
        "amp-twitter"
    }

    fn matches(&self, doc: &Document) -> Vec<NodeRef> {
        doc.query("blockquote.twitter-tweet").unwrap_or_default()
    }

    fn transform(&self, node: &NodeRef, ctx: &mut RenderContext) -> EmbedResult<()> {
        // The permalink is the last status anchor in the quote; earlier
        // ones are mentions or media links.
        let mut tweet_id = None;
        for anchor in query_in(node, "a").unwrap_or_default() {
            if let Some(href) = dom::attribute(&anchor, "href") {
                if let Some(id) = TWEET_ID
                    .captures(&href)
                    .and_then(|caps| caps.get(1))
                    .map(|m| m.as_str().to_string())
                {
                    tweet_id = Some(id);
                }
            }
        }
        let id = tweet_id.ok_or(EmbedError::MissingUrl)?;

        let (width, height) = scaled_embed_size(ctx, DEFAULT_WIDTH, DEFAULT_HEIGHT);
        let amp = dom::create_element(
            "amp-twitter",
            [
                ("data-tweetid", id),
                ("width", width.to_string()),
                ("height", height.to_string()),
                ("layout", "responsive".to_string()),
            ],
        );
        dom::insert_before(node, amp.clone())?;
        amp.append(node.clone());
        dom::set_attribute(node, "placeholder", "");
        remove_provider_script(&amp, SCRIPT_SRC);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::embed::run_handlers;

    fn render_embed(html: &str) -> String {
        let config = RenderConfig::default();
        let doc = Document::parse(html).unwrap();
        let mut ctx = RenderContext::new(&config);
        let handlers: Vec<Box<dyn EmbedHandler>> = vec![Box::new(Twitter)];
        run_handlers(&doc, &handlers, &mut ctx);
        doc.serialize().unwrap()
    }

    const TWEET: &str = concat!(
        r#"<blockquote class="twitter-tweet" lang="en">"#,
        r#"<p>Along with our new <a href="https://twitter.com/hashtag/Twitterbird">#Twitterbird</a>, we keep moving.</p>"#,
        r#"&mdash; Twitter (@twitter) <a href="https://twitter.com/twitter/status/215186839791931392">June 19, 2012</a>"#,
        "</blockquote>",
        r#"<script async src="//platform.twitter.com/widgets.js" charset="utf-8"></script>"#,
    );

    #[test]
    fn test_tweet_blockquote_becomes_placeholder() {
        let html = render_embed(TWEET);
        assert!(html.contains("<amp-twitter"));
        assert!(html.contains(r#"data-tweetid="215186839791931392""#));
        assert!(html.contains(r#"width="600""#));
        assert!(html.contains(r#"height="480""#));
        assert!(html.contains(r#"layout="responsive""#));
        // Original quote survives inside the embed as its placeholder.
        assert!(html.contains("blockquote"));
        assert!(html.contains(r#"placeholder="""#));
        assert!(html.contains("we keep moving"));
        assert!(!html.contains("widgets.js"));
    }

    #[test]
    fn test_last_status_anchor_wins() {
        let html = render_embed(concat!(
            r#"<blockquote class="twitter-tweet">"#,
            r#"<a href="https://twitter.com/a/status/111">quoted</a>"#,
            r#"<a href="https://twitter.com/b/status/222">permalink</a>"#,
            "</blockquote>",
        ));
        assert!(html.contains(r#"data-tweetid="222""#));
    }

    #[test]
    fn test_statuses_path_variant() {
        let id = TWEET_ID
            .captures("https://twitter.com/twitterapi/statuses/133640144317198338")
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());
        assert_eq!(id, Some("133640144317198338"));
    }

    #[test]
    fn test_quote_without_permalink_is_left_alone() {
        let html = render_embed(concat!(
            r#"<blockquote class="twitter-tweet"><p>just text</p></blockquote>"#,
        ));
        assert!(html.contains("<blockquote"));
        assert!(html.contains("just text"));
        assert!(!html.contains("amp-twitter"));
    }
}
