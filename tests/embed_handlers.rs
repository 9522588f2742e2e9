use amp_content::{render, RenderConfig};
use anyhow::Result;

#[test]
fn test_youtube_embed_through_pipeline() -> Result<()> {
    let config = RenderConfig::default();
    let content = render(
        r#"<p>Watch this:</p><iframe width="560" height="315" src="https://www.youtube.com/embed/dQw4w9WgXcQ" frameborder="0" allowfullscreen></iframe>"#,
        &config,
    )?;

    assert!(content.amp_html.contains("<amp-youtube"));
    assert!(content.amp_html.contains(r#"data-videoid="dQw4w9WgXcQ""#));
    // The placeholder link must survive sanitization inside the embed.
    assert!(content.amp_html.contains(r#"href="https://www.youtube.com/watch?v=dQw4w9WgXcQ""#));
    assert!(content.amp_html.contains(r#"placeholder="""#));
    assert_eq!(
        content.scripts.get("amp-youtube").map(String::as_str),
        Some("https://cdn.ampproject.org/v0/amp-youtube-0.1.js")
    );
    Ok(())
}

#[test]
fn test_malformed_youtube_url_degrades_to_fallback_anchor() -> Result<()> {
    let config = RenderConfig::default();
    let content = render(
        r#"<iframe src="https://www.youtube.com/playlist?list=PL0INsTfn"></iframe>"#,
        &config,
    )?;

    assert_eq!(
        content.amp_html,
        r#"<a class="amp-wp-embed-fallback" href="https://www.youtube.com/playlist?list=PL0INsTfn">https://www.youtube.com/playlist?list=PL0INsTfn</a>"#
    );
    assert!(content.scripts.is_empty());
    Ok(())
}

#[test]
fn test_twitter_blockquote_with_script_sibling() -> Result<()> {
    let config = RenderConfig::default();
    let content = render(
        concat!(
            r#"<blockquote class="twitter-tweet"><p>Hello world</p>"#,
            r#"<a href="https://twitter.com/jack/status/20">March 21, 2006</a></blockquote>"#,
            r#"<script async src="//platform.twitter.com/widgets.js" charset="utf-8"></script>"#,
        ),
        &config,
    )?;

    assert!(content.amp_html.contains("<amp-twitter"));
    assert!(content.amp_html.contains(r#"data-tweetid="20""#));
    assert!(content.amp_html.contains("Hello world"));
    assert!(content.amp_html.contains(r#"placeholder="""#));
    assert!(!content.amp_html.contains("widgets.js"));
    assert!(!content.amp_html.contains("<script"));
    assert!(content.scripts.contains_key("amp-twitter"));
    Ok(())
}

#[test]
fn test_instagram_blockquote_with_wrapped_script() -> Result<()> {
    let config = RenderConfig::default();
    let content = render(
        concat!(
            r#"<blockquote class="instagram-media" data-instgrm-version="7">"#,
            r#"<a href="https://www.instagram.com/p/fA9uwTtkSN/">View photo</a></blockquote>"#,
            r#"<p><script async defer src="//platform.instagram.com/en_US/embeds.js"></script></p>"#,
        ),
        &config,
    )?;

    assert!(content.amp_html.contains("<amp-instagram"));
    assert!(content.amp_html.contains(r#"data-shortcode="fA9uwTtkSN""#));
    assert!(!content.amp_html.contains("embeds.js"));
    assert!(!content.amp_html.contains("<blockquote"));
    assert!(content.scripts.contains_key("amp-instagram"));
    Ok(())
}

#[test]
fn test_facebook_video_div() -> Result<()> {
    let config = RenderConfig::default();
    let content = render(
        r#"<div class="fb-video" data-href="https://www.facebook.com/facebook/videos/10153231379946729/" data-width="500"></div>"#,
        &config,
    )?;

    assert!(content.amp_html.contains("<amp-facebook"));
    assert!(content.amp_html.contains(r#"data-embed-as="video""#));
    assert!(content
        .amp_html
        .contains(r#"data-href="https://www.facebook.com/facebook/videos/10153231379946729/""#));
    assert!(content.scripts.contains_key("amp-facebook"));
    Ok(())
}

#[test]
fn test_soundcloud_player_iframe() -> Result<()> {
    let config = RenderConfig::default();
    let content = render(
        concat!(
            r#"<iframe width="100%" height="166" scrolling="no" frameborder="no" "#,
            r#"src="https://w.soundcloud.com/player/?url=https%3A//api.soundcloud.com/tracks/89&amp;visual=true"></iframe>"#,
        ),
        &config,
    )?;

    assert!(content.amp_html.contains("<amp-soundcloud"));
    assert!(content.amp_html.contains(r#"data-trackid="89""#));
    assert!(content.amp_html.contains(r#"data-visual="true""#));
    assert!(content.amp_html.contains(r#"layout="fixed-height""#));
    assert!(content.amp_html.contains(r#"height="200""#));
    assert!(content.scripts.contains_key("amp-soundcloud"));
    Ok(())
}

#[test]
fn test_pinterest_pin_anchor() -> Result<()> {
    let config = RenderConfig::default();
    let content = render(
        concat!(
            r#"<a data-pin-do="embedPin" href="https://www.pinterest.com/pin/99360735500167749/"></a>"#,
            r#"<script async defer src="//assets.pinterest.com/js/pinit.js"></script>"#,
        ),
        &config,
    )?;

    assert!(content.amp_html.contains("<amp-pinterest"));
    assert!(content.amp_html.contains(r#"data-do="embedPin""#));
    assert!(!content.amp_html.contains("pinit.js"));
    assert!(content.scripts.contains_key("amp-pinterest"));
    Ok(())
}

#[test]
fn test_dailymotion_and_vine_iframes() -> Result<()> {
    let config = RenderConfig::default();
    let content = render(
        concat!(
            r#"<iframe src="//www.dailymotion.com/embed/video/x2m8jpp"></iframe>"#,
            r#"<iframe src="https://vine.co/v/bjHh0zHdgZT/embed/simple"></iframe>"#,
        ),
        &config,
    )?;

    assert!(content.amp_html.contains(r#"data-videoid="x2m8jpp""#));
    assert!(content.amp_html.contains(r#"data-vineid="bjHh0zHdgZT""#));
    let names: Vec<&str> = content.scripts.keys().map(String::as_str).collect();
    assert_eq!(names, ["amp-dailymotion", "amp-vine"]);
    Ok(())
}

#[test]
fn test_playbuzz_ids_are_unique() -> Result<()> {
    let config = RenderConfig::default();
    let content = render(
        concat!(
            r#"<div class="pb_feed" data-item="first-item"></div>"#,
            r#"<div class="pb_feed" data-item="second-item"></div>"#,
        ),
        &config,
    )?;

    assert!(content.amp_html.contains(r#"id="amp-playbuzz-1""#));
    assert!(content.amp_html.contains(r#"id="amp-playbuzz-2""#));
    assert!(content.scripts.contains_key("amp-playbuzz"));
    Ok(())
}

#[test]
fn test_handler_selection_disables_other_providers() -> Result<()> {
    let config = RenderConfig::default().with_embed_handlers(["youtube"]);
    let content = render(
        concat!(
            r#"<iframe src="https://www.youtube.com/embed/dQw4w9WgXcQ"></iframe>"#,
            r#"<iframe src="https://player.vimeo.com/video/76979871"></iframe>"#,
        ),
        &config,
    )?;

    assert!(content.amp_html.contains("<amp-youtube"));
    // With its handler disabled, the vimeo iframe falls through to the
    // generic iframe converter instead of becoming an amp-vimeo.
    assert!(!content.amp_html.contains("amp-vimeo"));
    assert!(content.amp_html.contains("<amp-iframe"));
    assert!(content.amp_html.contains(r#"src="https://player.vimeo.com/video/76979871""#));
    let names: Vec<&str> = content.scripts.keys().map(String::as_str).collect();
    assert_eq!(names, ["amp-iframe", "amp-youtube"]);
    Ok(())
}
