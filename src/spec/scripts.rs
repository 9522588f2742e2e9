//! Extension component scripts served from the AMP CDN
//!
//! Every custom element except `amp-img` needs its component script declared
//! by the page template. The pipeline only reports which scripts are needed;
//! emitting the `<script>` tags is the template layer's job.

/// Extension name to component script URL, one row per custom element the
/// pipeline can emit.
pub(crate) const EXTENSION_SCRIPTS: &[(&str, &str)] = &[
    ("amp-anim", "https://cdn.ampproject.org/v0/amp-anim-0.1.js"),
    ("amp-audio", "https://cdn.ampproject.org/v0/amp-audio-0.1.js"),
    (
        "amp-dailymotion",
        "https://cdn.ampproject.org/v0/amp-dailymotion-0.1.js",
    ),
    (
        "amp-facebook",
        "https://cdn.ampproject.org/v0/amp-facebook-0.1.js",
    ),
    ("amp-iframe", "https://cdn.ampproject.org/v0/amp-iframe-0.1.js"),
    (
        "amp-instagram",
        "https://cdn.ampproject.org/v0/amp-instagram-0.1.js",
    ),
    (
        "amp-pinterest",
        "https://cdn.ampproject.org/v0/amp-pinterest-0.1.js",
    ),
    (
        "amp-playbuzz",
        "https://cdn.ampproject.org/v0/amp-playbuzz-0.1.js",
    ),
    (
        "amp-soundcloud",
        "https://cdn.ampproject.org/v0/amp-soundcloud-0.1.js",
    ),
    (
        "amp-twitter",
        "https://cdn.ampproject.org/v0/amp-twitter-0.1.js",
    ),
    ("amp-video", "https://cdn.ampproject.org/v0/amp-video-0.1.js"),
    ("amp-vimeo", "https://cdn.ampproject.org/v0/amp-vimeo-0.1.js"),
    ("amp-vine", "https://cdn.ampproject.org/v0/amp-vine-0.1.js"),
    (
        "amp-youtube",
        "https://cdn.ampproject.org/v0/amp-youtube-0.1.js",
    ),
];
