//! Embedded rule tables: which tags and attributes AMP output may carry
//!
//! A point-in-time snapshot of the upstream validator rules, reduced to the
//! tags this pipeline can emit or pass through. Tags absent from these
//! tables are exactly the tags the sanitizer removes, which is why the raw
//! `img`/`video`/`audio`/`iframe` tags and the whole script/form family
//! deliberately have no row here.

use super::types::{ConstraintSeed, TagRuleSeed};

/// Snapshot marker for the embedded rule tables.
pub const SPEC_VERSION: &str = "20160301";

// ============================================================================
// Attributes allowed on every tag
// ============================================================================

pub(crate) const GLOBAL_ATTRS: &[&str] = &[
    "id",
    "class",
    "title",
    "lang",
    "dir",
    "role",
    "tabindex",
    "accesskey",
    "draggable",
    "translate",
    "hidden",
    "itemid",
    "itemprop",
    "itemref",
    "itemscope",
    "itemtype",
    // AMP placeholder/fallback markers on custom element children
    "placeholder",
    "fallback",
];

// ============================================================================
// Layout attributes spliced onto every amp-* element at registry build
// ============================================================================

pub(crate) const AMP_LAYOUT_ATTRS: &[&str] = &[
    "layout", "width", "height", "sizes", "heights", "media", "noloading",
];

pub(crate) const AMP_LAYOUTS: &[&str] = &[
    "responsive",
    "fixed",
    "fixed-height",
    "fill",
    "container",
    "flex-item",
    "nodisplay",
];

// ============================================================================
// Tags that need nothing beyond the global attributes
// ============================================================================

pub(crate) const BASIC_TAGS: &[&str] = &[
    "abbr",
    "address",
    "article",
    "aside",
    "b",
    "bdi",
    "bdo",
    "br",
    "caption",
    "cite",
    "code",
    "dd",
    "details",
    "dfn",
    "div",
    "dl",
    "dt",
    "em",
    "figcaption",
    "figure",
    "footer",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hgroup",
    "hr",
    "i",
    "kbd",
    "main",
    "mark",
    "nav",
    "p",
    "pre",
    "rp",
    "rt",
    "ruby",
    "s",
    "samp",
    "section",
    "small",
    "span",
    "strike",
    "strong",
    "sub",
    "summary",
    "sup",
    "table",
    "tbody",
    "tfoot",
    "thead",
    "time",
    "tr",
    "u",
    "ul",
    "var",
    "wbr",
];

// ============================================================================
// Tags with their own attribute lists and value constraints
// ============================================================================

pub(crate) const TAG_RULES: &[TagRuleSeed] = &[
    TagRuleSeed {
        tag: "a",
        attrs: &[
            "href", "hreflang", "media", "rel", "target", "type", "download", "name",
        ],
        extension: None,
        constraints: &[
            (
                "href",
                ConstraintSeed::UrlScheme(&["http", "https", "mailto", "tel", "sms", "ftp"]),
            ),
            ("target", ConstraintSeed::OneOf(&["_blank", "_top"])),
        ],
    },
    TagRuleSeed {
        tag: "blockquote",
        attrs: &["cite"],
        extension: None,
        constraints: &[("cite", ConstraintSeed::UrlScheme(&["http", "https"]))],
    },
    TagRuleSeed {
        tag: "q",
        attrs: &["cite"],
        extension: None,
        constraints: &[("cite", ConstraintSeed::UrlScheme(&["http", "https"]))],
    },
    TagRuleSeed {
        tag: "ins",
        attrs: &["cite", "datetime"],
        extension: None,
        constraints: &[("cite", ConstraintSeed::UrlScheme(&["http", "https"]))],
    },
    TagRuleSeed {
        tag: "del",
        attrs: &["cite", "datetime"],
        extension: None,
        constraints: &[("cite", ConstraintSeed::UrlScheme(&["http", "https"]))],
    },
    TagRuleSeed {
        tag: "ol",
        attrs: &["reversed", "start", "type"],
        extension: None,
        constraints: &[("type", ConstraintSeed::OneOf(&["1", "a", "A", "i", "I"]))],
    },
    TagRuleSeed {
        tag: "li",
        attrs: &["value"],
        extension: None,
        constraints: &[],
    },
    TagRuleSeed {
        tag: "td",
        attrs: &["colspan", "rowspan", "headers"],
        extension: None,
        constraints: &[],
    },
    TagRuleSeed {
        tag: "th",
        attrs: &["colspan", "rowspan", "headers", "scope"],
        extension: None,
        constraints: &[(
            "scope",
            ConstraintSeed::OneOf(&["row", "col", "rowgroup", "colgroup"]),
        )],
    },
    TagRuleSeed {
        tag: "col",
        attrs: &["span"],
        extension: None,
        constraints: &[],
    },
    TagRuleSeed {
        tag: "colgroup",
        attrs: &["span"],
        extension: None,
        constraints: &[],
    },
    // Kept for amp-video/amp-audio children, which pass through conversion
    TagRuleSeed {
        tag: "source",
        attrs: &["src", "type", "media"],
        extension: None,
        constraints: &[
            ("src", ConstraintSeed::Mandatory),
            ("src", ConstraintSeed::UrlScheme(&["http", "https", "data"])),
        ],
    },
    // ------------------------------------------------------------------
    // Native AMP replacements for img/video/audio/iframe
    // ------------------------------------------------------------------
    TagRuleSeed {
        tag: "amp-img",
        attrs: &["src", "srcset", "alt", "attribution", "referrerpolicy"],
        extension: None,
        constraints: &[
            ("src", ConstraintSeed::MandatoryOneOf(&["src", "srcset"])),
            ("src", ConstraintSeed::UrlScheme(&["http", "https", "data"])),
            ("sizes", ConstraintSeed::AlsoRequires(&["srcset"])),
        ],
    },
    TagRuleSeed {
        tag: "amp-anim",
        attrs: &["src", "srcset", "alt", "attribution"],
        extension: Some("amp-anim"),
        constraints: &[
            ("src", ConstraintSeed::MandatoryOneOf(&["src", "srcset"])),
            ("src", ConstraintSeed::UrlScheme(&["http", "https", "data"])),
        ],
    },
    TagRuleSeed {
        tag: "amp-video",
        attrs: &[
            "src",
            "poster",
            "autoplay",
            "controls",
            "loop",
            "muted",
            "attribution",
        ],
        extension: Some("amp-video"),
        constraints: &[
            ("src", ConstraintSeed::UrlScheme(&["https"])),
            ("poster", ConstraintSeed::UrlScheme(&["http", "https"])),
        ],
    },
    TagRuleSeed {
        tag: "amp-audio",
        attrs: &[
            "src", "autoplay", "controls", "loop", "muted", "artist", "album", "artwork",
        ],
        extension: Some("amp-audio"),
        constraints: &[("src", ConstraintSeed::UrlScheme(&["https"]))],
    },
    TagRuleSeed {
        tag: "amp-iframe",
        attrs: &[
            "src",
            "sandbox",
            "frameborder",
            "allowfullscreen",
            "allowtransparency",
            "scrolling",
            "resizable",
            "referrerpolicy",
        ],
        extension: Some("amp-iframe"),
        constraints: &[
            ("src", ConstraintSeed::Mandatory),
            ("src", ConstraintSeed::UrlScheme(&["https"])),
            ("frameborder", ConstraintSeed::OneOf(&["0", "1"])),
            (
                "allowfullscreen",
                ConstraintSeed::Alias(&["webkitallowfullscreen", "mozallowfullscreen"]),
            ),
        ],
    },
    // ------------------------------------------------------------------
    // Third-party embed components
    // ------------------------------------------------------------------
    TagRuleSeed {
        tag: "amp-youtube",
        attrs: &[],
        extension: Some("amp-youtube"),
        constraints: &[("data-videoid", ConstraintSeed::Mandatory)],
    },
    TagRuleSeed {
        tag: "amp-vimeo",
        attrs: &[],
        extension: Some("amp-vimeo"),
        constraints: &[
            ("data-videoid", ConstraintSeed::Mandatory),
            ("data-videoid", ConstraintSeed::Pattern("^[0-9]+$")),
        ],
    },
    TagRuleSeed {
        tag: "amp-twitter",
        attrs: &[],
        extension: Some("amp-twitter"),
        constraints: &[("data-tweetid", ConstraintSeed::Mandatory)],
    },
    TagRuleSeed {
        tag: "amp-instagram",
        attrs: &[],
        extension: Some("amp-instagram"),
        constraints: &[("data-shortcode", ConstraintSeed::Mandatory)],
    },
    TagRuleSeed {
        tag: "amp-facebook",
        attrs: &[],
        extension: Some("amp-facebook"),
        constraints: &[
            ("data-href", ConstraintSeed::Mandatory),
            ("data-embed-as", ConstraintSeed::OneOf(&["post", "video"])),
        ],
    },
    TagRuleSeed {
        tag: "amp-soundcloud",
        attrs: &[],
        extension: Some("amp-soundcloud"),
        constraints: &[
            ("data-trackid", ConstraintSeed::Mandatory),
            ("data-visual", ConstraintSeed::AlsoRequires(&["data-trackid"])),
        ],
    },
    TagRuleSeed {
        tag: "amp-pinterest",
        attrs: &[],
        extension: Some("amp-pinterest"),
        constraints: &[
            ("data-do", ConstraintSeed::Mandatory),
            ("data-do", ConstraintSeed::OneOf(&["embedPin", "embedBoard"])),
            ("data-url", ConstraintSeed::UrlScheme(&["http", "https"])),
        ],
    },
    TagRuleSeed {
        tag: "amp-dailymotion",
        attrs: &[],
        extension: Some("amp-dailymotion"),
        constraints: &[("data-videoid", ConstraintSeed::Mandatory)],
    },
    TagRuleSeed {
        tag: "amp-vine",
        attrs: &[],
        extension: Some("amp-vine"),
        constraints: &[("data-vineid", ConstraintSeed::Mandatory)],
    },
    TagRuleSeed {
        tag: "amp-playbuzz",
        attrs: &["src"],
        extension: Some("amp-playbuzz"),
        constraints: &[
            ("src", ConstraintSeed::MandatoryOneOf(&["src", "data-item"])),
            ("src", ConstraintSeed::UrlScheme(&["http", "https"])),
        ],
    },
];
