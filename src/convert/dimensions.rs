//! Width/height inference for media elements missing explicit dimensions
//!
//! Two sources, tried in order: the `-NNNxNNN.` convention media libraries
//! bake into resized filenames, then whatever attachment metadata the host
//! environment can look up for the URL.

use std::sync::LazyLock;

use regex::Regex;

/// Matches `-640x480.jpg` style dimension suffixes, tolerating a trailing
/// query string or fragment.
static FILENAME_DIMENSIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-([0-9]{1,4})x([0-9]{1,4})\.[a-zA-Z0-9]+(?:[?#].*)?$")
        .expect("FILENAME_DIMENSIONS: hardcoded regex is valid")
});

/// Host-side lookup of stored dimensions for a media URL.
///
/// Implementations must be synchronous and cheap; if the host backs this
/// with I/O it is expected to cache, because the lookup sits on the render
/// path.
pub trait DimensionProvider: Send + Sync {
    /// Stored `(width, height)` for the URL, if known.
    fn dimensions(&self, url: &str) -> Option<(u32, u32)>;
}

/// Parse dimensions out of a resized-media filename.
pub fn dimensions_from_filename(url: &str) -> Option<(u32, u32)> {
    let caps = FILENAME_DIMENSIONS.captures(url)?;
    let width = caps.get(1)?.as_str().parse().ok()?;
    let height = caps.get(2)?.as_str().parse().ok()?;
    Some((width, height))
}

/// Full inference chain: filename convention first, then provider lookup.
pub fn infer_dimensions(
    url: &str,
    provider: Option<&dyn DimensionProvider>,
) -> Option<(u32, u32)> {
    if let Some(found) = dimensions_from_filename(url) {
        return Some(found);
    }
    let found = provider?.dimensions(url);
    if found.is_none() {
        log::debug!("no dimensions known for {url}");
    }
    found
}
