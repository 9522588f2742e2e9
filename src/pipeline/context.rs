//! Per-render mutable state shared across pipeline stages

use crate::config::RenderConfig;
use crate::spec::registry;

use super::manifest::ScriptManifest;

/// Threaded through the embed handlers and converters of a single render.
///
/// Collects the extension scripts the transformed document turned out to
/// need and hands out document-unique element IDs.
pub struct RenderContext<'a> {
    config: &'a RenderConfig,
    manifest: ScriptManifest,
    counter: u32,
}

impl<'a> RenderContext<'a> {
    #[must_use]
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            manifest: ScriptManifest::new(),
            counter: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        self.config
    }

    /// Record that the document needs the extension script for `name`.
    ///
    /// The URL comes from the validation registry; a name the registry
    /// does not know is logged and skipped rather than invented.
    pub fn require_extension(&mut self, name: &str) {
        match registry().script_url(name) {
            Some(url) => self.manifest.insert(name, url),
            None => log::warn!("no extension script registered for {name}"),
        }
    }

    #[must_use]
    pub fn manifest(&self) -> &ScriptManifest {
        &self.manifest
    }

    pub(crate) fn manifest_mut(&mut self) -> &mut ScriptManifest {
        &mut self.manifest
    }

    /// Next document-unique element ID under `prefix`.
    pub fn next_id(&mut self, prefix: &str) -> String {
        self.counter += 1;
        format!("{prefix}-{}", self.counter)
    }

    #[must_use]
    pub fn into_manifest(self) -> ScriptManifest {
        self.manifest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_extension_resolves_url() {
        let config = RenderConfig::default();
        let mut ctx = RenderContext::new(&config);
        ctx.require_extension("amp-twitter");
        assert_eq!(
            ctx.manifest().get("amp-twitter"),
            Some("https://cdn.ampproject.org/v0/amp-twitter-0.1.js")
        );
    }

    #[test]
    fn test_unknown_extension_is_not_recorded() {
        let config = RenderConfig::default();
        let mut ctx = RenderContext::new(&config);
        ctx.require_extension("amp-nonexistent");
        assert!(ctx.manifest().is_empty());
    }

    #[test]
    fn test_ids_are_unique_per_render() {
        let config = RenderConfig::default();
        let mut ctx = RenderContext::new(&config);
        assert_eq!(ctx.next_id("amp-playbuzz"), "amp-playbuzz-1");
        assert_eq!(ctx.next_id("amp-playbuzz"), "amp-playbuzz-2");
        assert_eq!(ctx.next_id("amp-facebook"), "amp-facebook-3");
    }
}
