//! Rendering configuration
//!
//! `RenderConfig` carries every knob the conversion pipeline honors. All
//! fields have working defaults, so `RenderConfig::default()` is a complete
//! configuration; the `with_*` builders layer adjustments on top.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::convert::DimensionProvider;

/// Hook applied to the raw HTML string before parsing.
pub type ContentFilter = dyn Fn(String) -> String + Send + Sync;

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Width ceiling in CSS pixels for converted and embedded media.
    pub(crate) content_max_width: u32,

    /// Embed handler names to run. Empty means all built-ins.
    pub(crate) enabled_embed_handlers: Vec<String>,

    /// Free-form sanitizer switches, e.g. `add_placeholder`.
    pub(crate) sanitizer_options: HashMap<String, serde_json::Value>,

    /// Optional external source of intrinsic image dimensions, consulted
    /// when the markup and the filename carry none.
    #[serde(skip)]
    pub(crate) dimension_provider: Option<Arc<dyn DimensionProvider>>,

    /// Optional pre-parse rewrite of the raw HTML.
    #[serde(skip)]
    pub(crate) content_filter: Option<Arc<ContentFilter>>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            content_max_width: 600,
            enabled_embed_handlers: Vec::new(),
            sanitizer_options: HashMap::new(),
            dimension_provider: None,
            content_filter: None,
        }
    }
}

impl fmt::Debug for RenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderConfig")
            .field("content_max_width", &self.content_max_width)
            .field("enabled_embed_handlers", &self.enabled_embed_handlers)
            .field("sanitizer_options", &self.sanitizer_options)
            .field("dimension_provider", &self.dimension_provider.is_some())
            .field("content_filter", &self.content_filter.is_some())
            .finish()
    }
}

// ============================================================================
// Getters
// ============================================================================

impl RenderConfig {
    #[must_use]
    pub fn content_max_width(&self) -> u32 {
        self.content_max_width
    }

    #[must_use]
    pub fn enabled_embed_handlers(&self) -> &[String] {
        &self.enabled_embed_handlers
    }

    #[must_use]
    pub fn sanitizer_option(&self, name: &str) -> Option<&serde_json::Value> {
        self.sanitizer_options.get(name)
    }

    /// Whether converted iframes receive a generated placeholder child.
    #[must_use]
    pub fn add_placeholder(&self) -> bool {
        self.sanitizer_option("add_placeholder")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false)
    }

    #[must_use]
    pub fn dimension_provider(&self) -> Option<&dyn DimensionProvider> {
        self.dimension_provider.as_deref()
    }

    #[must_use]
    pub fn content_filter(&self) -> Option<&ContentFilter> {
        self.content_filter.as_deref()
    }
}

// ============================================================================
// Builders
// ============================================================================

impl RenderConfig {
    #[must_use]
    pub fn with_content_max_width(mut self, width: u32) -> Self {
        self.content_max_width = width;
        self
    }

    #[must_use]
    pub fn with_embed_handlers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enabled_embed_handlers = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_sanitizer_option(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.sanitizer_options.insert(name.into(), value);
        self
    }

    #[must_use]
    pub fn with_dimension_provider(mut self, provider: Arc<dyn DimensionProvider>) -> Self {
        self.dimension_provider = Some(provider);
        self
    }

    #[must_use]
    pub fn with_content_filter(mut self, filter: Arc<ContentFilter>) -> Self {
        self.content_filter = Some(filter);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.content_max_width(), 600);
        assert!(config.enabled_embed_handlers().is_empty());
        assert!(!config.add_placeholder());
        assert!(config.dimension_provider().is_none());
        assert!(config.content_filter().is_none());
    }

    #[test]
    fn test_builder_chain() {
        let config = RenderConfig::default()
            .with_content_max_width(720)
            .with_embed_handlers(["youtube", "twitter"])
            .with_sanitizer_option("add_placeholder", json!(true));
        assert_eq!(config.content_max_width(), 720);
        assert_eq!(config.enabled_embed_handlers(), ["youtube", "twitter"]);
        assert!(config.add_placeholder());
    }

    #[test]
    fn test_serde_round_trip_skips_callbacks() {
        let config = RenderConfig::default()
            .with_content_max_width(480)
            .with_content_filter(Arc::new(|html| html));
        let json = serde_json::to_string(&config).unwrap();
        let restored: RenderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.content_max_width(), 480);
        assert!(restored.content_filter().is_none());
    }
}
