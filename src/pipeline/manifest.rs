//! Extension script manifest

use std::collections::BTreeMap;

use serde::Serialize;

/// The AMP extension scripts a rendered document needs, keyed by extension
/// name (e.g. `amp-youtube`) with the CDN script URL as the value.
///
/// Backed by a `BTreeMap` so iteration and serialization are stable.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ScriptManifest(BTreeMap<String, String>);

impl ScriptManifest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.0.insert(name.into(), url.into());
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, url)| (name.as_str(), url.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }

    pub(crate) fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.0.retain(|name, _| keep(name));
    }
}
