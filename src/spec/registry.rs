//! Process-wide registry of AMP tag and attribute rules
//!
//! Built once from the const tables on first use, then shared by reference
//! into every pipeline run. The registry is read-only after construction, so
//! concurrent renders on separate documents need no locking around it.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use super::scripts::EXTENSION_SCRIPTS;
use super::tag_rules::{AMP_LAYOUTS, AMP_LAYOUT_ATTRS, BASIC_TAGS, GLOBAL_ATTRS, TAG_RULES};
use super::types::{AttrConstraint, AttributeRule, TagRule};

static REGISTRY: LazyLock<SpecRegistry> = LazyLock::new(SpecRegistry::build);

/// Shared reference to the embedded rule registry.
pub fn registry() -> &'static SpecRegistry {
    &REGISTRY
}

/// Static lookup table over everything AMP output may contain.
pub struct SpecRegistry {
    tags: HashMap<&'static str, TagRule>,
    global_attrs: HashSet<&'static str>,
    scripts: HashMap<&'static str, &'static str>,
}

impl SpecRegistry {
    fn build() -> Self {
        let mut tags: HashMap<&'static str, TagRule> = HashMap::new();

        for &tag in BASIC_TAGS {
            tags.insert(tag, TagRule::basic(tag));
        }
        for seed in TAG_RULES {
            tags.insert(seed.tag, TagRule::from_seed(seed));
        }

        // Every custom element shares the AMP layout attribute surface
        for rule in tags.values_mut() {
            if rule.tag().starts_with("amp-") {
                rule.extend_allowed(AMP_LAYOUT_ATTRS);
                rule.push_constraint("layout", AttrConstraint::OneOf(AMP_LAYOUTS));
            }
        }

        Self {
            tags,
            global_attrs: GLOBAL_ATTRS.iter().copied().collect(),
            scripts: EXTENSION_SCRIPTS.iter().copied().collect(),
        }
    }

    /// Rule for a tag, or `None` when the tag may not appear in AMP output.
    ///
    /// Rule absence is the sanitizer's signal to remove the element; it is
    /// an expected outcome, not an error.
    pub fn tag_rule(&self, tag: &str) -> Option<&TagRule> {
        match self.tags.get(tag) {
            Some(rule) => Some(rule),
            None => self.tags.get(tag.to_ascii_lowercase().as_str()),
        }
    }

    /// Rule for one attribute of one tag, aliases resolved.
    pub fn attribute_rule(&self, tag: &str, attr: &str) -> Option<&AttributeRule> {
        self.tag_rule(tag)?.attribute_rule(attr)
    }

    /// Whether `attr` may stay on a `tag` element.
    ///
    /// Admits the global attribute set, the `data-*` and `aria-*`
    /// wildcards, and the tag's own list.
    pub fn allows_attribute(&self, tag: &str, attr: &str) -> bool {
        if self.global_attrs.contains(attr)
            || attr.starts_with("data-")
            || attr.starts_with("aria-")
        {
            return true;
        }
        self.tag_rule(tag)
            .is_some_and(|rule| rule.allows_attribute(attr))
    }

    /// Extension script a tag requires, when it requires one.
    pub fn extension_for(&self, tag: &str) -> Option<&'static str> {
        self.tag_rule(tag)?.extension()
    }

    /// Component script URL for an extension name.
    pub fn script_url(&self, extension: &str) -> Option<&'static str> {
        self.scripts.get(extension).copied()
    }

    /// Number of tags the registry knows about.
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }
}
