//! Rule types backing the static AMP tag/attribute registry
//!
//! Seed types describe rules as `const` data in `tag_rules.rs`; the built
//! types carry compiled patterns and hash lookups and live inside the
//! process-wide registry. Constraint evaluation is pure: predicates read an
//! attribute's value plus the presence of the element's other attributes and
//! never touch the tree.

use std::collections::{HashMap, HashSet};

use regex::Regex;
use url::Url;

/// Extract the scheme of an absolute URL, `None` for relative references.
///
/// Parsing follows the WHATWG rules, so control characters and embedded
/// tabs/newlines are stripped before the scheme is read. That matters for
/// the sanitizer: `java\tscript:` obfuscation still resolves to a
/// `javascript` scheme here.
pub(crate) fn url_scheme(value: &str) -> Option<String> {
    Url::parse(value).ok().map(|url| url.scheme().to_string())
}

// ============================================================================
// Seed data (const-friendly, declared in tag_rules.rs)
// ============================================================================

/// Constraint on one attribute, as written in the const rule tables.
pub(crate) enum ConstraintSeed {
    /// Value must be one of a fixed set of strings
    OneOf(&'static [&'static str]),
    /// Value must match a regular expression
    Pattern(&'static str),
    /// Absolute URL values must use one of the listed schemes
    UrlScheme(&'static [&'static str]),
    /// The attribute must be present on the element
    Mandatory,
    /// At least one of the listed attributes must be present
    MandatoryOneOf(&'static [&'static str]),
    /// The attribute is only meaningful when all listed attributes exist
    AlsoRequires(&'static [&'static str]),
    /// Alternate spellings accepted and normalized to this attribute
    Alias(&'static [&'static str]),
}

/// One tag's rule row in the const tables.
pub(crate) struct TagRuleSeed {
    pub tag: &'static str,
    /// Tag-specific attributes allowed beyond the global set
    pub attrs: &'static [&'static str],
    /// Extension script this tag requires in the output manifest
    pub extension: Option<&'static str>,
    /// Attribute constraints; an attribute may appear more than once
    pub constraints: &'static [(&'static str, ConstraintSeed)],
}

// ============================================================================
// Built rules
// ============================================================================

/// A single evaluable constraint on an attribute value.
#[derive(Debug)]
pub enum AttrConstraint {
    /// Any string value is acceptable
    Free,
    /// Value must be one of a fixed set
    OneOf(&'static [&'static str]),
    /// Value must match the compiled pattern
    Pattern(Regex),
    /// Absolute URL values must use one of the listed schemes
    UrlScheme(&'static [&'static str]),
    /// Attribute must be present on the element
    Mandatory,
    /// At least one of the listed attributes must be present
    MandatoryOneOf(&'static [&'static str]),
    /// Only valid while all listed attributes are also present
    AlsoRequires(&'static [&'static str]),
    /// Alternate spellings for this attribute
    Alias(&'static [&'static str]),
}

impl AttrConstraint {
    fn from_seed(seed: &ConstraintSeed) -> Self {
        match seed {
            ConstraintSeed::OneOf(values) => Self::OneOf(values),
            ConstraintSeed::Pattern(pattern) => Self::Pattern(
                Regex::new(pattern).expect("registry pattern: hardcoded regex is valid"),
            ),
            ConstraintSeed::UrlScheme(schemes) => Self::UrlScheme(schemes),
            ConstraintSeed::Mandatory => Self::Mandatory,
            ConstraintSeed::MandatoryOneOf(names) => Self::MandatoryOneOf(names),
            ConstraintSeed::AlsoRequires(names) => Self::AlsoRequires(names),
            ConstraintSeed::Alias(names) => Self::Alias(names),
        }
    }

    /// Evaluate this constraint against an attribute value.
    ///
    /// `has_attr` reports whether the element carries some other attribute;
    /// presence-shaped constraints (`Mandatory`, `MandatoryOneOf`) always
    /// pass here because the attribute under evaluation evidently exists.
    /// They are enforced element-wide by [`TagRule::unsatisfied_requirement`].
    pub fn permits<F: Fn(&str) -> bool>(&self, value: &str, has_attr: F) -> bool {
        match self {
            Self::Free | Self::Mandatory | Self::MandatoryOneOf(_) | Self::Alias(_) => true,
            Self::OneOf(values) => values.contains(&value),
            Self::Pattern(re) => re.is_match(value),
            Self::UrlScheme(schemes) => match url_scheme(value) {
                Some(scheme) => schemes.contains(&scheme.as_str()),
                // Relative references carry no scheme to restrict
                None => true,
            },
            Self::AlsoRequires(names) => names.iter().all(|name| has_attr(name)),
        }
    }
}

/// Everything known about one attribute of one tag.
#[derive(Debug)]
pub struct AttributeRule {
    name: &'static str,
    constraints: Vec<AttrConstraint>,
}

impl AttributeRule {
    fn free(name: &'static str) -> Self {
        Self {
            name,
            constraints: vec![AttrConstraint::Free],
        }
    }

    /// Canonical attribute name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All constraints attached to this attribute.
    pub fn constraints(&self) -> &[AttrConstraint] {
        &self.constraints
    }

    /// True when the value satisfies every constraint.
    pub fn permits<F: Fn(&str) -> bool + Copy>(&self, value: &str, has_attr: F) -> bool {
        self.constraints.iter().all(|c| c.permits(value, has_attr))
    }
}

/// The full rule set for one tag that may appear in AMP output.
#[derive(Debug)]
pub struct TagRule {
    tag: &'static str,
    allowed: HashSet<&'static str>,
    extension: Option<&'static str>,
    attrs: HashMap<&'static str, AttributeRule>,
    aliases: HashMap<&'static str, &'static str>,
}

impl TagRule {
    pub(crate) fn basic(tag: &'static str) -> Self {
        Self {
            tag,
            allowed: HashSet::new(),
            extension: None,
            attrs: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    pub(crate) fn from_seed(seed: &'static TagRuleSeed) -> Self {
        let mut rule = Self {
            tag: seed.tag,
            allowed: seed.attrs.iter().copied().collect(),
            extension: seed.extension,
            attrs: seed
                .attrs
                .iter()
                .map(|&name| (name, AttributeRule::free(name)))
                .collect(),
            aliases: HashMap::new(),
        };
        for (name, constraint) in seed.constraints {
            rule.push_constraint(name, AttrConstraint::from_seed(constraint));
        }
        rule
    }

    pub(crate) fn push_constraint(&mut self, name: &'static str, constraint: AttrConstraint) {
        if let AttrConstraint::Alias(alternates) = &constraint {
            for &alt in *alternates {
                self.aliases.insert(alt, name);
            }
        }
        self.allowed.insert(name);
        self.attrs
            .entry(name)
            .or_insert_with(|| Self::strip_default_free(name))
            .constraints
            .push(constraint);
    }

    // A constrained attribute should not also carry the Free placeholder.
    fn strip_default_free(name: &'static str) -> AttributeRule {
        AttributeRule {
            name,
            constraints: Vec::new(),
        }
    }

    pub(crate) fn extend_allowed(&mut self, names: &'static [&'static str]) {
        for &name in names {
            self.allowed.insert(name);
            self.attrs
                .entry(name)
                .or_insert_with(|| AttributeRule::free(name));
        }
    }

    /// Lowercase tag name this rule covers.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Extension script required when this tag appears in the output.
    pub fn extension(&self) -> Option<&'static str> {
        self.extension
    }

    /// Whether this tag admits the attribute by name, aliases included.
    ///
    /// Global attributes are handled one level up by the registry; this
    /// only covers the tag-specific list.
    pub fn allows_attribute(&self, name: &str) -> bool {
        self.allowed.contains(name) || self.aliases.contains_key(name)
    }

    /// Rule for one attribute, resolving alternate spellings.
    pub fn attribute_rule(&self, name: &str) -> Option<&AttributeRule> {
        let canonical = self.aliases.get(name).copied().unwrap_or(name);
        self.attrs.get(canonical)
    }

    /// First unmet presence requirement on an element, if any.
    ///
    /// Reported for diagnostics; the sanitizer strips invalid attribute
    /// values but does not delete elements over missing attributes.
    pub fn unsatisfied_requirement<F: Fn(&str) -> bool + Copy>(
        &self,
        has_attr: F,
    ) -> Option<String> {
        for rule in self.attrs.values() {
            for constraint in &rule.constraints {
                match constraint {
                    AttrConstraint::Mandatory if !has_attr(rule.name) => {
                        return Some(format!("missing mandatory attribute \"{}\"", rule.name));
                    }
                    AttrConstraint::MandatoryOneOf(names)
                        if !names.iter().any(|name| has_attr(name)) =>
                    {
                        return Some(format!(
                            "missing all of the alternatives {}",
                            names.join(", ")
                        ));
                    }
                    _ => {}
                }
            }
        }
        None
    }
}
