//! Static AMP validation rules: allowed tags, attributes, and scripts
//!
//! The registry is an embedded, versioned snapshot of the upstream AMP
//! validator rules. It never changes at runtime; callers look rules up, they
//! never register new ones.

mod registry;
mod scripts;
mod tag_rules;
mod types;

pub use registry::{registry, SpecRegistry};
pub use tag_rules::SPEC_VERSION;
pub use types::{AttrConstraint, AttributeRule, TagRule};

pub(crate) use types::url_scheme;
