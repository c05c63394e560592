//! Parsed stylesheet data structures.

use std::collections::{BTreeMap, BTreeSet};

use crate::parser::properties::PropertyMap;

/// One class-selector rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CssClass {
    /// Class name without the leading dot.
    pub name: String,
    /// The selector as written (`.cta-section`).
    pub selector: String,
    /// Ordered declarations, last value wins per property.
    pub properties: PropertyMap,
    /// Text of the comment immediately preceding the rule, if any.
    pub description: Option<String>,
    /// Best-effort category inferred from the name/description.
    pub category: Option<String>,
}

/// The structured model derived from raw CSS text.
///
/// Derived and non-authoritative: recomputed whenever the raw text changes,
/// never mutated in place. Parsing the same text twice yields an equal value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedCss {
    /// Class rules in source order; names are unique.
    pub classes: Vec<CssClass>,
    /// Bare element styles keyed by lowercase tag name, merged across rules.
    pub global_styles: BTreeMap<String, PropertyMap>,
    /// Category labels present across the classes.
    pub categories: BTreeSet<String>,
}

impl ParsedCss {
    /// Looks up a class by name.
    pub fn class(&self, name: &str) -> Option<&CssClass> {
        self.classes.iter().find(|c| c.name == name)
    }
}
