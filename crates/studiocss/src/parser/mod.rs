//! CSS parsing and the parsed stylesheet data structures.
//!
//! This module turns raw author CSS into a [`ParsedCss`]:
//!
//! - [`parse_stylesheet`]: Main entry point, infallible by design
//! - [`ParsedCss`]: Classes, global tag styles, and category labels
//! - [`CssClass`]: One class-selector rule
//! - [`PropertyMap`]: Ordered property-name/value map with last-wins semantics
//!
//! ## Submodules
//!
//! - [`scanner`]: Comment stripping and single-level rule scanning
//! - [`selectors`]: Selector classification (class, bare tag, other)
//! - [`properties`]: Declaration block parsing
//! - [`categories`]: Best-effort category inference from class names
//!
//! ## Order of operations
//!
//! Comments are stripped before any selector splitting. This matters: comment
//! text that precedes a rule must never be mistaken for part of its selector,
//! or legitimate classes get misclassified downstream.

pub mod categories;
pub mod properties;
pub(crate) mod scanner;
pub mod selectors;
pub mod stylesheet;

pub use crate::parser::categories::infer_category;
pub use crate::parser::properties::{PropertyMap, parse_declarations};
pub use crate::parser::selectors::{SelectorKind, classify_selector};
pub use crate::parser::stylesheet::{CssClass, ParsedCss};

use crate::parser::scanner::strip_comments;

/// Parses raw CSS text into a [`ParsedCss`].
///
/// Never fails: unparseable fragments are skipped rule by rule. Re-parsing
/// identical input always yields an identical result.
pub fn parse_stylesheet(source: &str) -> ParsedCss {
    let stripped = strip_comments(source);
    let rules = scanner::scan_rules(&stripped.text);

    let mut parsed = ParsedCss::default();
    for rule in rules {
        match classify_selector(&rule.selector) {
            SelectorKind::Class(name) => {
                let properties = parse_declarations(&rule.block);
                let description = stripped.description_for(rule.start);
                let category = infer_category(&name, description.as_deref());
                if let Some(category) = &category {
                    parsed.categories.insert(category.clone());
                }

                // Class names are unique within a stylesheet; a later
                // definition replaces the earlier property map.
                if let Some(existing) = parsed.classes.iter_mut().find(|c| c.name == name) {
                    existing.properties = properties;
                    if existing.description.is_none() {
                        existing.description = description;
                    }
                } else {
                    parsed.classes.push(CssClass {
                        name,
                        selector: rule.selector.trim().to_string(),
                        properties,
                        description,
                        category,
                    });
                }
            }
            SelectorKind::Tag(tag) => {
                let properties = parse_declarations(&rule.block);
                let entry = parsed.global_styles.entry(tag).or_default();
                for (name, value) in properties.iter() {
                    entry.insert(name, value);
                }
            }
            SelectorKind::Other => {
                // Neither a class nor a global tag style. The scoping and
                // email transforms work from the raw text, so nothing is
                // recorded here.
            }
        }
    }
    parsed
}
