//! Preview-scoped rule emission.
//!
//! The studio injects author CSS into a live page. Injected rules must only
//! apply inside designated preview containers, so this module rewrites each
//! class rule under explicit scoped selector prefixes and rejects rules that
//! would style the page chrome itself.
//!
//! Two emissions are produced from the same input and concatenated:
//!
//! - **wrapper-scoped**: targets block wrapper elements that carry the class
//!   directly (`.content-studio-preview .studio-block.cta`, plus the
//!   unscoped `.studio-block.cta` form)
//! - **HTML-content-scoped**: targets the class when it appears inside
//!   content inserted as raw markup (`.studio-block .cta`)
//!
//! Denylist matching is exact-token: the selector must equal a blocked
//! element name or be that name immediately followed by a combinator, pseudo,
//! attribute, or class marker. A class named `.cta-section` contains the
//! substring `section` and must still be emitted.

use crate::parser::properties::{PropertyMap, parse_declarations};
use crate::parser::scanner::{scan_rules, strip_comments};

/// Bare element selectors that injected CSS must never style.
pub const SCOPE_DENYLIST: [&str; 8] = [
    "body", "html", "nav", "header", "footer", "main", "section", "*",
];

/// Properties boosted with `!important` to outrank component-authored styles
/// higher in source order.
const IMPORTANT_PROPERTIES: [&str; 7] = [
    "color",
    "background",
    "background-color",
    "border-color",
    "text-align",
    "padding",
    "margin",
];

/// Characters that may follow a denylisted token and still make the match a
/// whole-token match.
const TOKEN_BOUNDARIES: [char; 9] = [' ', '\t', '>', '+', '~', ':', '.', '[', ','];

/// Selector prefixes the scoped emissions are built from.
#[derive(Clone, Debug)]
pub struct ScopeConfig {
    /// Known preview container selectors.
    pub preview_scopes: Vec<String>,
    /// Class carried by every block wrapper element.
    pub wrapper_class: String,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            preview_scopes: vec![
                ".content-studio-preview".to_string(),
                ".content-studio-email-preview".to_string(),
            ],
            wrapper_class: ".studio-block".to_string(),
        }
    }
}

/// Returns true when the selector is a denylisted element token, exactly or
/// followed by a combinator/pseudo/attribute/class marker.
pub fn is_denylisted(selector: &str) -> bool {
    let selector = selector.trim();
    for token in SCOPE_DENYLIST {
        if let Some(rest) = selector.strip_prefix(token) {
            match rest.chars().next() {
                None => return true,
                Some(c) if TOKEN_BOUNDARIES.contains(&c) => return true,
                _ => {}
            }
        }
    }
    false
}

/// Rewrites raw author CSS into one combined scoped stylesheet text, safe to
/// inject without affecting elements outside the preview containers.
///
/// Only single-class rules are emitted; bare element rules are the content
/// formatter's concern and everything denylisted is dropped. Never fails -
/// unusable rules simply produce no output.
pub fn build_injectable_css(css: &str, config: &ScopeConfig) -> String {
    let stripped = strip_comments(css);
    let rules = scan_rules(&stripped.text);

    let wrapper = &config.wrapper_class;
    let mut wrapper_scoped = String::new();
    let mut content_scoped = String::new();

    for rule in &rules {
        let selector = rule.selector.trim();
        if is_denylisted(selector) {
            continue;
        }
        if !is_single_class(selector) {
            continue;
        }
        let properties = parse_declarations(&rule.block);
        if properties.is_empty() {
            continue;
        }
        let block = boosted_block(&properties);

        for scope in &config.preview_scopes {
            wrapper_scoped.push_str(&format!("{scope} {wrapper}{selector} {{ {block} }}\n"));
        }
        wrapper_scoped.push_str(&format!("{wrapper}{selector} {{ {block} }}\n"));
        content_scoped.push_str(&format!("{wrapper} {selector} {{ {block} }}\n"));
    }

    format!("{wrapper_scoped}{content_scoped}")
}

fn is_single_class(selector: &str) -> bool {
    matches!(
        crate::parser::selectors::classify_selector(selector),
        crate::parser::selectors::SelectorKind::Class(_)
    )
}

/// Renders a declaration block, appending ` !important` to the boosted
/// properties unless already present.
fn boosted_block(properties: &PropertyMap) -> String {
    properties
        .iter()
        .map(|(name, value)| {
            if IMPORTANT_PROPERTIES.contains(&name) && !value.contains("!important") {
                format!("{name}: {value} !important;")
            } else {
                format!("{name}: {value};")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
