//! Email-safe CSS transformation.
//!
//! Email clients reject or mangle a known set of CSS features. This module
//! derives an email-compatible variant of author CSS in two strengths:
//!
//! - [`EmailPlatform::Generic`]: drop `transform`/`animation`/`transition`
//!   declarations and the preview scoping prefix
//! - [`EmailPlatform::Sendgrid`]: additionally remove `@import` statements,
//!   `@font-face` blocks, ID-selector rules, and attribute-selector rules
//!
//! Both the live preview and the HTML export call these same functions; there
//! is deliberately no second implementation of this transform anywhere.
//!
//! Property matching operates on whole property names bounded by `:`.
//! A declaration like `text-align: center` must never be touched because a
//! disallowed name happens to be its substring, and color values are never
//! altered - a declaration is either removed whole or passed through
//! byte-for-byte.

use crate::parser::PropertyMap;

/// Which email pipeline the output targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmailPlatform {
    /// Conservative baseline accepted by mainstream clients.
    #[default]
    Generic,
    /// SendGrid's stricter template pipeline.
    Sendgrid,
}

/// Declaration properties that email clients do not support.
const DISALLOWED_PROPERTIES: [&str; 3] = ["transform", "animation", "transition"];

/// Scoping prefix used by the live preview; meaningless inside an email.
const PREVIEW_SCOPE_PREFIX: &str = ".content-studio-preview ";

/// Derives an email-safe variant of raw CSS text.
pub fn email_safe_css(css: &str, platform: EmailPlatform) -> String {
    let generic = strip_disallowed_declarations(css);
    match platform {
        EmailPlatform::Generic => generic,
        EmailPlatform::Sendgrid => strip_unsupported_blocks(&generic),
    }
}

/// Filters a parsed property map the same way [`email_safe_css`] filters
/// text. Used when converting global tag styles to inline attributes, so the
/// preview and the export agree.
pub fn email_safe_properties(map: &PropertyMap, _platform: EmailPlatform) -> PropertyMap {
    // The platform only affects block-level stripping; at the property level
    // the disallowed set is the same for every target.
    let mut out = map.clone();
    out.retain(|name, _| !DISALLOWED_PROPERTIES.contains(&name));
    out
}

/// Removes declarations whose property is disallowed, anchored at line start.
/// Everything retained passes through byte-for-byte.
fn strip_disallowed_declarations(css: &str) -> String {
    let mut out = String::new();
    for line in css.lines() {
        let mut rest = line;
        loop {
            let trimmed = rest.trim_start();
            match leading_disallowed(trimmed) {
                Some(after) => rest = after,
                None => break,
            }
        }
        if rest.trim().is_empty() && rest.len() != line.len() {
            // The whole line was disallowed declarations.
            continue;
        }
        out.push_str(&rest.replace(PREVIEW_SCOPE_PREFIX, ""));
        out.push('\n');
    }
    out
}

/// If `decl` starts with a disallowed property name followed by `:`, returns
/// the text after that declaration's `;` (or empty if none). Whole-token
/// match only: `transform-origin` is not `transform`.
fn leading_disallowed(decl: &str) -> Option<&str> {
    for property in DISALLOWED_PROPERTIES {
        if let Some(after_name) = decl.strip_prefix(property) {
            if let Some(value) = after_name.trim_start().strip_prefix(':') {
                return Some(match value.find(';') {
                    Some(end) => &value[end + 1..],
                    None => "",
                });
            }
        }
    }
    None
}

/// Removes whole units SendGrid rejects: `@import ...;` statements,
/// `@font-face { ... }` blocks, and rule blocks with ID or attribute
/// selectors. Retained units are copied verbatim.
fn strip_unsupported_blocks(css: &str) -> String {
    let mut out = String::new();
    let mut offset = 0;
    while offset < css.len() {
        let rest = &css[offset..];
        let Some(c) = rest.chars().next() else { break };
        if c.is_whitespace() {
            out.push(c);
            offset += c.len_utf8();
            continue;
        }
        let (unit_len, selector) = scan_unit(rest);
        let selector = selector.trim();
        let drop = selector.starts_with("@import")
            || selector.starts_with("@font-face")
            || selector.starts_with('#')
            || selector.starts_with('[');
        if !drop {
            out.push_str(&rest[..unit_len]);
        }
        offset += unit_len.max(1);
    }
    out
}

/// Measures one top-level unit: a statement ending in `;` before any brace,
/// or a rule consumed to its matching `}`. Returns the unit's byte length and
/// its selector/prelude text.
fn scan_unit(input: &str) -> (usize, &str) {
    let mut depth = 0usize;
    let mut selector_end = input.len();
    for (idx, c) in input.char_indices() {
        match c {
            '{' => {
                if depth == 0 {
                    selector_end = idx;
                }
                depth += 1;
            }
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return (idx + 1, &input[..selector_end]);
                }
            }
            ';' if depth == 0 => {
                return (idx + 1, &input[..idx]);
            }
            _ => {}
        }
    }
    (input.len(), &input[..selector_end])
}
