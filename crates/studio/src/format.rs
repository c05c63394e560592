//! Block content rendering.
//!
//! Applies parsed global tag styles to block markup as inline `style`
//! attributes, and converts the markdown-like inline conventions block text
//! may carry (`**bold**`, `[text](url)`). Markdown conversion runs
//! unconditionally on whichever content was selected - the regression this
//! guards is raw `[text](url)` syntax leaking into rendered output whenever
//! an alternate rich-content field happened to be absent.
//!
//! Class styles are never inlined here; classes stay addressable by the
//! injected stylesheet.

use studiocss::{EmailPlatform, ParsedCss, PropertyMap, email_safe_properties};

/// Which rendering target the styles are prepared for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreviewMode {
    /// Full styling, as the browser preview shows it.
    #[default]
    Clean,
    /// Email rendering: properties pass the email-safe filter first, so the
    /// preview matches what the export produces.
    Email,
}

/// Renders block content with the given stylesheet data.
///
/// Without stylesheet data the content passes through with markdown
/// conversion only.
pub fn apply_styles(
    content: &str,
    stylesheet: Option<&ParsedCss>,
    mode: PreviewMode,
    platform: EmailPlatform,
) -> String {
    let html = markdown_to_html(content);
    match stylesheet {
        Some(parsed) => inline_global_styles(&html, parsed, mode, platform),
        None => html,
    }
}

/// Converts the supported markdown conventions to HTML tags.
pub fn markdown_to_html(text: &str) -> String {
    convert_bold(&convert_links(text))
}

/// Inserts inline `style` attributes on tags that have global styles.
fn inline_global_styles(
    html: &str,
    parsed: &ParsedCss,
    mode: PreviewMode,
    platform: EmailPlatform,
) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..=open]);
        rest = &rest[open + 1..];

        // Closing tags, comments, doctype: copied through untouched.
        if rest.starts_with('/') || rest.starts_with('!') {
            continue;
        }
        let name_len = rest
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .count();
        if name_len == 0 {
            continue;
        }
        let name = rest[..name_len].to_ascii_lowercase();
        let Some(end) = rest.find('>') else {
            continue;
        };
        let tag_body = &rest[..end];

        let Some(map) = parsed.global_styles.get(&name) else {
            continue;
        };
        // Author-written style attributes win over derived ones.
        if has_style_attribute(tag_body) {
            continue;
        }
        let map = match mode {
            PreviewMode::Email => email_safe_properties(map, platform),
            PreviewMode::Clean => map.clone(),
        };
        if map.is_empty() {
            continue;
        }

        if tag_body.ends_with('/') {
            out.push_str(tag_body[..end - 1].trim_end());
            out.push_str(&styled_attribute(&map));
            out.push_str(" />");
        } else {
            out.push_str(tag_body);
            out.push_str(&styled_attribute(&map));
            out.push('>');
        }
        rest = &rest[end + 1..];
    }

    out.push_str(rest);
    out
}

/// Whole-attribute match: `style=` preceded by whitespace. An attribute
/// merely ending in "style" (`data-style="x"`) must not suppress inlining.
fn has_style_attribute(tag_body: &str) -> bool {
    tag_body.match_indices("style=").any(|(idx, _)| {
        tag_body[..idx]
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace)
    })
}

fn styled_attribute(map: &PropertyMap) -> String {
    format!(" style=\"{}\"", map.to_inline_style())
}

/// `[label](url)` -> `<a href="url">label</a>`.
fn convert_links(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('[') {
        let Some(close_rel) = rest[open + 1..].find(']') else {
            break;
        };
        let close = open + 1 + close_rel;
        let after = &rest[close + 1..];
        if !after.starts_with('(') {
            out.push_str(&rest[..close + 1]);
            rest = &rest[close + 1..];
            continue;
        }
        let Some(paren_rel) = after.find(')') else {
            break;
        };
        let label = &rest[open + 1..close];
        let url = &after[1..paren_rel];

        out.push_str(&rest[..open]);
        out.push_str("<a href=\"");
        out.push_str(url);
        out.push_str("\">");
        out.push_str(label);
        out.push_str("</a>");
        rest = &after[paren_rel + 1..];
    }

    out.push_str(rest);
    out
}

/// `**bold**` -> `<strong>bold</strong>`. Unpaired markers pass through.
fn convert_bold(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find("**") {
        let Some(close_rel) = rest[open + 2..].find("**") else {
            break;
        };
        let inner = &rest[open + 2..open + 2 + close_rel];
        out.push_str(&rest[..open]);
        out.push_str("<strong>");
        out.push_str(inner);
        out.push_str("</strong>");
        rest = &rest[open + 2 + close_rel + 2..];
    }

    out.push_str(rest);
    out
}
