//! Final HTML export.
//!
//! Export and live preview must never diverge: this module calls the same
//! [`email_safe_css`] and the same [`apply_styles`] inline conversion the
//! preview path uses, for the same stylesheet and platform. That sharing is
//! a contract - duplicated transforms were the root cause of the recurring
//! preview/export mismatch this core replaces.

use crate::format::{PreviewMode, apply_styles};
use crate::store::Stylesheet;
use studiocss::{EmailPlatform, email_safe_css};

/// Renders a complete, email-ready HTML document for the given content.
pub fn export_html(content: &str, stylesheet: &Stylesheet, platform: EmailPlatform) -> String {
    let css = email_safe_css(&stylesheet.css_content, platform);
    let body = apply_styles(
        content,
        Some(&stylesheet.parsed),
        PreviewMode::Email,
        platform,
    );
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <style>\n{css}</style>\n\
         </head>\n\
         <body>\n{body}\n</body>\n\
         </html>\n"
    )
}
