//! Integration tests for the content formatter and the export boundary.

use studio::export::export_html;
use studio::format::{PreviewMode, apply_styles};
use studio::store::{MemoryStore, NewStylesheet, StylesheetStore};
use studiocss::{EmailPlatform, parse_stylesheet};

#[test]
fn test_global_styles_inlined_on_matching_tags() {
    let parsed = parse_stylesheet("p { margin-bottom: 100px; }");
    let out = apply_styles(
        "<p>Hello</p><div>plain</div>",
        Some(&parsed),
        PreviewMode::Clean,
        EmailPlatform::Generic,
    );

    assert_eq!(
        out,
        "<p style=\"margin-bottom: 100px\">Hello</p><div>plain</div>"
    );
}

#[test]
fn test_class_styles_not_inlined() {
    let parsed = parse_stylesheet(".cta-section { background: #000; color: #fff; }");
    let content = "<div class=\"cta-section\">Hi</div>";
    let out = apply_styles(content, Some(&parsed), PreviewMode::Clean, EmailPlatform::Generic);

    // The class stays addressable by the injected stylesheet.
    assert_eq!(out, content);
}

#[test]
fn test_tag_match_is_case_insensitive() {
    let parsed = parse_stylesheet("P { color: red; }");
    let out = apply_styles(
        "<P>Hi</P>",
        Some(&parsed),
        PreviewMode::Clean,
        EmailPlatform::Generic,
    );
    assert_eq!(out, "<P style=\"color: red\">Hi</P>");
}

#[test]
fn test_existing_style_attribute_wins() {
    let parsed = parse_stylesheet("p { color: red; }");
    let content = "<p style=\"color: blue\">Hi</p>";
    let out = apply_styles(content, Some(&parsed), PreviewMode::Clean, EmailPlatform::Generic);
    assert_eq!(out, content);
}

#[test]
fn test_unrelated_attribute_does_not_suppress_inlining() {
    let parsed = parse_stylesheet("p { color: red; }");
    let out = apply_styles(
        "<p data-style=\"x\">Hi</p>",
        Some(&parsed),
        PreviewMode::Clean,
        EmailPlatform::Generic,
    );
    assert_eq!(out, "<p data-style=\"x\" style=\"color: red\">Hi</p>");
}

#[test]
fn test_email_mode_filters_properties() {
    let parsed = parse_stylesheet("p { transform: rotate(5deg); color: blue; }");
    let out = apply_styles(
        "<p>Hi</p>",
        Some(&parsed),
        PreviewMode::Email,
        EmailPlatform::Generic,
    );

    assert_eq!(out, "<p style=\"color: blue\">Hi</p>");
}

#[test]
fn test_no_stylesheet_passes_through() {
    let out = apply_styles(
        "<p>Hi</p>",
        None,
        PreviewMode::Clean,
        EmailPlatform::Generic,
    );
    assert_eq!(out, "<p>Hi</p>");
}

#[test]
fn test_markdown_runs_unconditionally() {
    // With stylesheet data...
    let parsed = parse_stylesheet("p { margin: 0; }");
    let out = apply_styles(
        "[OpenAI](https://openai.com)",
        Some(&parsed),
        PreviewMode::Clean,
        EmailPlatform::Generic,
    );
    assert_eq!(out, "<a href=\"https://openai.com\">OpenAI</a>");

    // ...and without: the conversion must never be skipped.
    let out = apply_styles(
        "[OpenAI](https://openai.com)",
        None,
        PreviewMode::Email,
        EmailPlatform::Sendgrid,
    );
    assert_eq!(out, "<a href=\"https://openai.com\">OpenAI</a>");
}

#[test]
fn test_self_closing_tag() {
    let parsed = parse_stylesheet("img { max-width: 100%; }");
    let out = apply_styles(
        "<img src=\"x.png\" />",
        Some(&parsed),
        PreviewMode::Clean,
        EmailPlatform::Generic,
    );
    assert_eq!(out, "<img src=\"x.png\" style=\"max-width: 100%\" />");
}

#[tokio::test]
async fn test_export_uses_same_transform_as_preview() {
    let store = MemoryStore::new();
    let sheet = store
        .create(NewStylesheet {
            name: "Email".to_string(),
            css_content: "p {\n  transform: rotate(5deg);\n  color: blue;\n}\n#id { color: red; }\n.keep { color: green; }"
                .to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let preview = apply_styles(
        "<p>Hi</p>",
        Some(&sheet.parsed),
        PreviewMode::Email,
        EmailPlatform::Sendgrid,
    );
    let export = export_html("<p>Hi</p>", &sheet, EmailPlatform::Sendgrid);

    // The exported body carries exactly the preview's inline rendering.
    assert!(export.contains(&preview));
    // Head CSS went through the SendGrid transform.
    assert!(export.contains(".keep { color: green; }"));
    assert!(!export.contains("#id"));
    assert!(!export.contains("transform: rotate"));
}
