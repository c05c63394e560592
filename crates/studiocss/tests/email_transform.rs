//! Integration tests for the email-safe CSS transform.
//!
//! The invariants here track the two documented regression classes: property
//! name corruption (a shorter substring match breaking `text-align`) and
//! preview/export divergence (colors must survive untouched).

use studiocss::email::{EmailPlatform, email_safe_css, email_safe_properties};
use studiocss::parser::parse_declarations;

#[test]
fn test_disallowed_properties_removed() {
    let out = email_safe_css(
        "transform: rotate(5deg); color: blue;",
        EmailPlatform::Generic,
    );
    assert!(out.contains("color: blue;"));
    assert!(!out.contains("transform:"));
}

#[test]
fn test_each_disallowed_property() {
    let css = "\
        transform: scale(2);\n\
        animation: spin 2s linear;\n\
        transition: all 0.3s;\n\
        color: red;\n";
    let out = email_safe_css(css, EmailPlatform::Generic);
    assert!(!out.contains("transform:"));
    assert!(!out.contains("animation:"));
    assert!(!out.contains("transition:"));
    assert!(out.contains("color: red;"));
}

#[test]
fn test_no_property_name_corruption() {
    // The documented regression: a substring match once produced
    // `text- color: #1a1a1a;`.
    let out = email_safe_css(
        "text-align: center; color: #1a1a1a;",
        EmailPlatform::Generic,
    );
    assert!(out.contains("text-align: center;"));
    assert!(out.contains("color: #1a1a1a;"));
    assert!(!out.contains("text- "));
}

#[test]
fn test_colors_never_altered() {
    let css = ".a { color: rebeccapurple; background: rgb(26, 26, 26); border-color: #1a1a1a; }";
    let out = email_safe_css(css, EmailPlatform::Generic);
    assert!(out.contains("rebeccapurple"));
    assert!(out.contains("rgb(26, 26, 26)"));
    assert!(out.contains("#1a1a1a"));
}

#[test]
fn test_preview_scope_prefix_stripped() {
    let out = email_safe_css(
        ".content-studio-preview .cta { color: red; }",
        EmailPlatform::Generic,
    );
    assert!(out.contains(".cta { color: red; }"));
    assert!(!out.contains(".content-studio-preview"));
}

#[test]
fn test_sendgrid_strips_font_face_and_id_rules() {
    let css = "@font-face { font-family: X; src: url(y); } .a { color: red; } #id { color: red; }";
    let out = email_safe_css(css, EmailPlatform::Sendgrid);

    assert!(out.contains(".a { color: red; }"));
    assert!(!out.contains("@font-face"));
    assert!(!out.contains("#id"));
}

#[test]
fn test_sendgrid_strips_imports_and_attribute_selectors() {
    let css = "@import url(fonts.css);\n[data-x] { color: red; }\n.keep { color: blue; }";
    let out = email_safe_css(css, EmailPlatform::Sendgrid);

    assert!(!out.contains("@import"));
    assert!(!out.contains("[data-x]"));
    assert!(out.contains(".keep { color: blue; }"));
}

#[test]
fn test_sendgrid_keeps_descendant_and_compound_selectors() {
    let css = ".wrap .inner { color: red; }\ndiv.note { color: blue; }";
    let out = email_safe_css(css, EmailPlatform::Sendgrid);

    assert!(out.contains(".wrap .inner { color: red; }"));
    assert!(out.contains("div.note { color: blue; }"));
}

#[test]
fn test_property_filter_matches_text_transform() {
    let map = parse_declarations("transform: rotate(5deg); text-align: center; color: blue;");
    let safe = email_safe_properties(&map, EmailPlatform::Generic);

    assert_eq!(safe.get("transform"), None);
    assert_eq!(safe.get("text-align"), Some("center"));
    assert_eq!(safe.get("color"), Some("blue"));
}
