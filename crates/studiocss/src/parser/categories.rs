//! Best-effort category inference for CSS classes.
//!
//! Categories group classes in the studio's class picker. The rules here are
//! a naming convention, not a contract: a substring table over the class name
//! first, then the description. Pure function of its inputs.

const CATEGORY_TABLE: &[(&str, &str)] = &[
    ("header", "header"),
    ("hero", "header"),
    ("cta", "cta"),
    ("button", "cta"),
    ("footer", "footer"),
    ("title", "heading"),
    ("heading", "heading"),
    ("body", "text"),
    ("text", "text"),
    ("paragraph", "text"),
    ("image", "media"),
    ("media", "media"),
    ("photo", "media"),
];

/// Infers a category label from a class name and optional description.
///
/// First matching substring wins; the name is consulted before the
/// description. Returns `None` when nothing matches.
pub fn infer_category(name: &str, description: Option<&str>) -> Option<String> {
    let name = name.to_ascii_lowercase();
    for (needle, category) in CATEGORY_TABLE {
        if name.contains(needle) {
            return Some((*category).to_string());
        }
    }
    if let Some(description) = description {
        let description = description.to_ascii_lowercase();
        for (needle, category) in CATEGORY_TABLE {
            if description.contains(needle) {
                return Some((*category).to_string());
            }
        }
    }
    None
}
