//! Selector classification.
//!
//! The parser only distinguishes the two selector shapes that feed the
//! structured model: a single class (`.name`) and a bare HTML tag (`p`,
//! `img`, `h1`). Every other shape - ID selectors, attribute selectors,
//! combinators, pseudo-classes, compounds, at-rules - is classified as
//! [`SelectorKind::Other`] and left to the text-level transforms.

use nom::{
    IResult,
    bytes::complete::take_while1,
    character::complete::char,
    sequence::preceded,
};

/// How a rule's selector is classified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectorKind {
    /// A single class selector; carries the name without the leading dot.
    Class(String),
    /// A bare element selector; carries the lowercase tag name.
    Tag(String),
    /// Anything else. Not interpreted by the parser.
    Other,
}

/// Parses a CSS identifier (letters, digits, `-`, `_`).
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

fn class_selector(input: &str) -> IResult<&str, &str> {
    preceded(char('.'), parse_ident)(input)
}

/// Classifies a trimmed selector string.
pub fn classify_selector(selector: &str) -> SelectorKind {
    let selector = selector.trim();

    if let Ok((rest, name)) = class_selector(selector) {
        if rest.is_empty() && !name.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
            return SelectorKind::Class(name.to_string());
        }
        return SelectorKind::Other;
    }

    if let Ok((rest, name)) = parse_ident(selector) {
        // A bare tag is a single identifier: no combinators, no pseudo
        // suffix, nothing before or after. Tag names start with a letter.
        if rest.is_empty() && name.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return SelectorKind::Tag(name.to_ascii_lowercase());
        }
    }

    SelectorKind::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_single_class() {
        assert_eq!(
            classify_selector(".cta-section"),
            SelectorKind::Class("cta-section".to_string())
        );
    }

    #[test]
    fn classifies_bare_tag() {
        assert_eq!(classify_selector("P"), SelectorKind::Tag("p".to_string()));
        assert_eq!(classify_selector("h1"), SelectorKind::Tag("h1".to_string()));
    }

    #[test]
    fn rejects_compounds_and_combinators() {
        assert_eq!(classify_selector(".a .b"), SelectorKind::Other);
        assert_eq!(classify_selector("div.a"), SelectorKind::Other);
        assert_eq!(classify_selector(".a:hover"), SelectorKind::Other);
        assert_eq!(classify_selector("#id"), SelectorKind::Other);
        assert_eq!(classify_selector("[data-x]"), SelectorKind::Other);
        assert_eq!(classify_selector("*"), SelectorKind::Other);
        assert_eq!(classify_selector("@media screen"), SelectorKind::Other);
        assert_eq!(classify_selector("p, img"), SelectorKind::Other);
    }
}
