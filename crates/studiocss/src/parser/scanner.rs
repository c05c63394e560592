//! Comment stripping and single-level rule scanning.
//!
//! The scanner is the first stage of every text-level operation in this crate
//! (parsing, scoping). It works in two passes:
//!
//! 1. [`strip_comments`] removes `/* ... */` comments, remembering each
//!    comment's text and its position in the stripped output so a comment
//!    directly preceding a rule can become that rule's description.
//! 2. [`scan_rules`] splits the stripped text into `(selector, block)` pairs
//!    using a brace-matching scan. Only one level of nesting is interpreted;
//!    a block containing nested braces (`@media { ... }`) is consumed whole
//!    so the scan never desynchronizes.
//!
//! Stripping comments before rule splitting is load-bearing: comment text in
//! front of a selector must not leak into the selector, or a class like
//! `.cta-section` preceded by a `/* Section */` banner would be mistaken for
//! a bare `section` rule downstream.

/// A comment removed from the source, with its offset in the stripped text.
#[derive(Clone, Debug)]
pub(crate) struct Comment {
    pub text: String,
    /// Byte offset in the stripped output where the comment used to sit.
    pub offset: usize,
}

/// Source text with comments removed, plus the removed comments.
#[derive(Clone, Debug)]
pub(crate) struct StrippedSource {
    pub text: String,
    pub comments: Vec<Comment>,
}

impl StrippedSource {
    /// Returns the text of the comment immediately preceding `rule_start`
    /// (only whitespace between the comment and the rule), if any.
    pub fn description_for(&self, rule_start: usize) -> Option<String> {
        self.comments
            .iter()
            .rev()
            .find(|c| {
                c.offset <= rule_start
                    && self.text[c.offset..rule_start]
                        .chars()
                        .all(char::is_whitespace)
            })
            .map(|c| c.text.clone())
            .filter(|t| !t.is_empty())
    }
}

/// Removes all `/* ... */` comments, recording their text and positions.
///
/// An unterminated comment runs to the end of input, matching browser
/// error-recovery behavior.
pub(crate) fn strip_comments(source: &str) -> StrippedSource {
    let mut text = String::with_capacity(source.len());
    let mut comments = Vec::new();
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '/' && chars.peek() == Some(&'*') {
            chars.next();
            let mut body = String::new();
            while let Some(inner) = chars.next() {
                if inner == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    break;
                }
                body.push(inner);
            }
            comments.push(Comment {
                text: clean_comment(&body),
                offset: text.len(),
            });
            continue;
        }
        text.push(c);
    }

    StrippedSource { text, comments }
}

/// Trims decoration (`-`, `*`, `=`) and whitespace from comment text, so a
/// banner like `/* ---- CTA Section ---- */` yields `CTA Section`.
fn clean_comment(body: &str) -> String {
    body.trim()
        .trim_matches(|c: char| c == '-' || c == '*' || c == '=' || c.is_whitespace())
        .to_string()
}

/// One `(selector, block)` pair from the scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RawRule {
    pub selector: String,
    /// Text between the rule's outermost braces, nested braces included.
    pub block: String,
    /// Byte offset of the selector's first non-whitespace character.
    pub start: usize,
}

/// Splits comment-stripped CSS into raw rules.
///
/// Selector text is accumulated up to the next `{`, then the block is
/// consumed to the matching `}` with depth counting. A top-level `;` before
/// any `{` terminates an at-statement (`@import ...;`), which produces no
/// rule. Stray closing braces are skipped.
pub(crate) fn scan_rules(text: &str) -> Vec<RawRule> {
    let mut rules = Vec::new();
    let mut selector = String::new();
    let mut selector_start = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        match c {
            '{' => {
                let mut block = String::new();
                let mut depth = 1usize;
                for (_, inner) in chars.by_ref() {
                    match inner {
                        '{' => depth += 1,
                        '}' => {
                            depth -= 1;
                            if depth == 0 {
                                break;
                            }
                        }
                        _ => {}
                    }
                    if depth > 0 {
                        block.push(inner);
                    }
                }
                if let Some(start) = selector_start {
                    rules.push(RawRule {
                        selector: selector.trim().to_string(),
                        block,
                        start,
                    });
                }
                selector.clear();
                selector_start = None;
            }
            ';' => {
                // At-statement like `@import url(x);` - not a rule.
                selector.clear();
                selector_start = None;
            }
            '}' => {
                selector.clear();
                selector_start = None;
            }
            _ => {
                if selector_start.is_none() && !c.is_whitespace() {
                    selector_start = Some(idx);
                }
                selector.push(c);
            }
        }
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_block_comment() {
        let stripped = strip_comments("a /* gone */ b");
        assert_eq!(stripped.text, "a  b");
        assert_eq!(stripped.comments.len(), 1);
        assert_eq!(stripped.comments[0].text, "gone");
    }

    #[test]
    fn unterminated_comment_runs_to_end() {
        let stripped = strip_comments(".a { color: red; } /* trailing");
        assert_eq!(stripped.text, ".a { color: red; } ");
    }

    #[test]
    fn banner_comment_cleaned() {
        let stripped = strip_comments("/* ---------- CTA Section ---------- */");
        assert_eq!(stripped.comments[0].text, "CTA Section");
    }

    #[test]
    fn scans_selector_and_block() {
        let rules = scan_rules(".a { color: red; }");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].selector, ".a");
        assert_eq!(rules[0].block.trim(), "color: red;");
    }

    #[test]
    fn nested_block_consumed_whole() {
        let rules = scan_rules("@media screen { .a { color: red; } } .b { margin: 0; }");
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].selector, "@media screen");
        assert!(rules[0].block.contains(".a { color: red; }"));
        assert_eq!(rules[1].selector, ".b");
    }

    #[test]
    fn at_statement_is_not_a_rule() {
        let rules = scan_rules("@import url(x.css); .a { color: red; }");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].selector, ".a");
    }

    #[test]
    fn description_requires_adjacency() {
        let stripped = strip_comments("/* CTA */\n.cta { color: red; }\n\ntext\n/* far */\n");
        let rules = scan_rules(&stripped.text);
        assert_eq!(stripped.description_for(rules[0].start), Some("CTA".into()));
    }

    #[test]
    fn stray_closing_brace_skipped() {
        let rules = scan_rules("} .a { color: red; }");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].selector, ".a");
    }
}
