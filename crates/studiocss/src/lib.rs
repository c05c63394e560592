//! # StudioCSS - Content Studio CSS toolkit
//!
//! The pure CSS layer of the content studio: parsing author stylesheets into a
//! structured model, deriving email-client-safe variants, and rewriting rules
//! into preview-scoped form for injection.
//!
//! Everything in this crate is a pure function of its input text. Parsing is
//! deliberately tolerant: a malformed rule is skipped, never raised, so a
//! single broken declaration cannot blank an entire preview. This crate
//! provides:
//!
//! - **Parsing**: Convert raw CSS into a structured [`ParsedCss`](parser::ParsedCss)
//! - **Email transform**: Filter declarations and blocks that email clients reject
//! - **Scoping**: Rewrite class rules so injected styles stay inside preview containers
//!
//! ## Quick Start
//!
//! ```rust
//! use studiocss::parse_stylesheet;
//!
//! let source = r#"
//!     /* ---------- CTA Section ---------- */
//!     .cta-section {
//!         background: #000;
//!         color: #fff;
//!     }
//!
//!     p {
//!         margin-bottom: 100px;
//!     }
//! "#;
//!
//! let parsed = parse_stylesheet(source);
//! assert_eq!(parsed.classes.len(), 1);
//! assert_eq!(parsed.classes[0].name, "cta-section");
//! assert!(parsed.global_styles.contains_key("p"));
//! ```
//!
//! ## Supported Input
//!
//! - Class rules: `.name { ... }` (single class, no combinators)
//! - Bare element rules: `p`, `img`, `h1` - merged into global tag styles
//! - Comments: `/* ... */`, stripped before any rule splitting
//! - Everything else (ID selectors, attribute selectors, compounds, at-rules)
//!   is consumed safely but left unclassified
//!
//! ## Not Supported
//!
//! - CSS nesting (only one level of `{}` is interpreted)
//! - Cascade/specificity resolution across rules
//!
//! ## Modules
//!
//! - [`parser`]: CSS parsing and the parsed data structures
//! - [`email`]: Email-safe CSS transformation (generic and SendGrid targets)
//! - [`scope`]: Preview-scoped rule emission for injection

pub mod email;
pub mod parser;
pub mod scope;

pub use email::{EmailPlatform, email_safe_css, email_safe_properties};
pub use parser::{CssClass, ParsedCss, PropertyMap, infer_category, parse_stylesheet};
pub use scope::{SCOPE_DENYLIST, ScopeConfig, build_injectable_css};
