//! Content studio styling core.
//!
//! Composes the two layers of the studio's styling pipeline:
//!
//! - [`studiocss`]: pure CSS parsing, email-safe transformation, and
//!   preview-scoped rule emission
//! - [`studio`]: the runtime - stylesheet store, invalidation bus, cached
//!   watchers, and the style-element injection discipline
//!
//! and adds [`PreviewSession`], the end-to-end wiring: author saves CSS →
//! store fires the invalidation bus → watcher refetches → injector hot
//! reloads the scoped style element → block content re-renders from the
//! fresh parse.

pub mod error;
pub mod preview;

pub use error::Result;
pub use preview::PreviewSession;

pub use studio::{
    InvalidatingStore, InvalidationBus, MemorySink, MemoryStore, NewStylesheet, PreviewMode,
    StudioError, StyleInjector, StyleSink, Stylesheet, StylesheetStore, StylesheetUpdate,
    StylesheetWatcher, apply_styles, export_html, global_bus,
};
pub use studiocss::{
    CssClass, EmailPlatform, ParsedCss, PropertyMap, ScopeConfig, build_injectable_css,
    email_safe_css, parse_stylesheet,
};
