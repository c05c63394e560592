//! # Studio - content studio styling runtime
//!
//! The stateful half of the content studio styling core. Where `studiocss`
//! is pure text transformation, this crate owns the moving parts:
//!
//! - [`invalidation`]: counter-based publish/subscribe bus; every successful
//!   stylesheet mutation notifies every watching consumer
//! - [`store`]: the stylesheet data model and the CRUD boundary as a trait
//! - [`watch`]: per-consumer cached reads with at-least-once refetch per
//!   invalidation
//! - [`sink`]/[`inject`]: the style-element boundary as a trait, and the
//!   one-element-per-stylesheet injection discipline (hot reload in place,
//!   no-op on identical text, remove on switch/teardown)
//! - [`format`]: block content rendering - markdown conversion plus inline
//!   application of global tag styles
//! - [`export`]: final HTML export, sharing the exact transform and inline
//!   conversion functions the preview uses

pub mod error;
pub mod export;
pub mod format;
pub mod inject;
pub mod invalidation;
pub mod log_init;
pub mod sink;
pub mod store;
pub mod watch;

pub use error::{Result, StudioError};
pub use export::export_html;
pub use format::{PreviewMode, apply_styles, markdown_to_html};
pub use inject::{StyleInjector, element_id_for};
pub use invalidation::{InvalidationBus, Subscription, global_bus};
pub use sink::{MemorySink, StyleSink};
pub use store::{
    InvalidatingStore, MemoryStore, NewStylesheet, Stylesheet, StylesheetStore, StylesheetUpdate,
};
pub use watch::StylesheetWatcher;
