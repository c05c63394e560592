//! Style injection: one managed element per active stylesheet.
//!
//! The injector enforces the update discipline that keeps previews
//! flicker-free:
//!
//! - at most one style element per stylesheet id is live at a time
//! - hot reload updates the element text in place, never recreates it
//! - a byte-identical reload is a no-op (zero sink calls)
//! - switching stylesheets removes the old element first
//! - if an in-place update fails, fall back to remove-then-recreate rather
//!   than leaving stale CSS live
//! - teardown (drop) removes whatever is still owned

use crate::error::Result;
use crate::sink::StyleSink;
use log::{debug, warn};
use studiocss::{ScopeConfig, build_injectable_css};

/// Deterministic element id for a stylesheet, so the injector can find its
/// own prior element without central bookkeeping.
pub fn element_id_for(stylesheet_id: &str) -> String {
    format!("content-studio-style-{stylesheet_id}")
}

#[derive(Debug)]
struct InjectedRecord {
    stylesheet_id: String,
    element_id: String,
    /// Last raw CSS applied, for change detection.
    last_css: String,
}

/// Owns the single live style element for the active stylesheet.
pub struct StyleInjector<S: StyleSink> {
    sink: S,
    scope: ScopeConfig,
    active: Option<InjectedRecord>,
}

impl<S: StyleSink> StyleInjector<S> {
    pub fn new(sink: S) -> Self {
        Self::with_scope(sink, ScopeConfig::default())
    }

    pub fn with_scope(sink: S, scope: ScopeConfig) -> Self {
        Self {
            sink,
            scope,
            active: None,
        }
    }

    /// Id of the currently injected stylesheet, if any.
    pub fn active_stylesheet(&self) -> Option<&str> {
        self.active.as_ref().map(|r| r.stylesheet_id.as_str())
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Makes `stylesheet_id` the active stylesheet with the given raw CSS.
    ///
    /// Re-activating the same id with byte-identical text is a no-op.
    pub fn activate(&mut self, stylesheet_id: &str, raw_css: &str) -> Result<()> {
        match &self.active {
            Some(record)
                if record.stylesheet_id == stylesheet_id && record.last_css == raw_css =>
            {
                debug!("stylesheet {stylesheet_id} unchanged, skipping injection");
                return Ok(());
            }
            Some(record) if record.stylesheet_id != stylesheet_id => {
                // Switching stylesheets: drop the old element first.
                if let Some(old) = self.active.take() {
                    if let Err(err) = self.sink.remove(&old.element_id) {
                        warn!("failed to remove style element {}: {err}", old.element_id);
                    }
                }
            }
            _ => {}
        }

        let element_id = element_id_for(stylesheet_id);
        let css = build_injectable_css(raw_css, &self.scope);

        if let Err(err) = self.sink.upsert(&element_id, &css) {
            // Stale CSS must not stay live; recreate the element instead.
            // Element state is unknown from here on, so forget the record:
            // a retry after the sink recovers must re-inject, not match the
            // unchanged-text check above.
            warn!("in-place update of {element_id} failed ({err}), recreating");
            self.active = None;
            self.sink.remove(&element_id)?;
            self.sink.upsert(&element_id, &css)?;
        }
        debug!("injected stylesheet {stylesheet_id} as {element_id}");

        self.active = Some(InjectedRecord {
            stylesheet_id: stylesheet_id.to_string(),
            element_id,
            last_css: raw_css.to_string(),
        });
        Ok(())
    }

    /// Removes the live element, if any.
    pub fn deactivate(&mut self) {
        if let Some(record) = self.active.take() {
            if let Err(err) = self.sink.remove(&record.element_id) {
                warn!("failed to remove style element {}: {err}", record.element_id);
            }
        }
    }
}

impl<S: StyleSink> Drop for StyleInjector<S> {
    fn drop(&mut self) {
        self.deactivate();
    }
}
