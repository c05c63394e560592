//! Live preview orchestration.
//!
//! A [`PreviewSession`] is what a preview surface owns: one stylesheet
//! watcher, one style injector, and the rendering mode. It keeps the
//! injected style element and the rendered blocks in lockstep with the
//! store - selecting, refreshing, and tearing down follow the
//! one-element-per-stylesheet discipline, and injection failures degrade to
//! an unstyled preview instead of propagating.

use log::error;
use std::sync::Arc;
use studio::{
    InvalidationBus, PreviewMode, StyleInjector, StyleSink, Stylesheet, StylesheetStore,
    StylesheetWatcher, apply_styles,
};
use studiocss::{EmailPlatform, ScopeConfig};

pub struct PreviewSession<S: StyleSink> {
    store: Arc<dyn StylesheetStore>,
    bus: InvalidationBus,
    watcher: Option<StylesheetWatcher>,
    injector: StyleInjector<S>,
    pub mode: PreviewMode,
    pub platform: EmailPlatform,
}

impl<S: StyleSink> PreviewSession<S> {
    pub fn new(store: Arc<dyn StylesheetStore>, bus: &InvalidationBus, sink: S) -> Self {
        Self::with_scope(store, bus, sink, ScopeConfig::default())
    }

    pub fn with_scope(
        store: Arc<dyn StylesheetStore>,
        bus: &InvalidationBus,
        sink: S,
        scope: ScopeConfig,
    ) -> Self {
        Self {
            store,
            bus: bus.clone(),
            watcher: None,
            injector: StyleInjector::with_scope(sink, scope),
            mode: PreviewMode::Clean,
            platform: EmailPlatform::Generic,
        }
    }

    /// The currently cached stylesheet, if one is selected and fetched.
    pub fn stylesheet(&self) -> Option<&Stylesheet> {
        self.watcher.as_ref().and_then(|w| w.data())
    }

    pub fn injector(&self) -> &StyleInjector<S> {
        &self.injector
    }

    /// Selects a stylesheet for preview and brings it live.
    pub async fn select(&mut self, stylesheet_id: &str) {
        match &mut self.watcher {
            Some(watcher) => watcher.set_stylesheet(stylesheet_id),
            None => {
                self.watcher = Some(StylesheetWatcher::new(
                    Arc::clone(&self.store),
                    &self.bus,
                    stylesheet_id,
                ));
            }
        }
        self.refresh().await;
    }

    /// Syncs the watcher and re-injects. Injection failures are logged and
    /// the preview degrades to no styling; a byte-identical stylesheet is a
    /// no-op in the injector.
    pub async fn refresh(&mut self) {
        let Some(watcher) = &mut self.watcher else {
            return;
        };
        watcher.sync().await;
        if let Some(sheet) = watcher.data() {
            if let Err(err) = self.injector.activate(&sheet.id, &sheet.css_content) {
                error!("style injection failed for {}: {err}", sheet.id);
            }
        }
    }

    /// Waits for the next invalidation, then refreshes.
    pub async fn changed(&mut self) {
        if let Some(watcher) = &mut self.watcher {
            watcher.changed().await;
        }
        if let Some(sheet) = self.watcher.as_ref().and_then(|w| w.data()) {
            let (id, css) = (sheet.id.clone(), sheet.css_content.clone());
            if let Err(err) = self.injector.activate(&id, &css) {
                error!("style injection failed for {id}: {err}");
            }
        }
    }

    /// Renders one content block with the current stylesheet data.
    pub fn render_block(&self, content: &str) -> String {
        let parsed = self.stylesheet().map(|s| &s.parsed);
        apply_styles(content, parsed, self.mode, self.platform)
    }

    /// Drops the selection and removes the injected style element.
    pub fn deselect(&mut self) {
        self.watcher = None;
        self.injector.deactivate();
    }
}
