//! The style-element boundary as an interface.
//!
//! The injector never touches a document directly; it talks to a
//! [`StyleSink`] with upsert/remove semantics. A browser-backed adapter would
//! create and mutate `<style>` elements in the document head; [`MemorySink`]
//! is the bundled headless adapter and also counts mutations, which is how
//! the hot-reload no-op guarantee is tested.

use crate::error::{Result, StudioError};
use std::collections::BTreeMap;

/// Destination for injected stylesheet text, keyed by element id.
pub trait StyleSink: Send {
    /// Creates the element if absent, otherwise updates its text in place.
    fn upsert(&mut self, element_id: &str, css: &str) -> Result<()>;

    /// Removes the element. Removing an absent element is not an error.
    fn remove(&mut self, element_id: &str) -> Result<()>;
}

impl<S: StyleSink + ?Sized> StyleSink for &mut S {
    fn upsert(&mut self, element_id: &str, css: &str) -> Result<()> {
        (**self).upsert(element_id, css)
    }

    fn remove(&mut self, element_id: &str) -> Result<()> {
        (**self).remove(element_id)
    }
}

/// In-memory sink.
#[derive(Debug, Default)]
pub struct MemorySink {
    elements: BTreeMap<String, String>,
    mutations: u64,
    /// Test hook: refuse in-place updates (upsert of an existing element),
    /// forcing the injector's remove-then-recreate fallback.
    pub fail_in_place_updates: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The css text currently held for an element, if any.
    pub fn css_for(&self, element_id: &str) -> Option<&str> {
        self.elements.get(element_id).map(String::as_str)
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Total number of mutations applied (upserts plus effective removes).
    pub fn mutation_count(&self) -> u64 {
        self.mutations
    }
}

impl StyleSink for MemorySink {
    fn upsert(&mut self, element_id: &str, css: &str) -> Result<()> {
        if self.fail_in_place_updates && self.elements.contains_key(element_id) {
            return Err(StudioError::Injection(format!(
                "in-place update refused for {element_id}"
            )));
        }
        self.elements.insert(element_id.to_string(), css.to_string());
        self.mutations += 1;
        Ok(())
    }

    fn remove(&mut self, element_id: &str) -> Result<()> {
        if self.elements.remove(element_id).is_some() {
            self.mutations += 1;
        }
        Ok(())
    }
}
