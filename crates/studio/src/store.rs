//! Stylesheet data model and the CRUD boundary.
//!
//! The store is the sole source of truth for raw CSS text; the styling core
//! only ever holds read-only cached copies. [`StylesheetStore`] is the trait
//! rendering of the external CRUD endpoints; [`MemoryStore`] is the bundled
//! implementation. [`InvalidatingStore`] wraps any store and fires the
//! invalidation bus after every successful mutation - the one discipline
//! whose omission produces stale previews.

use crate::error::{Result, StudioError};
use crate::invalidation::InvalidationBus;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::SystemTime;
use studiocss::{ParsedCss, parse_stylesheet};

/// A named collection of CSS authored by a user.
///
/// `parsed` is derived from `css_content` and recomputed on every mutation;
/// it is never authoritative.
#[derive(Clone, Debug)]
pub struct Stylesheet {
    pub id: String,
    pub name: String,
    pub description: String,
    pub version: u32,
    pub tags: Vec<String>,
    pub css_content: String,
    pub parsed: ParsedCss,
    pub updated_at: SystemTime,
}

/// Fields for creating a stylesheet.
#[derive(Clone, Debug, Default)]
pub struct NewStylesheet {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub css_content: String,
}

/// Partial update; `None` fields are left unchanged.
#[derive(Clone, Debug, Default)]
pub struct StylesheetUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub css_content: Option<String>,
}

/// The stylesheet CRUD boundary.
#[async_trait]
pub trait StylesheetStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Stylesheet>>;
    async fn get(&self, id: &str) -> Result<Stylesheet>;
    async fn create(&self, new: NewStylesheet) -> Result<Stylesheet>;
    async fn update(&self, id: &str, update: StylesheetUpdate) -> Result<Stylesheet>;
    async fn delete(&self, id: &str) -> Result<()>;
}

#[derive(Default)]
struct MemoryStoreInner {
    sheets: BTreeMap<String, Stylesheet>,
    next_id: u64,
}

/// In-memory store, used by tests and embedded tooling.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryStoreInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StylesheetStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Stylesheet>> {
        Ok(self.inner.lock().unwrap().sheets.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Stylesheet> {
        self.inner
            .lock()
            .unwrap()
            .sheets
            .get(id)
            .cloned()
            .ok_or_else(|| StudioError::NotFound(id.to_string()))
    }

    async fn create(&self, new: NewStylesheet) -> Result<Stylesheet> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = format!("ss-{}", inner.next_id);
        let sheet = Stylesheet {
            id: id.clone(),
            name: new.name,
            description: new.description,
            version: 1,
            tags: new.tags,
            parsed: parse_stylesheet(&new.css_content),
            css_content: new.css_content,
            updated_at: SystemTime::now(),
        };
        inner.sheets.insert(id, sheet.clone());
        Ok(sheet)
    }

    async fn update(&self, id: &str, update: StylesheetUpdate) -> Result<Stylesheet> {
        let mut inner = self.inner.lock().unwrap();
        let sheet = inner
            .sheets
            .get_mut(id)
            .ok_or_else(|| StudioError::NotFound(id.to_string()))?;

        if let Some(name) = update.name {
            sheet.name = name;
        }
        if let Some(description) = update.description {
            sheet.description = description;
        }
        if let Some(tags) = update.tags {
            sheet.tags = tags;
        }
        if let Some(css_content) = update.css_content {
            sheet.parsed = parse_stylesheet(&css_content);
            sheet.css_content = css_content;
        }
        sheet.version += 1;
        sheet.updated_at = SystemTime::now();
        Ok(sheet.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let removed = self.inner.lock().unwrap().sheets.remove(id);
        match removed {
            Some(_) => Ok(()),
            None => Err(StudioError::NotFound(id.to_string())),
        }
    }
}

/// Store wrapper that fires the invalidation bus after every successful
/// mutation, before returning to the caller.
pub struct InvalidatingStore<S> {
    inner: S,
    bus: InvalidationBus,
}

impl<S> InvalidatingStore<S> {
    pub fn new(inner: S, bus: InvalidationBus) -> Self {
        Self { inner, bus }
    }

    pub fn bus(&self) -> &InvalidationBus {
        &self.bus
    }
}

#[async_trait]
impl<S: StylesheetStore> StylesheetStore for InvalidatingStore<S> {
    async fn list(&self) -> Result<Vec<Stylesheet>> {
        self.inner.list().await
    }

    async fn get(&self, id: &str) -> Result<Stylesheet> {
        self.inner.get(id).await
    }

    async fn create(&self, new: NewStylesheet) -> Result<Stylesheet> {
        let sheet = self.inner.create(new).await?;
        self.bus.invalidate();
        Ok(sheet)
    }

    async fn update(&self, id: &str, update: StylesheetUpdate) -> Result<Stylesheet> {
        let sheet = self.inner.update(id, update).await?;
        self.bus.invalidate();
        Ok(sheet)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.inner.delete(id).await?;
        self.bus.invalidate();
        Ok(())
    }
}
