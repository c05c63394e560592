//! Integration tests for the stylesheet store and the invalidation trigger
//! discipline.

use studio::error::StudioError;
use studio::invalidation::InvalidationBus;
use studio::store::{
    InvalidatingStore, MemoryStore, NewStylesheet, StylesheetStore, StylesheetUpdate,
};

fn new_sheet(css: &str) -> NewStylesheet {
    NewStylesheet {
        name: "Test".to_string(),
        description: String::new(),
        tags: vec![],
        css_content: css.to_string(),
    }
}

#[tokio::test]
async fn test_create_parses_css() {
    let store = MemoryStore::new();
    let sheet = store
        .create(new_sheet(".cta { color: red; } p { margin: 0; }"))
        .await
        .unwrap();

    assert_eq!(sheet.version, 1);
    assert_eq!(sheet.parsed.classes.len(), 1);
    assert!(sheet.parsed.global_styles.contains_key("p"));
}

#[tokio::test]
async fn test_update_recomputes_parsed_and_bumps_version() {
    let store = MemoryStore::new();
    let sheet = store.create(new_sheet(".a { color: red; }")).await.unwrap();

    let updated = store
        .update(
            &sheet.id,
            StylesheetUpdate {
                css_content: Some(".b { color: blue; }".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.version, 2);
    assert_eq!(updated.parsed.classes[0].name, "b");
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let store = MemoryStore::new();
    let err = store.get("nope").await.unwrap_err();
    assert!(matches!(err, StudioError::NotFound(_)));
}

#[tokio::test]
async fn test_mutations_fire_invalidation() {
    let bus = InvalidationBus::new();
    let store = InvalidatingStore::new(MemoryStore::new(), bus.clone());

    let sheet = store.create(new_sheet(".a { color: red; }")).await.unwrap();
    assert_eq!(bus.counter(), 1);

    store
        .update(
            &sheet.id,
            StylesheetUpdate {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(bus.counter(), 2);

    store.delete(&sheet.id).await.unwrap();
    assert_eq!(bus.counter(), 3);
}

#[tokio::test]
async fn test_reads_and_failures_do_not_invalidate() {
    let bus = InvalidationBus::new();
    let store = InvalidatingStore::new(MemoryStore::new(), bus.clone());

    let _ = store.list().await;
    let _ = store.get("missing").await;
    let _ = store.delete("missing").await;
    let _ = store
        .update("missing", StylesheetUpdate::default())
        .await;

    assert_eq!(bus.counter(), 0);
}
