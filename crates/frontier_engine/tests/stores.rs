use std::fs;

use frontier_core::ContentItem;
use frontier_engine::{
    ContentStore, FallibleContentStore, JsonFileStore, LastGoodStore, MemoryContentStore,
    StoreError,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const CATALOG: &str = r#"[
    {"id": "p1", "title": "Vision Transformers", "description": "Patches all the way down",
     "image": "https://img.example.com/vit.jpg", "date": "May 2, 2025",
     "category": "Computer Vision", "slug": "vision-transformers"},
    {"id": "p2", "title": "Diffusion 101", "category": "GenAI"}
]"#;

fn ids(items: &[ContentItem]) -> Vec<&str> {
    items.iter().map(|item| item.id.as_str()).collect()
}

#[tokio::test]
async fn json_file_store_reads_catalog() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("posts.json");
    fs::write(&path, CATALOG).unwrap();

    let items = JsonFileStore::new(&path).fetch_items().await.unwrap();

    assert_eq!(ids(&items), vec!["p1", "p2"]);
    assert_eq!(items[0].category, "Computer Vision");
    assert_eq!(items[1].slug, "");
    assert_eq!(items[1].image, "");
}

#[tokio::test]
async fn json_file_store_sees_edits_on_next_fetch() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("posts.json");
    fs::write(&path, CATALOG).unwrap();
    let store = JsonFileStore::new(&path);
    assert_eq!(store.fetch_items().await.unwrap().len(), 2);

    fs::write(&path, "[]").unwrap();
    assert!(store.fetch_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn json_file_store_reports_missing_and_malformed_files() {
    let temp = TempDir::new().unwrap();
    let missing = JsonFileStore::new(temp.path().join("missing.json"));
    assert!(matches!(
        missing.fetch_items().await,
        Err(StoreError::Read { .. })
    ));

    let path = temp.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        JsonFileStore::new(&path).fetch_items().await,
        Err(StoreError::Parse(_))
    ));
}

#[tokio::test]
async fn last_good_store_falls_back_to_previous_items() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("posts.json");
    fs::write(&path, CATALOG).unwrap();
    let store = LastGoodStore::new(JsonFileStore::new(&path));

    assert_eq!(ids(&store.get_all_content_items().await), vec!["p1", "p2"]);

    fs::write(&path, "garbage").unwrap();
    assert_eq!(ids(&store.get_all_content_items().await), vec!["p1", "p2"]);

    fs::remove_file(&path).unwrap();
    assert_eq!(ids(&store.get_all_content_items().await), vec!["p1", "p2"]);
}

#[tokio::test]
async fn last_good_store_starts_empty() {
    let temp = TempDir::new().unwrap();
    let store = LastGoodStore::new(JsonFileStore::new(temp.path().join("none.json")));

    assert!(store.get_all_content_items().await.is_empty());
}

#[tokio::test]
async fn memory_store_returns_replaced_items() {
    let store = MemoryContentStore::default();
    assert!(store.get_all_content_items().await.is_empty());

    store.replace(vec![ContentItem {
        id: "p9".into(),
        ..ContentItem::default()
    }]);
    assert_eq!(ids(&store.get_all_content_items().await), vec!["p9"]);
}
