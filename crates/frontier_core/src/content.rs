use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// One catalog entry as supplied by the content store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Image reference; may be empty, in which case views use a placeholder.
    #[serde(default)]
    pub image: String,
    /// Displayable date string, passed through untouched.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub slug: String,
}

/// Immutable, ordered copy of the catalog at one point in time.
///
/// A snapshot is never edited after construction; the synchronizer replaces
/// the whole value on every poll.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogSnapshot {
    items: Arc<[ContentItem]>,
}

impl CatalogSnapshot {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self {
            items: items.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// True when both snapshots share the same backing allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl Deref for CatalogSnapshot {
    type Target = [ContentItem];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl From<Vec<ContentItem>> for CatalogSnapshot {
    fn from(items: Vec<ContentItem>) -> Self {
        Self::new(items)
    }
}
