use std::sync::{Mutex, PoisonError, RwLock};

use frontier_core::ContentItem;
use frontier_logging::frontier_warn;

use crate::StoreError;

/// Supplies the full ordered catalog. Best-effort and infallible: an
/// unavailable catalog is reported as whatever the store last knew, possibly empty.
#[async_trait::async_trait]
pub trait ContentStore: Send + Sync {
    async fn get_all_content_items(&self) -> Vec<ContentItem>;
}

/// A catalog source that can fail, such as a file or a remote endpoint.
///
/// Wrap it in [`LastGoodStore`] before handing it to the synchronizer.
#[async_trait::async_trait]
pub trait FallibleContentStore: Send + Sync {
    async fn fetch_items(&self) -> Result<Vec<ContentItem>, StoreError>;
}

/// In-memory catalog whose contents can be swapped at any time.
#[derive(Debug, Default)]
pub struct MemoryContentStore {
    items: RwLock<Vec<ContentItem>>,
}

impl MemoryContentStore {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    pub fn replace(&self, items: Vec<ContentItem>) {
        *self.items.write().unwrap_or_else(PoisonError::into_inner) = items;
    }
}

#[async_trait::async_trait]
impl ContentStore for MemoryContentStore {
    async fn get_all_content_items(&self) -> Vec<ContentItem> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Degrades failures of the inner store to the last catalog it returned.
pub struct LastGoodStore<S> {
    inner: S,
    last_good: Mutex<Vec<ContentItem>>,
}

impl<S: FallibleContentStore> LastGoodStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            last_good: Mutex::new(Vec::new()),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait::async_trait]
impl<S: FallibleContentStore> ContentStore for LastGoodStore<S> {
    async fn get_all_content_items(&self) -> Vec<ContentItem> {
        let fetched = self.inner.fetch_items().await;
        let mut last_good = self.last_good.lock().unwrap_or_else(PoisonError::into_inner);
        match fetched {
            Ok(items) => {
                *last_good = items.clone();
                items
            }
            Err(err) => {
                frontier_warn!(
                    "Catalog fetch failed, keeping {} previous items: {}",
                    last_good.len(),
                    err
                );
                last_good.clone()
            }
        }
    }
}
