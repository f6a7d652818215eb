use std::path::PathBuf;

use frontier_core::ContentItem;

use crate::{FallibleContentStore, StoreError};

/// Reads a JSON array of items from disk on every fetch, so edits to the file
/// show up on the next poll.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl FallibleContentStore for JsonFileStore {
    async fn fetch_items(&self) -> Result<Vec<ContentItem>, StoreError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| StoreError::Read {
                path: self.path.clone(),
                source,
            })?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
