use std::path::PathBuf;

use frontier_core::{derive_view, CatalogSnapshot, ContentItem, DerivedView};
use thiserror::Error;

/// One published catalog state: the snapshot and the view derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Publication {
    /// 0 for the fetch performed by `start`, then +1 per tick.
    pub revision: u64,
    pub snapshot: CatalogSnapshot,
    pub view: DerivedView,
}

impl Publication {
    pub fn new(revision: u64, items: Vec<ContentItem>) -> Self {
        let snapshot = CatalogSnapshot::new(items);
        let view = derive_view(&snapshot);
        Self {
            revision,
            snapshot,
            view,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpFailure {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("http status {0}")]
    Status(u16),
    #[error("timeout")]
    Timeout,
    #[error("response too large (max {max_bytes})")]
    TooLarge { max_bytes: u64 },
    #[error("network error: {0}")]
    Network(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read catalog {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog request failed: {0}")]
    Http(#[from] HttpFailure),
}

#[derive(Debug, Error)]
pub enum SubscribeError {
    #[error("subscription request failed: {0}")]
    Http(#[from] HttpFailure),
    #[error("failed to encode subscription request: {0}")]
    Encode(#[from] serde_json::Error),
}
