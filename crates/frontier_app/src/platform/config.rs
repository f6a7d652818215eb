use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use frontier_engine::{HttpSettings, SyncSettings};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::logging::LogDestination;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogSource {
    File {
        path: PathBuf,
    },
    Http {
        url: String,
        #[serde(default = "default_timeout_ms")]
        timeout_ms: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubscriberConfig {
    #[default]
    Simulated,
    Http {
        url: String,
        #[serde(default = "default_timeout_ms")]
        timeout_ms: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub poll_interval_ms: u64,
    pub completion_delay_ms: u64,
    pub catalog: CatalogSource,
    pub subscriber: SubscriberConfig,
    pub log_destination: LogDestination,
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 2000,
            completion_delay_ms: 1000,
            catalog: CatalogSource::File {
                path: PathBuf::from("posts.json"),
            },
            subscriber: SubscriberConfig::default(),
            log_destination: LogDestination::default(),
            verbose: false,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    pub fn sync_settings(&self) -> SyncSettings {
        SyncSettings {
            // A zero period would make tokio's interval panic.
            poll_interval: Duration::from_millis(self.poll_interval_ms.max(1)),
        }
    }

    pub fn completion_delay(&self) -> Duration {
        Duration::from_millis(self.completion_delay_ms)
    }
}

pub fn http_settings(timeout_ms: u64) -> HttpSettings {
    HttpSettings {
        request_timeout: Duration::from_millis(timeout_ms),
        ..HttpSettings::default()
    }
}

fn default_timeout_ms() -> u64 {
    10_000
}
