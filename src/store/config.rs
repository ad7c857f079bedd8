//! Store backend configuration.
//!
//! Configuration-driven backend selection.

use crate::store::backend::BackendType;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Store configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Backend type to use
    pub backend: BackendType,
    /// File-specific config
    pub file: Option<FileStoreConfig>,
}

impl StoreConfig {
    /// Create in-memory config.
    pub fn memory() -> Self {
        Self {
            backend: BackendType::Memory,
            file: None,
        }
    }

    /// Create file config rooted at `dir`.
    pub fn file(dir: impl Into<PathBuf>) -> Self {
        Self {
            backend: BackendType::File,
            file: Some(FileStoreConfig { dir: dir.into() }),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::memory()
    }
}

/// File backend configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStoreConfig {
    /// Directory holding one file per key
    pub dir: PathBuf,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".space/state"),
        }
    }
}
