//! Backend factory.
//!
//! Creates stores based on configuration.

use crate::core::Result;
use crate::store::backend::{BackendType, KeyValueStore};
use crate::store::backends::{FileStore, MemoryStore};
use crate::store::config::StoreConfig;
use std::sync::Arc;

/// Create a store from configuration.
///
/// Returns an Arc-wrapped store for shared ownership. A file backend without
/// a `file` section uses the default directory.
pub fn create_store(config: &StoreConfig) -> Result<Arc<dyn KeyValueStore>> {
    match config.backend {
        BackendType::Memory => Ok(Arc::new(MemoryStore::new())),
        BackendType::File => {
            let file_config = config.file.clone().unwrap_or_default();
            Ok(Arc::new(FileStore::from_config(&file_config)))
        }
    }
}
