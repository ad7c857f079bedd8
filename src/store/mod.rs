//! Persisted-state storage
//!
//! Trait-based key-value store supporting:
//! - Memory
//! - File (atomic per-key JSON files)

pub mod backend;
pub mod backends;
pub mod config;
pub mod factory;

pub use backend::{BackendType, KeyValueStore};
pub use backends::{FileStore, MemoryStore};
pub use config::{FileStoreConfig, StoreConfig};
pub use factory::create_store;
