//! KeyValueStore trait definition.
//!
//! Core trait that all persisted-state backends must implement.

use crate::core::Result;
use serde::{Deserialize, Serialize};

/// Backend type identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendType {
    /// Process-local map, lost on restart
    Memory,
    /// One JSON file per key under a directory
    File,
}

impl std::fmt::Display for BackendType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendType::Memory => write!(f, "memory"),
            BackendType::File => write!(f, "file"),
        }
    }
}

/// Synchronous string key-value storage.
///
/// Methods take `&self` so one store can be shared between managers through
/// an `Arc`. Implementations guard their state internally.
pub trait KeyValueStore: Send + Sync {
    /// Read a value.
    ///
    /// Returns None if the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a value. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Get the backend type.
    fn backend_type(&self) -> BackendType;
}
