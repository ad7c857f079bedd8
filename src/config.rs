//! Manager configuration.
//!
//! Loaded from JSON; every field is optional and falls back to its default.

use crate::core::{Error, Result};
use crate::logging::LoggerConfig;
use crate::plugin::state::DEFAULT_STORAGE_KEY;
use crate::store::StoreConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Plugin manager configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Key the enabled-set is persisted under
    pub storage_key: String,
    /// Store backend
    pub store: StoreConfig,
    /// Logging setup.
    ///
    /// Not applied by the manager; the host passes it to
    /// [`init_logging`](crate::logging::init_logging) once at startup.
    pub logging: LoggerConfig,
}

impl ManagerConfig {
    /// Config with the given store and defaults elsewhere.
    pub fn with_store(store: StoreConfig) -> Self {
        Self {
            store,
            ..Default::default()
        }
    }

    /// Parse and validate config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate config from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    /// Check invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(Error::Config("storage_key must not be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            store: StoreConfig::default(),
            logging: LoggerConfig::default(),
        }
    }
}
