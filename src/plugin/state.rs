//! Enabled-set and its persistence.
//!
//! The enabled-set is stored as a single JSON object under one key, e.g.
//! `{"dark-mode-enhancer": true, "tab-manager": false}`.

use crate::core::Result;
use crate::store::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Key the enabled-set is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "space-enabled-plugins";

/// Mapping from plugin id to enabled flag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnabledSet(BTreeMap<String, bool>);

impl EnabledSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enabled flag for `id`; absent ids are disabled.
    pub fn is_enabled(&self, id: &str) -> bool {
        self.0.get(id).copied().unwrap_or(false)
    }

    /// Record a flag for `id`.
    pub fn set(&mut self, id: &str, enabled: bool) {
        self.0.insert(id.to_string(), enabled);
    }

    /// Whether `id` has any recorded flag.
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Number of recorded ids.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no ids are recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over recorded ids and flags.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(id, enabled)| (id.as_str(), *enabled))
    }

    /// Parse from the persisted JSON layout.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to the persisted JSON layout.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for EnabledSet {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(id, enabled)| (id.into(), enabled)).collect())
    }
}

/// Reads and writes the enabled-set under a single key.
#[derive(Clone)]
pub struct EnabledStateStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl EnabledStateStore {
    /// Create an adapter over `store` using `key`.
    pub fn new(store: Arc<dyn KeyValueStore>, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
        }
    }

    /// Storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying store.
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Load the persisted set.
    ///
    /// Missing, unreadable or malformed data yields an empty set.
    pub fn load(&self) -> EnabledSet {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return EnabledSet::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read plugin state, starting empty");
                return EnabledSet::new();
            }
        };

        match EnabledSet::from_json(&raw) {
            Ok(set) => {
                debug!(key = %self.key, entries = set.len(), "Plugin state loaded");
                set
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Malformed plugin state, starting empty");
                EnabledSet::new()
            }
        }
    }

    /// Persist the whole set, replacing what was stored.
    pub fn save(&self, set: &EnabledSet) -> Result<()> {
        let json = set.to_json()?;
        self.store.set(&self.key, &json)?;
        debug!(key = %self.key, entries = set.len(), "Plugin state saved");
        Ok(())
    }
}

impl std::fmt::Debug for EnabledStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnabledStateStore")
            .field("backend", &self.store.backend_type())
            .field("key", &self.key)
            .finish()
    }
}
