//! Plugin lifecycle manager.
//!
//! Owns the registry and the enabled-set. Every activation or deactivation
//! runs the same pipeline: invoke the hook, record the new flag, persist the
//! whole set. A failing hook stops the pipeline before anything is recorded.

use crate::config::ManagerConfig;
use crate::core::{Error, Result};
use crate::plugin::interface::{PluginDescriptor, PluginHook, PluginInfo};
use crate::plugin::registry::PluginRegistry;
use crate::plugin::state::{EnabledSet, EnabledStateStore, DEFAULT_STORAGE_KEY};
use crate::store::{create_store, KeyValueStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Lifecycle state of a plugin id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PluginStatus {
    /// Never registered in this process
    Unregistered,
    /// Registered, not enabled
    Disabled,
    /// Registered and enabled
    Enabled,
}

/// One row of the settings catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Plugin metadata
    pub info: PluginInfo,
    /// Current enabled flag
    pub enabled: bool,
}

/// Single authority over which plugins exist and which are enabled.
pub struct PluginManager {
    registry: PluginRegistry,
    enabled: EnabledSet,
    state: EnabledStateStore,
}

impl PluginManager {
    /// Create a manager over `store` using the default storage key.
    ///
    /// The persisted enabled-set is loaded here, before any registration.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_storage_key(store, DEFAULT_STORAGE_KEY)
    }

    /// Create a manager persisting under a custom key.
    pub fn with_storage_key(store: Arc<dyn KeyValueStore>, key: &str) -> Self {
        let state = EnabledStateStore::new(store, key);
        let enabled = state.load();
        info!(
            key,
            backend = %state.store().backend_type(),
            restored = enabled.iter().filter(|(_, on)| *on).count(),
            "Plugin manager initialized"
        );

        Self {
            registry: PluginRegistry::new(),
            enabled,
            state,
        }
    }

    /// Create the configured store and a manager over it.
    ///
    /// `config.logging` is left to the host, see [`crate::logging::init_logging`].
    pub fn from_config(config: &ManagerConfig) -> Result<Self> {
        config.validate()?;
        let store = create_store(&config.store)?;
        Ok(Self::with_storage_key(store, &config.storage_key))
    }

    /// Register a plugin, replacing any previous descriptor with the same id.
    ///
    /// A plugin that was enabled in a previous session is activated before
    /// this returns. The descriptor stays registered even if that activation
    /// fails.
    pub fn register(&mut self, descriptor: PluginDescriptor) -> Result<()> {
        let id = descriptor.id().to_string();
        if id.is_empty() {
            return Err(Error::InvalidPluginId(id));
        }

        if self.registry.insert(descriptor).is_some() {
            debug!(plugin_id = %id, "Replaced existing descriptor");
        }
        info!(plugin_id = %id, "Plugin registered");

        if self.enabled.is_enabled(&id) {
            info!(plugin_id = %id, "Restoring previously enabled plugin");
            self.activate(&id)?;
        }
        Ok(())
    }

    /// Run the plugin's activate hook and mark it enabled.
    ///
    /// No-op for unknown ids and for plugins without an activate hook. The
    /// hook runs on every call, even if the plugin is already enabled.
    pub fn activate(&mut self, plugin_id: &str) -> Result<()> {
        self.transition(plugin_id, PluginHook::Activate)
    }

    /// Run the plugin's deactivate hook and mark it disabled.
    ///
    /// No-op for unknown ids and for plugins without a deactivate hook.
    pub fn deactivate(&mut self, plugin_id: &str) -> Result<()> {
        self.transition(plugin_id, PluginHook::Deactivate)
    }

    /// Flip a plugin and return its enabled flag afterwards.
    pub fn toggle(&mut self, plugin_id: &str) -> Result<bool> {
        if self.is_enabled(plugin_id) {
            self.deactivate(plugin_id)?;
        } else {
            self.activate(plugin_id)?;
        }
        Ok(self.is_enabled(plugin_id))
    }

    /// Enabled flag for an id; unknown ids are disabled.
    pub fn is_enabled(&self, plugin_id: &str) -> bool {
        self.enabled.is_enabled(plugin_id)
    }

    /// Lifecycle state of an id.
    pub fn status(&self, plugin_id: &str) -> PluginStatus {
        if !self.registry.contains(plugin_id) {
            PluginStatus::Unregistered
        } else if self.is_enabled(plugin_id) {
            PluginStatus::Enabled
        } else {
            PluginStatus::Disabled
        }
    }

    /// All registered descriptors, in registration order.
    pub fn get_all(&self) -> Vec<&PluginDescriptor> {
        self.registry.iter().collect()
    }

    /// Get a descriptor by ID.
    pub fn get(&self, plugin_id: &str) -> Option<&PluginDescriptor> {
        self.registry.get(plugin_id)
    }

    /// Get plugin count.
    pub fn plugin_count(&self) -> usize {
        self.registry.len()
    }

    /// Registered ids that are currently enabled, in registration order.
    pub fn enabled_ids(&self) -> Vec<&str> {
        self.registry
            .iter()
            .map(|p| p.id())
            .filter(|id| self.is_enabled(id))
            .collect()
    }

    /// Metadata and enabled flag for every registered plugin.
    pub fn catalog(&self) -> Vec<CatalogEntry> {
        self.registry
            .iter()
            .map(|p| CatalogEntry {
                info: p.info().clone(),
                enabled: self.is_enabled(p.id()),
            })
            .collect()
    }

    /// Catalog grouped by category, categories in first-seen order.
    pub fn by_category(&self) -> Vec<(String, Vec<CatalogEntry>)> {
        let mut groups: Vec<(String, Vec<CatalogEntry>)> = Vec::new();
        for entry in self.catalog() {
            match groups.iter_mut().find(|(c, _)| *c == entry.info.category) {
                Some((_, entries)) => entries.push(entry),
                None => groups.push((entry.info.category.clone(), vec![entry])),
            }
        }
        groups
    }

    /// The in-memory enabled-set.
    pub fn enabled_set(&self) -> &EnabledSet {
        &self.enabled
    }

    /// Key the enabled-set is persisted under.
    pub fn storage_key(&self) -> &str {
        self.state.key()
    }

    fn transition(&mut self, plugin_id: &str, hook: PluginHook) -> Result<()> {
        let Some(descriptor) = self.registry.get_mut(plugin_id) else {
            debug!(plugin_id, %hook, "Ignoring unregistered plugin");
            return Ok(());
        };
        let Some(run) = descriptor.hook_mut(hook) else {
            debug!(plugin_id, %hook, "Plugin has no hook, nothing to do");
            return Ok(());
        };

        debug!(plugin_id, %hook, "Invoking hook");
        if let Err(e) = run() {
            warn!(
                plugin_id,
                %hook,
                error = %e.message,
                recoverable = e.recoverable,
                "Hook failed, state unchanged"
            );
            return Err(Error::hook(plugin_id, e));
        }

        self.enabled.set(plugin_id, hook == PluginHook::Activate);
        self.state.save(&self.enabled)
    }
}

impl std::fmt::Debug for PluginManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginManager")
            .field("plugins", &self.registry.len())
            .field("enabled", &self.enabled)
            .field("state", &self.state)
            .finish()
    }
}
