//! Plugin interface definition.
//!
//! Defines the descriptor a plugin registers with and the trait stateful
//! plugins implement.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};

/// Plugin display metadata.
///
/// Opaque to the manager: only `id` is interpreted, the rest is surfaced to
/// the settings UI as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Plugin ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Description
    pub description: String,
    /// Icon name
    pub icon: String,
    /// Catalog category
    pub category: String,
}

impl PluginInfo {
    /// Create new plugin info.
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            icon: String::new(),
            category: String::new(),
        }
    }

    /// Set description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    /// Set icon.
    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = icon.to_string();
        self
    }

    /// Set category.
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }
}

/// Result type for plugin hooks.
pub type PluginResult<T> = std::result::Result<T, PluginError>;

/// Plugin-specific error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PluginError {
    /// Error message
    pub message: String,
    /// Is recoverable
    pub recoverable: bool,
}

impl PluginError {
    /// Create a new error.
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            recoverable: true,
        }
    }

    /// Create a fatal error.
    pub fn fatal(message: &str) -> Self {
        Self {
            message: message.to_string(),
            recoverable: false,
        }
    }
}

impl std::fmt::Display for PluginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PluginError: {}", self.message)
    }
}

impl std::error::Error for PluginError {}

/// Lifecycle hook kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PluginHook {
    /// Turns the plugin's effects on
    Activate,
    /// Turns the plugin's effects off
    Deactivate,
}

impl std::fmt::Display for PluginHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginHook::Activate => write!(f, "activate"),
            PluginHook::Deactivate => write!(f, "deactivate"),
        }
    }
}

/// A zero-argument lifecycle hook.
pub type Hook = Box<dyn FnMut() -> PluginResult<()> + Send>;

/// Trait for plugins that carry their own state across activations.
///
/// Converted into a descriptor with [`PluginDescriptor::from_plugin`]; both
/// hooks are always present.
pub trait Plugin: Send {
    /// Get plugin info.
    fn info(&self) -> PluginInfo;

    /// Apply the plugin's effects.
    fn activate(&mut self) -> PluginResult<()>;

    /// Remove the plugin's effects.
    fn deactivate(&mut self) -> PluginResult<()>;
}

/// What a plugin registers with the manager.
///
/// Either hook may be absent. A missing hook makes the matching manager
/// operation a no-op for this plugin.
pub struct PluginDescriptor {
    info: PluginInfo,
    activate: Option<Hook>,
    deactivate: Option<Hook>,
}

impl PluginDescriptor {
    /// Create a descriptor with no hooks.
    pub fn new(info: PluginInfo) -> Self {
        Self {
            info,
            activate: None,
            deactivate: None,
        }
    }

    /// Set the activation hook.
    pub fn on_activate<F>(mut self, hook: F) -> Self
    where
        F: FnMut() -> PluginResult<()> + Send + 'static,
    {
        self.activate = Some(Box::new(hook));
        self
    }

    /// Set the deactivation hook.
    pub fn on_deactivate<F>(mut self, hook: F) -> Self
    where
        F: FnMut() -> PluginResult<()> + Send + 'static,
    {
        self.deactivate = Some(Box::new(hook));
        self
    }

    /// Build a descriptor whose hooks drive a [`Plugin`] implementation.
    pub fn from_plugin<P: Plugin + 'static>(plugin: P) -> Self {
        let info = plugin.info();
        let shared = Arc::new(Mutex::new(plugin));
        let for_activate = Arc::clone(&shared);

        Self::new(info)
            .on_activate(move || lock_plugin(&for_activate)?.activate())
            .on_deactivate(move || lock_plugin(&shared)?.deactivate())
    }

    /// Plugin ID.
    pub fn id(&self) -> &str {
        &self.info.id
    }

    /// Plugin metadata.
    pub fn info(&self) -> &PluginInfo {
        &self.info
    }

    /// Whether the given hook is present.
    pub fn has_hook(&self, hook: PluginHook) -> bool {
        match hook {
            PluginHook::Activate => self.activate.is_some(),
            PluginHook::Deactivate => self.deactivate.is_some(),
        }
    }

    pub(crate) fn hook_mut(&mut self, hook: PluginHook) -> Option<&mut Hook> {
        match hook {
            PluginHook::Activate => self.activate.as_mut(),
            PluginHook::Deactivate => self.deactivate.as_mut(),
        }
    }
}

impl std::fmt::Debug for PluginDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginDescriptor")
            .field("info", &self.info)
            .field("activate", &self.activate.is_some())
            .field("deactivate", &self.deactivate.is_some())
            .finish()
    }
}

fn lock_plugin<P>(shared: &Arc<Mutex<P>>) -> PluginResult<MutexGuard<'_, P>> {
    shared
        .lock()
        .map_err(|_| PluginError::fatal("plugin state poisoned by an earlier panic"))
}
