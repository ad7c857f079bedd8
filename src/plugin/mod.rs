//! Plugin Module
//!
//! Plugin lifecycle management:
//! - Plugin interface (descriptors and hooks)
//! - Plugin registry
//! - Enabled-set persistence
//! - Lifecycle manager

pub mod interface;
pub mod manager;
pub mod registry;
pub mod state;

pub use interface::{
    Hook, Plugin, PluginDescriptor, PluginError, PluginHook, PluginInfo, PluginResult,
};
pub use manager::{CatalogEntry, PluginManager, PluginStatus};
pub use registry::PluginRegistry;
pub use state::{EnabledSet, EnabledStateStore, DEFAULT_STORAGE_KEY};
