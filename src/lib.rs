//! # space-plugins - Plugin lifecycle manager
//!
//! Client-side extension registry for the Space proxy front-end:
//! - **Plugins**: descriptors with optional activate/deactivate hooks
//! - **Manager**: register, activate, deactivate, toggle, query
//! - **Store**: enabled state persisted as one JSON object in a key-value store
//!
//! ## Quick Start
//!
//! ```rust
//! use space_plugins::plugin::{PluginDescriptor, PluginInfo, PluginManager};
//! use space_plugins::store::MemoryStore;
//! use std::sync::Arc;
//!
//! let mut manager = PluginManager::new(Arc::new(MemoryStore::new()));
//! manager
//!     .register(
//!         PluginDescriptor::new(PluginInfo::new("dark-mode-enhancer", "Dark Mode Enhancer"))
//!             .on_activate(|| Ok(()))
//!             .on_deactivate(|| Ok(())),
//!     )
//!     .unwrap();
//!
//! assert!(manager.toggle("dark-mode-enhancer").unwrap());
//! assert!(manager.is_enabled("dark-mode-enhancer"));
//! ```

pub mod config;
pub mod core;
pub mod logging;
pub mod plugin;
pub mod store;

pub use config::ManagerConfig;
pub use crate::core::error::{Error, Result};
pub use plugin::{PluginDescriptor, PluginInfo, PluginManager};
