//! Plugin registry.
//!
//! Holds descriptors by id and remembers the order they were first
//! registered in.

use crate::plugin::interface::PluginDescriptor;
use std::collections::HashMap;

/// Descriptor registry.
///
/// Re-registering an id replaces the descriptor but keeps its original
/// position.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    plugins: HashMap<String, PluginDescriptor>,
    order: Vec<String>,
}

impl PluginRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a descriptor, returning the one it replaced.
    pub fn insert(&mut self, descriptor: PluginDescriptor) -> Option<PluginDescriptor> {
        let id = descriptor.id().to_string();

        let previous = self.plugins.insert(id.clone(), descriptor);
        if previous.is_none() {
            self.order.push(id);
        }
        previous
    }

    /// Get plugin by ID.
    pub fn get(&self, plugin_id: &str) -> Option<&PluginDescriptor> {
        self.plugins.get(plugin_id)
    }

    /// Get plugin by ID, mutably.
    pub fn get_mut(&mut self, plugin_id: &str) -> Option<&mut PluginDescriptor> {
        self.plugins.get_mut(plugin_id)
    }

    /// Whether an ID is registered.
    pub fn contains(&self, plugin_id: &str) -> bool {
        self.plugins.contains_key(plugin_id)
    }

    /// Iterate in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &PluginDescriptor> {
        self.order.iter().filter_map(|id| self.plugins.get(id))
    }

    /// Get plugin count.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
