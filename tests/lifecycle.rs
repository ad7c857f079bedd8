//! Restart scenarios against the on-disk store.

use space_plugins::plugin::{
    Plugin, PluginDescriptor, PluginInfo, PluginManager, PluginResult, PluginStatus,
};
use space_plugins::logging::init_logging;
use space_plugins::store::{FileStore, KeyValueStore, StoreConfig};
use space_plugins::ManagerConfig;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Stateful plugin that tracks a marker the way front-end plugins do.
struct MarkerPlugin {
    id: &'static str,
    marker_on: bool,
    activations: Arc<AtomicUsize>,
}

impl MarkerPlugin {
    fn new(id: &'static str, activations: &Arc<AtomicUsize>) -> Self {
        Self {
            id,
            marker_on: false,
            activations: Arc::clone(activations),
        }
    }
}

impl Plugin for MarkerPlugin {
    fn info(&self) -> PluginInfo {
        PluginInfo::new(self.id, "Marker")
            .with_icon("bookmark")
            .with_category("productivity")
    }

    fn activate(&mut self) -> PluginResult<()> {
        self.marker_on = true;
        self.activations.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn deactivate(&mut self) -> PluginResult<()> {
        self.marker_on = false;
        Ok(())
    }
}

#[test]
fn test_enabled_plugins_resume_after_restart() {
    let temp_dir = tempfile::tempdir().unwrap();
    let activations = Arc::new(AtomicUsize::new(0));

    {
        let mut manager = PluginManager::new(Arc::new(FileStore::new(temp_dir.path())));
        manager
            .register(PluginDescriptor::from_plugin(MarkerPlugin::new(
                "quick-bookmarks",
                &activations,
            )))
            .unwrap();
        manager
            .register(PluginDescriptor::from_plugin(MarkerPlugin::new(
                "tab-manager",
                &activations,
            )))
            .unwrap();

        assert!(manager.toggle("quick-bookmarks").unwrap());
        assert!(manager.toggle("tab-manager").unwrap());
        assert!(!manager.toggle("tab-manager").unwrap());
    }
    assert_eq!(activations.load(Ordering::SeqCst), 2);

    let state_path = temp_dir.path().join("space-enabled-plugins.json");
    let raw = std::fs::read_to_string(state_path).unwrap();
    assert_eq!(raw, r#"{"quick-bookmarks":true,"tab-manager":false}"#);

    let restarted_activations = Arc::new(AtomicUsize::new(0));
    let mut manager = PluginManager::new(Arc::new(FileStore::new(temp_dir.path())));
    assert!(manager.is_enabled("quick-bookmarks"));
    assert!(!manager.is_enabled("tab-manager"));

    manager
        .register(PluginDescriptor::from_plugin(MarkerPlugin::new(
            "quick-bookmarks",
            &restarted_activations,
        )))
        .unwrap();
    manager
        .register(PluginDescriptor::from_plugin(MarkerPlugin::new(
            "tab-manager",
            &restarted_activations,
        )))
        .unwrap();

    assert_eq!(restarted_activations.load(Ordering::SeqCst), 1);
    assert_eq!(manager.status("quick-bookmarks"), PluginStatus::Enabled);
    assert_eq!(manager.status("tab-manager"), PluginStatus::Disabled);
}

#[test]
fn test_corrupt_file_is_ignored() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(temp_dir.path()));
    store.set("space-enabled-plugins", "definitely not json").unwrap();

    let activations = Arc::new(AtomicUsize::new(0));
    let mut manager = PluginManager::new(store.clone());
    manager
        .register(PluginDescriptor::from_plugin(MarkerPlugin::new(
            "quick-bookmarks",
            &activations,
        )))
        .unwrap();

    assert_eq!(activations.load(Ordering::SeqCst), 0);
    assert!(!manager.is_enabled("quick-bookmarks"));

    manager.toggle("quick-bookmarks").unwrap();
    assert_eq!(
        store.get("space-enabled-plugins").unwrap().as_deref(),
        Some(r#"{"quick-bookmarks":true}"#)
    );
}

#[test]
fn test_manager_from_file_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("plugins.json");
    let state_dir = temp_dir.path().join("state");
    let config = ManagerConfig {
        storage_key: "enabled".to_string(),
        ..ManagerConfig::with_store(StoreConfig::file(&state_dir))
    };
    std::fs::write(&config_path, serde_json::to_string(&config).unwrap()).unwrap();

    let loaded = ManagerConfig::from_json_file(&config_path).unwrap();
    init_logging(&loaded.logging).unwrap();

    let activations = Arc::new(AtomicUsize::new(0));
    let mut manager = PluginManager::from_config(&loaded).unwrap();
    manager
        .register(PluginDescriptor::from_plugin(MarkerPlugin::new(
            "quick-bookmarks",
            &activations,
        )))
        .unwrap();
    manager.activate("quick-bookmarks").unwrap();

    assert!(state_dir.join("enabled.json").exists());
}
