//! File backend implementation.
//!
//! Each key lives in `<dir>/<key>.json`. Writes go to a temporary file that
//! is renamed over the target, so a crash mid-write leaves the previous value
//! intact.

use crate::core::{Error, Result};
use crate::store::backend::{BackendType, KeyValueStore};
use crate::store::config::FileStoreConfig;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Directory-backed store.
///
/// The directory is created lazily on the first write.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    dir_ensured: AtomicBool,
}

impl FileStore {
    /// Create a store rooted at `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref().to_path_buf();
        let exists = dir.is_dir();
        Self {
            dir,
            dir_ensured: AtomicBool::new(exists),
        }
    }

    /// Create a store from configuration.
    pub fn from_config(config: &FileStoreConfig) -> Self {
        Self::new(&config.dir)
    }

    /// Root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn ensure_dir(&self) -> Result<()> {
        if self.dir_ensured.load(Ordering::Relaxed) {
            return Ok(());
        }
        std::fs::create_dir_all(&self.dir)?;
        self.dir_ensured.store(true, Ordering::Relaxed);
        Ok(())
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\', '\0']);
        if !valid {
            return Err(Error::Store(format!("key {:?} is not a valid file name", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        self.ensure_dir()?;

        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, value)?;
        std::fs::rename(&temp_path, &path).inspect_err(|_| {
            let _ = std::fs::remove_file(&temp_path);
        })?;

        debug!(key, path = ?path, "Value written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn backend_type(&self) -> BackendType {
        BackendType::File
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(temp_dir.path());

        assert_eq!(store.get("space-enabled-plugins").unwrap(), None);
        store.set("space-enabled-plugins", r#"{"p1":true}"#).unwrap();
        assert_eq!(
            store.get("space-enabled-plugins").unwrap().as_deref(),
            Some(r#"{"p1":true}"#)
        );

        store.remove("space-enabled-plugins").unwrap();
        assert_eq!(store.get("space-enabled-plugins").unwrap(), None);
    }

    #[test]
    fn test_file_store_lazy_dir_creation() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("state");
        let store = FileStore::new(&dir);

        assert!(!dir.exists());
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert!(dir.join("k.json").exists());
    }

    #[test]
    fn test_file_store_atomic_write() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(temp_dir.path());
        store.set("k", "v").unwrap();

        assert!(!temp_dir.path().join("k.json.tmp").exists());
        assert!(temp_dir.path().join("k.json").exists());
    }

    #[test]
    fn test_file_store_rejects_path_keys() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(temp_dir.path());

        assert!(matches!(store.set("../escape", "v"), Err(Error::Store(_))));
        assert!(matches!(store.get(""), Err(Error::Store(_))));
    }

    #[test]
    fn test_remove_missing_key() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(temp_dir.path());
        store.remove("never-written").unwrap();
    }
}
