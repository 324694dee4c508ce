//! Small durable key-value store.
//!
//! A single JSON object on disk. Writes go to a sibling temp file and are
//! renamed into place, so a crash never leaves a half-written store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use boca_common::PlatformError;
use tracing::debug;

pub struct KeyValueStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl KeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// The store at the platform default location.
    pub fn open_default() -> Result<Self, PlatformError> {
        Ok(Self::new(crate::paths::storage_file()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, PlatformError> {
        let _guard = self.guard()?;
        Ok(self.read_all()?.remove(key))
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), PlatformError> {
        let _guard = self.guard()?;
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)?;
        debug!(key, "storage value written");
        Ok(())
    }

    /// Remove a key. Returns whether it was present.
    pub fn remove(&self, key: &str) -> Result<bool, PlatformError> {
        let _guard = self.guard()?;
        let mut entries = self.read_all()?;
        let existed = entries.remove(key).is_some();
        if existed {
            self.write_all(&entries)?;
        }
        Ok(existed)
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, ()>, PlatformError> {
        self.lock
            .lock()
            .map_err(|_| PlatformError::StorageError("storage lock poisoned".into()))
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PlatformError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                PlatformError::StorageError(format!("corrupt store {}: {e}", self.path.display()))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(PlatformError::StorageError(format!(
                "failed to read {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), PlatformError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| PlatformError::StorageError(format!("{}: {e}", parent.display())))?;
        }
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| PlatformError::StorageError(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)
            .map_err(|e| PlatformError::StorageError(format!("{}: {e}", tmp.display())))?;
        std::fs::rename(&tmp, &self.path)
            .map_err(|e| PlatformError::StorageError(format!("{}: {e}", self.path.display())))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, KeyValueStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = KeyValueStore::new(dir.path().join("nested").join("storage.json"));
        (dir, store)
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let (_dir, store) = store();
        assert_eq!(store.get("fcm_token").unwrap(), None);
    }

    #[test]
    fn set_then_get() {
        let (_dir, store) = store();
        store.set("fcm_token", "abc").unwrap();
        assert_eq!(store.get("fcm_token").unwrap().as_deref(), Some("abc"));
    }

    #[test]
    fn overwrite_keeps_other_keys() {
        let (_dir, store) = store();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.set("a", "3").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("3"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn remove_reports_presence() {
        let (_dir, store) = store();
        store.set("a", "1").unwrap();
        assert!(store.remove("a").unwrap());
        assert!(!store.remove("a").unwrap());
        assert_eq!(store.get("a").unwrap(), None);
    }

    #[test]
    fn values_survive_reopen() {
        let (dir, store) = store();
        store.set("fcm_token", "persisted").unwrap();
        drop(store);

        let reopened = KeyValueStore::new(dir.path().join("nested").join("storage.json"));
        assert_eq!(
            reopened.get("fcm_token").unwrap().as_deref(),
            Some("persisted")
        );
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let (_dir, store) = store();
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{not json").unwrap();
        assert!(matches!(
            store.get("x"),
            Err(PlatformError::StorageError(_))
        ));
    }
}
