//! File-backed preference store for native platforms.

use super::{PreferenceStore, StorageError, StorageResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const PREFERENCES_FILE: &str = "preferences.json";

/// Stores all preferences as one JSON object in a file.
///
/// Every `set` rewrites the whole file.
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles
    lock: Mutex<()>,
}

impl FileStore {
    /// Create a store backed by `path`. The parent directory is created if needed.
    pub fn new(path: PathBuf) -> StorageResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    StorageError::Io(format!("Failed to create preferences directory: {}", e))
                })?;
            }
        }
        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    /// Create the store in the default location.
    ///
    /// On Linux: `~/.config/huestep/preferences.json`
    /// On macOS: `~/Library/Application Support/huestep/preferences.json`
    /// On Windows: `%APPDATA%\huestep\preferences.json`
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("Could not determine config directory".to_string()))?;
        Self::new(base.join("huestep").join(PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> StorageResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let json = fs::read_to_string(&self.path).map_err(|e| {
            StorageError::Io(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        serde_json::from_str(&json).map_err(|e| {
            StorageError::Serialization(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let _guard = self
            .lock
            .lock()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let _guard = self
            .lock
            .lock()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;

        // A corrupt file is replaced rather than blocking every write
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(StorageError::Serialization(e)) => {
                log::warn!("Discarding unreadable preferences: {}", e);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), value.to_string());

        let json = serde_json::to_string_pretty(&values)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| {
            StorageError::Io(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_store_set_get() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join(PREFERENCES_FILE)).unwrap();

        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_file_store_missing_file() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join(PREFERENCES_FILE)).unwrap();
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);

        FileStore::new(path.clone()).unwrap().set("theme", "dark").unwrap();
        let reopened = FileStore::new(path).unwrap();
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join(PREFERENCES_FILE)).unwrap();

        store.set("theme", "dark").unwrap();
        store.set("other", "value").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.get("other").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn test_file_store_creates_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("huestep").join(PREFERENCES_FILE);
        let store = FileStore::new(path.clone()).unwrap();
        store.set("theme", "light").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        fs::write(&path, "{not json").unwrap();

        let store = FileStore::new(path).unwrap();
        assert!(matches!(store.get("theme"), Err(StorageError::Serialization(_))));

        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }
}
