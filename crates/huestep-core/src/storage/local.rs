//! Browser `localStorage` preference store.

use super::{PreferenceStore, StorageError, StorageResult};

/// Reads and writes `window.localStorage`.
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn new() -> StorageResult<Self> {
        let window = web_sys::window().ok_or_else(|| StorageError::Other("No window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Other(format!("localStorage blocked: {:?}", e)))?
            .ok_or_else(|| StorageError::Other("localStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Io(format!("Failed to read {}: {:?}", key, e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {:?}", key, e)))
    }
}
