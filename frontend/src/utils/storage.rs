use crate::error::StorageError;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use web_sys::{Storage, Window};

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Minimal string key-value capability backing the persisted preferences.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, looked up on every call since access can start
/// failing mid-session (quota, privacy settings).
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()
            .map_err(StorageError::Unavailable)?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable(format!("read of {key} denied")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()
            .map_err(StorageError::Unavailable)?
            .set_item(key, value)
            .map_err(|_| StorageError::Rejected(format!("write of {key} denied")))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        local_storage()
            .map_err(StorageError::Unavailable)?
            .remove_item(key)
            .map_err(|_| StorageError::Rejected(format!("removal of {key} denied")))
    }
}

/// In-memory store. Can be switched offline to mimic a browser that refuses
/// storage access.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    unavailable: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        let store = Self::default();
        store.set_available(false);
        store
    }

    pub fn set_available(&self, available: bool) {
        self.unavailable.set(!available);
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.unavailable.get() {
            Err(StorageError::Unavailable("memory store offline".into()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
