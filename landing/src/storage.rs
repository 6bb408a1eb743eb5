// localStorage-backed key/value store for the newsletter list

use travelworld_forms::StorageError;
use travelworld_forms::newsletter::KeyValueStore;

/// `window.localStorage`, looked up on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}
