//! Browser Storage
//!
//! `localStorage` behind the core's key/value trait.

use todo_core::{KeyValueStorage, StorageError};
use tracing::warn;

/// Handle to `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = match Self::local() {
            Ok(storage) => storage,
            Err(err) => {
                warn!(%err, "cannot read session");
                return None;
            }
        };
        storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::local()?
            .remove_item(key)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }
}
