//! Thin wrapper over `window.localStorage`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::Storage;

use crate::error::StorageError;

fn local_storage() -> Result<Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

pub fn get(key: &str) -> Option<String> {
    local_storage().ok()?.get_item(key).ok().flatten()
}

pub fn set(key: &str, value: &str) -> Result<(), StorageError> {
    local_storage()?
        .set_item(key, value)
        .map_err(|_| StorageError::Write(key.to_string()))
}

pub fn remove(key: &str) {
    if let Ok(storage) = local_storage() {
        storage.remove_item(key).ok();
    }
}

pub fn get_json<T: DeserializeOwned>(key: &str) -> Result<Option<T>, StorageError> {
    match get(key) {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        None => Ok(None),
    }
}

pub fn set_json<T: Serialize>(key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Serialize {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    set(key, &raw)
}
