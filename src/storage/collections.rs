use super::KeyValueStore;
use crate::error::StorageError;
use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Key holding the serialized answer history
pub const HISTORY_KEY: &str = "quiz_history";
/// Key holding the serialized wrong-answer set
pub const WRONG_ANSWERS_KEY: &str = "wrong_answers";

/// Key under which an unreadable value of `key` is set aside
pub fn backup_key(key: &str) -> String {
    format!("{}.unreadable", key)
}

/// Reads a JSON array stored under `key`.
///
/// Absent keys, read failures and malformed JSON all yield an empty collection;
/// persisted data is never a reason to fail a load. A malformed value is copied
/// to [`backup_key`] first, since the next save overwrites `key`.
pub fn load_collection<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Vec<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("Could not read '{}', starting empty: {}", key, e);
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            let backup = backup_key(key);
            warn!(
                "Ignoring malformed data under '{}' ({}), moved {} byte(s) to '{}'",
                key,
                e,
                raw.len(),
                backup
            );
            if let Err(e) = store.set(&backup, &raw) {
                warn!("Could not back up '{}': {}", key, e);
            }
            Vec::new()
        }
    }
}

/// Overwrites `key` with the JSON serialization of `items`
pub fn save_collection<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    items: &[T],
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(items)?;
    store.set(key, &raw)
}

/// Removes the persisted representation of `key` entirely
pub fn erase_collection(store: &dyn KeyValueStore, key: &str) -> Result<(), StorageError> {
    store.delete(key)
}
