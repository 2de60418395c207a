pub mod collections;
pub mod connection;
pub mod memory_store;
pub mod sqlite_store;

use crate::error::StorageError;

pub use collections::{
    HISTORY_KEY, WRONG_ANSWERS_KEY, backup_key, erase_collection, load_collection,
    save_collection,
};
pub use memory_store::MemoryStore;
pub use sqlite_store::SqliteStore;

/// Persistent key-value storage addressed by fixed string keys
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}
