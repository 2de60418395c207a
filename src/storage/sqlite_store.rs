use super::KeyValueStore;
use super::connection::init_connection;
use crate::error::StorageError;
use log::debug;
use rusqlite::{Connection, params};

/// Key-value store backed by a single SQLite table
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the store at `db_path`; `:memory:` gives a throwaway store
    pub fn open(db_path: &str) -> Result<Self, StorageError> {
        let conn = init_connection(db_path)?;
        Ok(SqliteStore { conn })
    }

    #[cfg(test)]
    pub fn count(&self) -> Result<i64, StorageError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM kv_store", [], |row| row.get(0))?;
        Ok(count)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv_store WHERE key = ?1")?;

        let mut rows = stmt.query([key])?;

        if let Some(row) = rows.next()? {
            Ok(Some(row.get(0)?))
        } else {
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        debug!("Writing {} byte(s) to key '{}'", value.len(), key);
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE
             SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value],
        )?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        debug!("Deleting key '{}'", key);
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_store() -> SqliteStore {
        SqliteStore::open(":memory:").expect("Failed to create test store")
    }

    #[test]
    fn test_get_missing_key() {
        let store = create_test_store();
        assert_eq!(store.get("quiz_history").unwrap(), None);
    }

    #[test]
    fn test_set_and_get() {
        let store = create_test_store();
        store.set("quiz_history", "[]").unwrap();
        assert_eq!(store.get("quiz_history").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_set_overwrites() {
        let store = create_test_store();
        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("second".to_string()));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_delete() {
        let store = create_test_store();
        store.set("k", "v").unwrap();
        store.delete("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_delete_missing_key_is_ok() {
        let store = create_test_store();
        assert!(store.delete("never_written").is_ok());
    }

    #[test]
    fn test_keys_are_independent() {
        let store = create_test_store();
        store.set("quiz_history", "[1]").unwrap();
        store.set("wrong_answers", "[2]").unwrap();
        store.delete("quiz_history").unwrap();
        assert_eq!(store.get("wrong_answers").unwrap(), Some("[2]".to_string()));
    }

    #[test]
    fn test_file_store_persists_between_opens() {
        let path = std::env::temp_dir().join(format!(
            "quiz_practice_sqlite_store_{}.db",
            std::process::id()
        ));
        let path_str = path.to_str().unwrap().to_string();
        let _ = std::fs::remove_file(&path);

        {
            let store = SqliteStore::open(&path_str).unwrap();
            store.set("quiz_history", "[\"saved\"]").unwrap();
        }

        let reopened = SqliteStore::open(&path_str).unwrap();
        assert_eq!(
            reopened.get("quiz_history").unwrap(),
            Some("[\"saved\"]".to_string())
        );
        drop(reopened);
        let _ = std::fs::remove_file(&path);
    }
}
