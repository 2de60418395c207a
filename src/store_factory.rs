use crate::cli::Args;
use crate::error::StorageError;
use crate::storage::SqliteStore;

/// Store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Whether to use an in-memory store
    pub is_test_mode: bool,
    /// Custom store file path (ignored if in test mode)
    pub custom_path: Option<String>,
}

impl StoreConfig {
    /// Gets the effective store path
    pub fn get_path(&self) -> &str {
        if self.is_test_mode {
            ":memory:"
        } else {
            self.custom_path.as_deref().unwrap_or("quiz_practice.db")
        }
    }

    pub fn from_args(args: &Args) -> Self {
        StoreConfig {
            is_test_mode: args.test,
            custom_path: args
                .db_path
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
        }
    }
}

/// Factory for creating the persistent store
pub struct StoreFactory;

impl StoreFactory {
    /// Opens a store with the specified configuration
    pub fn create(config: &StoreConfig) -> Result<SqliteStore, StorageError> {
        SqliteStore::open(config.get_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::KeyValueStore;
    use std::path::PathBuf;

    fn args(test: bool, db_path: Option<&str>) -> Args {
        Args {
            test,
            db_path: db_path.map(PathBuf::from),
            questions: PathBuf::from("ipas_questions_cleaned.json"),
            override_date: None,
            in_order: false,
        }
    }

    #[test]
    fn test_default_path() {
        let config = StoreConfig::from_args(&args(false, None));
        assert_eq!(config.get_path(), "quiz_practice.db");
    }

    #[test]
    fn test_test_mode_path() {
        let config = StoreConfig::from_args(&args(true, None));
        assert_eq!(config.get_path(), ":memory:");
    }

    #[test]
    fn test_custom_path() {
        let config = StoreConfig::from_args(&args(false, Some("custom.db")));
        assert_eq!(config.get_path(), "custom.db");
    }

    #[test]
    fn test_test_mode_ignores_custom_path() {
        let config = StoreConfig::from_args(&args(true, Some("custom.db")));
        assert_eq!(config.get_path(), ":memory:");
    }

    #[test]
    fn test_create_in_memory_store() {
        let config = StoreConfig {
            is_test_mode: true,
            custom_path: None,
        };
        let store = StoreFactory::create(&config).expect("Failed to create in-memory store");
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
    }
}
