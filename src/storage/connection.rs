use crate::error::StorageError;
use log::debug;
use rusqlite::Connection;

// Embed migrations from the migrations directory
refinery::embed_migrations!("migrations");

/// Opens the store database and runs migrations
pub fn init_connection(db_path: &str) -> Result<Connection, StorageError> {
    let mut conn = Connection::open(db_path)?;

    migrations::runner()
        .run(&mut conn)
        .map_err(|e| StorageError::Migration(e.to_string()))?;
    debug!("Migrations completed successfully for {}", db_path);

    Ok(conn)
}
