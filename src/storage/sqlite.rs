/// SQLite implementation of the key-value storage interface
///
/// This module provides the concrete SQLite implementation for storing
/// and retrieving preference values. Every key is one row in `preferences`.

use std::path::PathBuf;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use rusqlite::types::Value;

use crate::storage::{migrations, KeyValueStore, StorageError, StoredValue};

/// SQLite-based storage implementation
///
/// This struct holds a connection to the SQLite database and implements
/// the operations defined in the KeyValueStore trait.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Create a new SQLite storage instance
    ///
    /// This opens the database file and runs any necessary migrations
    /// to ensure the schema is up to date.
    pub fn new(db_path: PathBuf) -> Result<Self, StorageError> {
        let conn = Connection::open(&db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        tracing::info!("SQLite storage initialized at: {:?}", db_path);

        Ok(Self { conn })
    }

    /// Create a storage instance that lives only in memory
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open in-memory database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteStorage {
    /// Read a preference value
    fn get(&self, key: &str) -> Result<Option<StoredValue>, StorageError> {
        let value: Option<Value> = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        Ok(match value {
            None | Some(Value::Null) => None,
            Some(Value::Integer(i)) => Some(StoredValue::Integer(i)),
            Some(Value::Real(r)) => Some(StoredValue::Real(r)),
            Some(Value::Text(s)) => Some(StoredValue::Text(s)),
            Some(Value::Blob(b)) => Some(StoredValue::Blob(b)),
        })
    }

    /// Insert or replace a preference value
    fn put(&self, key: &str, value: StoredValue) -> Result<(), StorageError> {
        let sql_value = match value {
            StoredValue::Integer(i) => Value::Integer(i),
            StoredValue::Real(r) => Value::Real(r),
            StoredValue::Text(s) => Value::Text(s),
            StoredValue::Blob(b) => Value::Blob(b),
        };

        self.conn.execute(
            "INSERT INTO preferences (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, sql_value, Utc::now().to_rfc3339()],
        )?;

        tracing::debug!("Stored preference: {}", key);
        Ok(())
    }
}
