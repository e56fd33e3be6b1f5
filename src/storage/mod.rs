/// Storage layer for persisting the water counter
///
/// This module holds the key-value storage interface, its SQLite
/// implementation, and the `DailyCounterStore` that keeps today's count,
/// the goal and the date of the last rollover on top of it.

pub mod sqlite;
pub mod migrations;
pub mod store;

// Re-export the main storage types
pub use sqlite::*;
pub use store::*;

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Migration error: {0}")]
    Migration(String),
}

/// A value as it sits in the store
///
/// Entries are dynamically typed, so a reader may find a different type than
/// it expects. Deciding what to do with a mismatch is up to the reader.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredValue {
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl StoredValue {
    /// Short type name for log messages
    pub fn type_name(&self) -> &'static str {
        match self {
            StoredValue::Integer(_) => "integer",
            StoredValue::Real(_) => "real",
            StoredValue::Text(_) => "text",
            StoredValue::Blob(_) => "blob",
        }
    }
}

/// Trait defining a persistent key-value store with string keys
///
/// This trait keeps `DailyCounterStore` independent of SQLite, the same way
/// the preferences file of a mobile app would sit behind a small interface.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<StoredValue>, StorageError>;

    /// Store `value` under `key`, replacing whatever was there
    fn put(&self, key: &str, value: StoredValue) -> Result<(), StorageError>;
}
