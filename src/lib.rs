/// Public library interface for the Water Counter MCP server
///
/// This module exports the main server implementation and public types
/// that can be used by other applications or tests.

use std::path::PathBuf;
use thiserror::Error;

// Internal modules
mod domain;
mod storage;
mod tools;
mod mcp;

// Re-export public modules and types
pub use domain::*;
pub use storage::{
    DailyCounterStore, KeyValueStore, SqliteStorage, StorageError, StoredValue,
    KEY_DAILY_GOAL, KEY_LAST_UPDATE_DATE, KEY_WATER_COUNT,
};
pub use tools::*;

/// Errors that can occur during server operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] storage::StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main water counter server that implements the MCP protocol
///
/// This server owns the counter store and the feedback capability, and
/// hands both to the tools when a client presses one of the "buttons".
pub struct WaterCounterServer {
    store: DailyCounterStore<SqliteStorage>,
    feedback: Box<dyn Feedback>,
}

impl WaterCounterServer {
    /// Create a new water counter server with the specified database path
    ///
    /// This opens (or creates) the preferences database and runs the daily
    /// rollover once, so a stale count from yesterday is never shown.
    pub async fn new(db_path: PathBuf) -> Result<Self, ServerError> {
        tracing::info!("Initializing Water Counter server with database: {:?}", db_path);

        let storage = SqliteStorage::new(db_path)?;
        Self::with_parts(DailyCounterStore::new(storage), Box::new(TracingFeedback))
    }

    /// Create a server from an existing store and feedback capability
    pub fn with_parts(
        store: DailyCounterStore<SqliteStorage>,
        feedback: Box<dyn Feedback>,
    ) -> Result<Self, ServerError> {
        store.reset_if_new_day()?;

        tracing::info!(
            "Counter ready: {} of {} glasses on {}",
            store.get_count(),
            store.get_goal(),
            store.get_last_update_date()
        );

        Ok(Self { store, feedback })
    }

    /// Run the MCP server, handling JSON-RPC requests over stdin/stdout
    ///
    /// This method will block until the server is shut down or an error occurs.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!("Starting MCP server...");

        let mut mcp_server = mcp::McpServer::new(self);
        mcp_server.run().await?;

        Ok(())
    }

    /// Get a reference to the counter store (useful for testing)
    pub fn store(&self) -> &DailyCounterStore<SqliteStorage> {
        &self.store
    }

    /// Get a reference to the feedback capability
    pub fn feedback(&self) -> &dyn Feedback {
        self.feedback.as_ref()
    }
}
