/// MCP tools for the water counter
///
/// This module contains all the MCP tools that external clients (like Claude)
/// can call. Each tool is one button of the tracker screen: it checks for a
/// new day, applies its change through the store, and returns the screen.

pub mod add;
pub mod goal;
pub mod remove;
pub mod reset;
pub mod status;

// Re-export tool functions for easy access
pub use add::*;
pub use goal::*;
pub use remove::*;
pub use reset::*;
pub use status::*;

use thiserror::Error;
use crate::domain::DomainError;
use crate::storage::StorageError;

/// Errors a tool call can produce
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("{0}")]
    Domain(#[from] DomainError),
}
