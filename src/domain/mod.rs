/// Domain module containing the water counter rules
///
/// This module defines the pieces of the tracker that don't touch storage:
/// serving sizes, goal adjustments, progress, motivational messages, the
/// clock that decides what "today" is, and the haptic feedback capability.

pub mod clock;
pub mod feedback;
pub mod motivation;
pub mod progress;
pub mod types;

// Re-export public types for easy access
pub use clock::*;
pub use feedback::*;
pub use motivation::*;
pub use progress::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid value: {message}")]
    InvalidValue { message: String },
}
