/// Core types and constants used throughout the domain layer
///
/// This module defines the serving sizes a user can log, the direction of a
/// goal adjustment, and the counter operations that the tools layer applies
/// to the values it reads from the store.

use serde::{Deserialize, Serialize};
use crate::domain::DomainError;

/// Goal used when nothing has been stored yet, and the target of a goal reset
pub const DEFAULT_GOAL: u32 = 10;

/// Smallest goal a user can adjust down to
pub const MIN_GOAL: u32 = 1;

/// Pulse length when a glass is removed
pub const REMOVE_PULSE_MS: u64 = 30;

/// How many glasses are logged in one action
///
/// The tracker has exactly two "add" buttons: one glass and two glasses.
/// Each has its own pulse length so the user can feel the difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Serving {
    /// One glass
    Single,
    /// Two glasses at once
    Double,
}

impl Serving {
    /// Map a glass count from a request onto a serving
    pub fn from_glasses(glasses: u64) -> Result<Self, DomainError> {
        match glasses {
            1 => Ok(Serving::Single),
            2 => Ok(Serving::Double),
            other => Err(DomainError::InvalidValue {
                message: format!("Can only add 1 or 2 glasses at a time, got {}", other),
            }),
        }
    }

    /// Number of glasses this serving adds
    pub fn glasses(&self) -> u32 {
        match self {
            Serving::Single => 1,
            Serving::Double => 2,
        }
    }

    /// Haptic pulse length for this serving
    pub fn pulse_ms(&self) -> u64 {
        match self {
            Serving::Single => 50,
            Serving::Double => 100,
        }
    }
}

/// Which way to move the daily goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalDirection {
    Increase,
    Decrease,
}

impl GoalDirection {
    /// Parse a direction string ("increase"/"decrease", also "+"/"-")
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.trim().to_lowercase().as_str() {
            "increase" | "up" | "+" => Ok(GoalDirection::Increase),
            "decrease" | "down" | "-" => Ok(GoalDirection::Decrease),
            other => Err(DomainError::InvalidValue {
                message: format!("Goal direction must be 'increase' or 'decrease', got '{}'", other),
            }),
        }
    }
}

/// Count after logging a serving
pub fn add_serving(count: u32, serving: Serving) -> u32 {
    count.saturating_add(serving.glasses())
}

/// Count after removing one glass, or `None` when there is nothing to remove
pub fn remove_glass(count: u32) -> Option<u32> {
    if count > 0 {
        Some(count - 1)
    } else {
        None
    }
}

/// Goal after an adjustment, or `None` when the goal is already at its floor
pub fn adjust_goal(goal: u32, direction: GoalDirection) -> Option<u32> {
    match direction {
        GoalDirection::Increase => Some(goal.saturating_add(1)),
        GoalDirection::Decrease if goal > MIN_GOAL => Some(goal - 1),
        GoalDirection::Decrease => None,
    }
}
