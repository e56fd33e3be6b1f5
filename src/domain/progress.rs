/// Progress toward the daily goal
///
/// This is what the progress bar and the headline on the screen are built from.

use serde::Serialize;

/// Today's count measured against the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub count: u32,
    pub goal: u32,
}

impl Progress {
    pub fn new(count: u32, goal: u32) -> Self {
        Self { count, goal }
    }

    /// Fraction of the goal reached, 0.0 when the goal is zero
    ///
    /// This is not clamped: drinking past the goal gives a value above 1.0.
    pub fn fraction(&self) -> f64 {
        if self.goal > 0 {
            self.count as f64 / self.goal as f64
        } else {
            0.0
        }
    }

    /// Whole percentage for display, truncated and capped at 100
    pub fn percent(&self) -> u32 {
        if self.goal == 0 {
            return 0;
        }
        let percent = u64::from(self.count) * 100 / u64::from(self.goal);
        percent.min(100) as u32
    }

    /// Whether today's goal has been met
    pub fn is_goal_reached(&self) -> bool {
        self.count >= self.goal
    }

    /// Glasses still missing to reach the goal
    pub fn remaining(&self) -> u32 {
        self.goal.saturating_sub(self.count)
    }
}
