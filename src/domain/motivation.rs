/// Motivational message shown under the counter
///
/// The branches are evaluated in a fixed order and the first match wins.
/// For small goals the "encouragement" and "goal reached" ranges can touch,
/// so the order is part of the behavior and must not be rearranged.

use std::fmt;
use serde::Serialize;

/// Which message the screen should show for a given count and goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Motivation {
    /// Nothing logged yet today
    StartOfDay,
    /// Less than half of the goal
    Encouragement,
    /// At the goal or up to two glasses past it
    GoalReached,
    /// More than two glasses past the goal
    Champion,
    /// Past the half-way mark but not there yet
    Remaining { glasses: u32 },
}

impl Motivation {
    /// Pick the message for `count` glasses against `goal`
    pub fn select(count: u32, goal: u32) -> Self {
        let stretch = goal.saturating_add(2);

        if count == 0 {
            Motivation::StartOfDay
        } else if count < goal / 2 {
            Motivation::Encouragement
        } else if (goal..=stretch).contains(&count) {
            Motivation::GoalReached
        } else if count > stretch {
            Motivation::Champion
        } else {
            Motivation::Remaining { glasses: goal - count }
        }
    }

    /// Text shown to the user
    pub fn message(&self) -> String {
        match self {
            Motivation::StartOfDay => "Start your day with a glass of water! 🌅".to_string(),
            Motivation::Encouragement => "Keep it up! 💪".to_string(),
            Motivation::GoalReached => "Excellent! Goal reached! 🎉".to_string(),
            Motivation::Champion => "You're a champion today! 🏆".to_string(),
            Motivation::Remaining { glasses } => format!(
                "Only {} glass{} to go! You can do it!",
                glasses,
                if *glasses == 1 { "" } else { "es" }
            ),
        }
    }
}

impl fmt::Display for Motivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
