/// Tool for showing today's water status
///
/// This module implements the water_status MCP tool, and the snapshot and
/// screen rendering every other tool reuses for its response.

use serde::Serialize;
use crate::domain::{Clock, Motivation, Progress};
use crate::storage::{DailyCounterStore, KeyValueStore};
use crate::tools::ToolError;

/// Everything the tracker screen shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterSnapshot {
    pub date: String,
    pub count: u32,
    pub goal: u32,
    pub progress_percent: u32,
    pub goal_reached: bool,
    pub motivation: Motivation,
}

impl CounterSnapshot {
    /// Read the current values from the store
    pub fn read<K: KeyValueStore, C: Clock>(store: &DailyCounterStore<K, C>) -> Self {
        let count = store.get_count();
        let goal = store.get_goal();
        let progress = Progress::new(count, goal);

        Self {
            date: store.get_last_update_date(),
            count,
            goal,
            progress_percent: progress.percent(),
            goal_reached: progress.is_goal_reached(),
            motivation: Motivation::select(count, goal),
        }
    }

    /// Text rendering of the tracker screen
    pub fn render(&self) -> String {
        let headline = if self.goal_reached {
            "🎉 Goal reached!".to_string()
        } else {
            format!("Goal: {} glass{}", self.goal, if self.goal == 1 { "" } else { "es" })
        };

        format!(
            "💧 Water Tracker\n🥛 {} glass{}\n{}\nProgress: {}%\n\n{}",
            self.count,
            if self.count == 1 { "" } else { "es" },
            headline,
            self.progress_percent,
            self.motivation,
        )
    }
}

/// Response returned by every counter tool
#[derive(Debug, Serialize)]
pub struct CounterResponse {
    pub success: bool,
    /// Whether the action changed a stored value
    pub changed: bool,
    pub message: String,
    pub snapshot: CounterSnapshot,
}

impl CounterResponse {
    /// Build a response with an action line on top of the rendered screen
    pub fn after_action<K: KeyValueStore, C: Clock>(
        store: &DailyCounterStore<K, C>,
        changed: bool,
        action: &str,
    ) -> Self {
        let snapshot = CounterSnapshot::read(store);
        let message = if action.is_empty() {
            snapshot.render()
        } else {
            format!("{}\n\n{}", action, snapshot.render())
        };

        Self {
            success: true,
            changed,
            message,
            snapshot,
        }
    }
}

/// Get today's status using the provided store
pub fn get_status<K: KeyValueStore, C: Clock>(
    store: &DailyCounterStore<K, C>,
) -> Result<CounterResponse, ToolError> {
    let rolled_over = store.reset_if_new_day()?;
    let action = if rolled_over { "🌅 New day, counter reset" } else { "" };

    Ok(CounterResponse::after_action(store, rolled_over, action))
}
