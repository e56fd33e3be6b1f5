/// Tools for changing the daily goal
///
/// This module implements the goal_adjust and goal_reset MCP tools.

use serde::Deserialize;
use crate::domain::{adjust_goal, Clock, GoalDirection, DEFAULT_GOAL};
use crate::storage::{DailyCounterStore, KeyValueStore};
use crate::tools::{CounterResponse, ToolError};

/// Parameters for moving the goal by one glass
#[derive(Debug, Deserialize)]
pub struct AdjustGoalParams {
    pub direction: String, // "increase" or "decrease"
}

/// Move the goal up or down by one using the provided store
pub fn adjust_daily_goal<K: KeyValueStore, C: Clock>(
    store: &DailyCounterStore<K, C>,
    params: AdjustGoalParams,
) -> Result<CounterResponse, ToolError> {
    let direction = GoalDirection::parse(&params.direction)?;

    store.reset_if_new_day()?;

    match adjust_goal(store.get_goal(), direction) {
        Some(goal) => {
            store.set_goal(goal)?;
            tracing::debug!("Daily goal is now {}", goal);
            Ok(CounterResponse::after_action(
                store,
                true,
                &format!("🎯 Daily goal set to {}", goal),
            ))
        }
        None => Ok(CounterResponse::after_action(
            store,
            false,
            "The daily goal can't go below 1 glass",
        )),
    }
}

/// Put the goal back to the default using the provided store
pub fn reset_daily_goal<K: KeyValueStore, C: Clock>(
    store: &DailyCounterStore<K, C>,
) -> Result<CounterResponse, ToolError> {
    store.reset_if_new_day()?;

    let previous = store.get_goal();
    store.set_goal(DEFAULT_GOAL)?;

    Ok(CounterResponse::after_action(
        store,
        previous != DEFAULT_GOAL,
        &format!("🎯 Daily goal reset to {}", DEFAULT_GOAL),
    ))
}
