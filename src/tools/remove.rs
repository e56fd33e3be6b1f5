/// Tool for taking back a logged glass
///
/// This module implements the water_remove MCP tool. The count never goes
/// below zero; removing at zero changes nothing and gives no feedback.

use crate::domain::{remove_glass, Clock, Feedback, REMOVE_PULSE_MS};
use crate::storage::{DailyCounterStore, KeyValueStore};
use crate::tools::{CounterResponse, ToolError};

/// Remove one glass using the provided store
pub fn remove_water<K: KeyValueStore, C: Clock>(
    store: &DailyCounterStore<K, C>,
    feedback: &dyn Feedback,
) -> Result<CounterResponse, ToolError> {
    store.reset_if_new_day()?;

    match remove_glass(store.get_count()) {
        Some(count) => {
            store.set_count(count)?;
            feedback.pulse(REMOVE_PULSE_MS);
            tracing::debug!("Removed a glass, count is now {}", count);
            Ok(CounterResponse::after_action(store, true, "↩️ Removed a glass"))
        }
        None => Ok(CounterResponse::after_action(
            store,
            false,
            "Nothing to remove, no glasses logged today",
        )),
    }
}
