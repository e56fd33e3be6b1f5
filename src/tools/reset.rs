/// Tool for clearing today's count
///
/// This module implements the water_reset MCP tool.

use crate::domain::Clock;
use crate::storage::{DailyCounterStore, KeyValueStore};
use crate::tools::{CounterResponse, ToolError};

/// Set today's count back to zero using the provided store
pub fn reset_water<K: KeyValueStore, C: Clock>(
    store: &DailyCounterStore<K, C>,
) -> Result<CounterResponse, ToolError> {
    store.reset_if_new_day()?;

    let previous = store.get_count();
    store.set_count(0)?;

    tracing::debug!("Reset counter from {}", previous);
    Ok(CounterResponse::after_action(
        store,
        previous != 0,
        "🔄 Today's count was reset",
    ))
}
