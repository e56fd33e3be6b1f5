/// Tool for logging glasses of water
///
/// This module implements the water_add MCP tool.

use serde::Deserialize;
use crate::domain::{add_serving, Clock, Feedback, Serving};
use crate::storage::{DailyCounterStore, KeyValueStore};
use crate::tools::{CounterResponse, ToolError};

/// Parameters for logging water
#[derive(Debug, Default, Deserialize)]
pub struct AddWaterParams {
    pub glasses: Option<u64>, // 1 or 2, defaults to 1
}

/// Log one or two glasses using the provided store
pub fn add_water<K: KeyValueStore, C: Clock>(
    store: &DailyCounterStore<K, C>,
    feedback: &dyn Feedback,
    params: AddWaterParams,
) -> Result<CounterResponse, ToolError> {
    let serving = Serving::from_glasses(params.glasses.unwrap_or(1))?;

    store.reset_if_new_day()?;

    let count = add_serving(store.get_count(), serving);
    store.set_count(count)?;
    feedback.pulse(serving.pulse_ms());

    tracing::debug!("Added {} glass(es), count is now {}", serving.glasses(), count);

    let action = match serving {
        Serving::Single => "💧 Added a glass of water",
        Serving::Double => "💧 Added two glasses of water",
    };
    Ok(CounterResponse::after_action(store, true, action))
}
