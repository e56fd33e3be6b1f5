/// Daily counter store
///
/// Keeps today's glass count, the daily goal and the date the count belongs
/// to. Reads never fail: a missing, unreadable or wrongly typed entry reads
/// as its default. Writes report their errors to the caller.

use crate::domain::{Clock, SystemClock, DEFAULT_GOAL};
use crate::storage::{KeyValueStore, StorageError, StoredValue};

/// Key holding today's glass count
pub const KEY_WATER_COUNT: &str = "water_count";
/// Key holding the daily goal
pub const KEY_DAILY_GOAL: &str = "daily_goal";
/// Key holding the `YYYY-MM-DD` date the count was last valid on
pub const KEY_LAST_UPDATE_DATE: &str = "last_update_date";

/// Persistent counter state with a daily rollover
///
/// Whether the stored count is stale is never cached: every call to
/// `reset_if_new_day` compares the stored date against the clock again.
pub struct DailyCounterStore<K: KeyValueStore, C: Clock = SystemClock> {
    kv: K,
    clock: C,
}

impl<K: KeyValueStore> DailyCounterStore<K, SystemClock> {
    /// Create a store that uses the local wall clock
    pub fn new(kv: K) -> Self {
        Self::with_clock(kv, SystemClock)
    }
}

impl<K: KeyValueStore, C: Clock> DailyCounterStore<K, C> {
    /// Create a store with an explicit clock
    pub fn with_clock(kv: K, clock: C) -> Self {
        Self { kv, clock }
    }

    /// The clock deciding what "today" is
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Glasses logged today, 0 if unset
    pub fn get_count(&self) -> u32 {
        self.read_u32(KEY_WATER_COUNT, 0)
    }

    /// Store today's glass count as given
    pub fn set_count(&self, count: u32) -> Result<(), StorageError> {
        self.kv.put(KEY_WATER_COUNT, StoredValue::Integer(i64::from(count)))
    }

    /// Daily goal, 10 if unset
    pub fn get_goal(&self) -> u32 {
        self.read_u32(KEY_DAILY_GOAL, DEFAULT_GOAL)
    }

    /// Store the daily goal as given
    pub fn set_goal(&self, goal: u32) -> Result<(), StorageError> {
        self.kv.put(KEY_DAILY_GOAL, StoredValue::Integer(i64::from(goal)))
    }

    /// Date of the last rollover, empty if the store was never initialized
    pub fn get_last_update_date(&self) -> String {
        match self.kv.get(KEY_LAST_UPDATE_DATE) {
            Ok(Some(StoredValue::Text(date))) => date,
            Ok(None) => String::new(),
            Ok(Some(other)) => {
                tracing::warn!(
                    "Ignoring {} value for '{}', expected text",
                    other.type_name(),
                    KEY_LAST_UPDATE_DATE
                );
                String::new()
            }
            Err(e) => {
                tracing::warn!("Failed to read '{}': {}", KEY_LAST_UPDATE_DATE, e);
                String::new()
            }
        }
    }

    /// Store the date of the last rollover
    pub fn set_last_update_date(&self, date: &str) -> Result<(), StorageError> {
        self.kv.put(KEY_LAST_UPDATE_DATE, StoredValue::Text(date.to_string()))
    }

    /// Zero the count if the stored date is not today
    ///
    /// Returns `true` when the rollover happened. Repeated calls on the same
    /// day return `false` and leave the count alone.
    pub fn reset_if_new_day(&self) -> Result<bool, StorageError> {
        let today = self.clock.today_string();
        let last_date = self.get_last_update_date();

        if last_date == today {
            return Ok(false);
        }

        self.set_count(0)?;
        self.set_last_update_date(&today)?;

        if last_date.is_empty() {
            tracing::info!("Initialized water counter for {}", today);
        } else {
            tracing::info!("New day {} (last update {}), counter reset", today, last_date);
        }
        Ok(true)
    }

    fn read_u32(&self, key: &str, default: u32) -> u32 {
        match self.kv.get(key) {
            Ok(Some(StoredValue::Integer(value))) => match u32::try_from(value) {
                Ok(value) => value,
                Err(_) => {
                    tracing::warn!("Ignoring out of range value {} for '{}'", value, key);
                    default
                }
            },
            Ok(None) => default,
            Ok(Some(other)) => {
                tracing::warn!("Ignoring {} value for '{}', expected integer", other.type_name(), key);
                default
            }
            Err(e) => {
                tracing::warn!("Failed to read '{}': {}", key, e);
                default
            }
        }
    }
}
