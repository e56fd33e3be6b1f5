/// Basic unit tests to verify core functionality
use water_counter_mcp::*;
use chrono::NaiveDate;
use tempfile::NamedTempFile;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    fn memory_store() -> DailyCounterStore<SqliteStorage, FixedClock> {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        DailyCounterStore::with_clock(SqliteStorage::in_memory().unwrap(), clock)
    }

    #[test]
    fn test_empty_store_defaults() {
        let store = memory_store();
        assert_eq!(store.get_count(), 0);
        assert_eq!(store.get_goal(), DEFAULT_GOAL);
        assert_eq!(store.get_last_update_date(), "");
    }

    #[test]
    fn test_count_round_trip() {
        let store = memory_store();
        for n in [0, 1, 2, 10, 99, 12_345] {
            store.set_count(n).unwrap();
            assert_eq!(store.get_count(), n);
        }
    }

    #[test]
    fn test_reset_twice_on_same_day() {
        let store = memory_store();
        store.set_count(5).unwrap();

        store.reset_if_new_day().unwrap();
        assert_eq!(store.get_count(), 0);

        store.reset_if_new_day().unwrap();
        assert_eq!(store.get_count(), 0);
    }

    #[test]
    fn test_message_table() {
        assert_eq!(Motivation::select(0, 10), Motivation::StartOfDay);
        assert_eq!(Motivation::select(3, 10), Motivation::Encouragement);
        assert_eq!(Motivation::select(10, 10), Motivation::GoalReached);
        assert_eq!(Motivation::select(13, 10), Motivation::Champion);
        assert_eq!(Motivation::select(7, 10), Motivation::Remaining { glasses: 3 });
    }

    #[test]
    fn test_decrement_and_goal_floor() {
        assert_eq!(remove_glass(0), None);
        assert_eq!(adjust_goal(1, GoalDirection::Decrease), None);
    }

    #[test]
    fn test_progress_percentage() {
        assert_eq!(Progress::new(5, 10).percent(), 50);
    }

    #[tokio::test]
    async fn test_server_creation() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let server = WaterCounterServer::new(temp_file.path().to_path_buf()).await;
        assert!(server.is_ok());

        // Startup runs the rollover, so the date is filled in
        let server = server.unwrap();
        assert_eq!(server.store().get_last_update_date(), SystemClock.today_string());
    }

    #[test]
    fn test_storage_creation() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let storage = SqliteStorage::new(temp_file.path().to_path_buf());
        assert!(storage.is_ok());
    }

    #[test]
    fn test_storage_fails_fast_on_bad_path() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("missing").join("nested").join("prefs.db");
        let storage = SqliteStorage::new(path);
        assert!(matches!(storage, Err(StorageError::Connection(_))));
    }
}
