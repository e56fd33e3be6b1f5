/// Basic integration tests
use water_counter_mcp::*;
use chrono::NaiveDate;
use tempfile::NamedTempFile;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        {
            let storage = SqliteStorage::new(db_path.clone()).expect("Failed to open storage");
            let store = DailyCounterStore::with_clock(storage, FixedClock::new(day(1)));
            store.reset_if_new_day().unwrap();
            store.set_count(6).unwrap();
            store.set_goal(8).unwrap();
        }

        let storage = SqliteStorage::new(db_path).expect("Failed to reopen storage");
        let store = DailyCounterStore::with_clock(storage, FixedClock::new(day(1)));

        // Same day: nothing is reset
        assert!(!store.reset_if_new_day().unwrap());
        assert_eq!(store.get_count(), 6);
        assert_eq!(store.get_goal(), 8);
        assert_eq!(store.get_last_update_date(), "2024-06-01");
    }

    #[test]
    fn test_restart_on_next_day_resets_count_only() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        {
            let storage = SqliteStorage::new(db_path.clone()).unwrap();
            let store = DailyCounterStore::with_clock(storage, FixedClock::new(day(1)));
            let feedback = RecordingFeedback::new();
            add_water(&store, &feedback, AddWaterParams { glasses: Some(2) }).unwrap();
            adjust_daily_goal(&store, AdjustGoalParams { direction: "increase".to_string() }).unwrap();
        }

        let storage = SqliteStorage::new(db_path).unwrap();
        let store = DailyCounterStore::with_clock(storage, FixedClock::new(day(2)));
        let response = get_status(&store).unwrap();

        assert!(response.changed);
        assert_eq!(response.snapshot.count, 0);
        assert_eq!(response.snapshot.goal, 11);
        assert_eq!(response.snapshot.date, "2024-06-02");
    }

    #[test]
    fn test_a_day_of_drinking() {
        let store = DailyCounterStore::with_clock(
            SqliteStorage::in_memory().unwrap(),
            FixedClock::new(day(3)),
        );
        let feedback = RecordingFeedback::new();

        let response = get_status(&store).unwrap();
        assert_eq!(response.snapshot.motivation, Motivation::StartOfDay);

        // Removing at zero does nothing
        let response = remove_water(&store, &feedback).unwrap();
        assert!(!response.changed);
        assert_eq!(response.snapshot.count, 0);

        add_water(&store, &feedback, AddWaterParams::default()).unwrap();
        add_water(&store, &feedback, AddWaterParams { glasses: Some(2) }).unwrap();
        let response = get_status(&store).unwrap();
        assert_eq!(response.snapshot.count, 3);
        assert_eq!(response.snapshot.motivation, Motivation::Encouragement);

        for _ in 0..2 {
            add_water(&store, &feedback, AddWaterParams { glasses: Some(2) }).unwrap();
        }
        let response = get_status(&store).unwrap();
        assert_eq!(response.snapshot.count, 7);
        assert_eq!(response.snapshot.motivation, Motivation::Remaining { glasses: 3 });
        assert!(response.message.contains("Only 3 glasses to go"));

        for _ in 0..3 {
            add_water(&store, &feedback, AddWaterParams::default()).unwrap();
        }
        let response = get_status(&store).unwrap();
        assert_eq!(response.snapshot.count, 10);
        assert!(response.snapshot.goal_reached);
        assert_eq!(response.snapshot.progress_percent, 100);
        assert_eq!(response.snapshot.motivation, Motivation::GoalReached);

        let response = add_water(&store, &feedback, AddWaterParams { glasses: Some(2) }).unwrap();
        assert_eq!(response.snapshot.motivation, Motivation::GoalReached);
        let response = add_water(&store, &feedback, AddWaterParams::default()).unwrap();
        assert_eq!(response.snapshot.count, 13);
        assert_eq!(response.snapshot.motivation, Motivation::Champion);

        let response = remove_water(&store, &feedback).unwrap();
        assert_eq!(response.snapshot.count, 12);

        let response = reset_water(&store).unwrap();
        assert_eq!(response.snapshot.count, 0);

        assert_eq!(
            feedback.pulses(),
            vec![50, 100, 100, 100, 50, 50, 50, 100, 50, 30]
        );
    }

    #[tokio::test]
    async fn test_server_reopens_same_database() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        let server = WaterCounterServer::new(db_path.clone())
            .await
            .expect("Failed to create first server");
        server.store().set_count(4).unwrap();
        drop(server);

        let server2 = WaterCounterServer::new(db_path)
            .await
            .expect("Failed to create second server");
        assert_eq!(server2.store().get_count(), 4);
    }

    #[test]
    fn test_storage_interface() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let storage = SqliteStorage::new(temp_file.path().to_path_buf())
            .expect("Failed to create storage");

        let kv: &dyn KeyValueStore = &storage;
        kv.put(KEY_WATER_COUNT, StoredValue::Integer(3)).unwrap();
        assert_eq!(kv.get(KEY_WATER_COUNT).unwrap(), Some(StoredValue::Integer(3)));
    }
}
