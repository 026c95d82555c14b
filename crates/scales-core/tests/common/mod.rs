use jiff::civil::Date;
use scales_core::{FixedClock, Tracker, TrackerBuilder};
use tempfile::TempDir;

/// Helper function to create a tracker on a fresh database pinned to `today`
pub async fn create_test_tracker(today: Date) -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_clock(FixedClock(today))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}
