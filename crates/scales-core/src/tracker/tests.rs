//! Tests for the tracker module.

use jiff::civil::{date, Date};
use tempfile::TempDir;

use super::*;
use crate::{
    display::{NOTHING_TO_CANCEL, NO_PLAN, PLAN_CANCELLED},
    error::TrackerError,
    intake::IntakeState,
};

const USER: i64 = 1001;

/// Helper function to create a test tracker pinned to `today`
async fn create_test_tracker(temp_dir: &TempDir, today: Date) -> Tracker {
    TrackerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_clock(FixedClock(today))
        .build()
        .await
        .expect("Failed to create tracker")
}

async fn send(tracker: &Tracker, text: &str) -> Option<String> {
    tracker
        .handle_message(USER, text)
        .await
        .expect("Failed to handle message")
}

#[tokio::test]
async fn test_intake_walks_through_all_questions() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let tracker = create_test_tracker(&temp_dir, date(2024, 1, 1)).await;

    assert_eq!(
        send(&tracker, "/plan").await.as_deref(),
        Some("What's your current weight (kg)?")
    );
    assert_eq!(
        send(&tracker, "80").await.as_deref(),
        Some("What's your target weight (kg)?")
    );
    assert_eq!(
        send(&tracker, "75").await.as_deref(),
        Some("In how many weeks do you want to achieve it?")
    );
    assert_eq!(
        send(&tracker, "4").await.as_deref(),
        Some("Plan saved! Target: 75.0 kg. Timeline: 4.0 weeks. Starting today! Goal: lose weight")
    );

    let plan = tracker
        .get_plan(USER)
        .await
        .expect("Failed to get plan")
        .expect("Plan should exist");
    assert_eq!(plan.start_date, date(2024, 1, 1));
    assert_eq!(plan.profile, UserProfile::default());
    assert_eq!(
        tracker.get_weights(USER).await.expect("Failed to get weights"),
        vec![80.0]
    );
    assert_eq!(tracker.intake_state(USER).await, None);
}

#[tokio::test]
async fn test_invalid_values_reprompt_same_question() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let tracker = create_test_tracker(&temp_dir, date(2024, 1, 1)).await;

    send(&tracker, "/plan").await;
    assert_eq!(
        send(&tracker, "a lot").await.as_deref(),
        Some("What's your current weight (kg)?")
    );
    send(&tracker, "80").await;
    send(&tracker, "75").await;
    assert_eq!(
        send(&tracker, "-1").await.as_deref(),
        Some("In how many weeks do you want to achieve it?")
    );
    assert_eq!(
        tracker.intake_state(USER).await,
        Some(IntakeState::AwaitingDuration)
    );
}

#[tokio::test]
async fn test_infeasible_plan_is_not_persisted() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let tracker = create_test_tracker(&temp_dir, date(2024, 1, 1)).await;

    send(&tracker, "/plan").await;
    send(&tracker, "80").await;
    send(&tracker, "60").await;
    let reply = send(&tracker, "2").await.expect("Expected a rejection");

    assert!(reply.starts_with("This plan is impossible."));
    assert!(reply.contains("10.00 kg/week"));
    assert!(reply.contains("Minimum safe time: 8.0 weeks"));
    assert!(tracker.get_plan(USER).await.expect("Failed to get plan").is_none());
    assert_eq!(tracker.intake_state(USER).await, None);
}

#[tokio::test]
async fn test_failed_plan_write_keeps_intake_open_for_retry() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let tracker = create_test_tracker(&temp_dir, date(2024, 1, 1)).await;
    let db_path = temp_dir.path().join("test.db");
    let moved_path = temp_dir.path().join("test.db.moved");

    for text in ["/plan", "80", "75"] {
        send(&tracker, text).await;
    }

    // A directory where the database file should be makes every open fail
    std::fs::rename(&db_path, &moved_path).expect("Failed to move database");
    std::fs::create_dir(&db_path).expect("Failed to create blocking directory");

    let err = tracker
        .handle_message(USER, "4")
        .await
        .expect_err("Plan write should fail");
    assert!(matches!(err, TrackerError::Persistence { .. }));
    assert_eq!(
        tracker.intake_state(USER).await,
        Some(IntakeState::AwaitingDuration)
    );

    std::fs::remove_dir(&db_path).expect("Failed to remove blocking directory");
    std::fs::rename(&moved_path, &db_path).expect("Failed to restore database");

    assert_eq!(
        send(&tracker, "4").await.as_deref(),
        Some("Plan saved! Target: 75.0 kg. Timeline: 4.0 weeks. Starting today! Goal: lose weight")
    );
    assert_eq!(tracker.intake_state(USER).await, None);
    assert_eq!(
        tracker.get_weights(USER).await.expect("Failed to get weights"),
        vec![80.0]
    );
}

#[tokio::test]
async fn test_cancel_discards_intake() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let tracker = create_test_tracker(&temp_dir, date(2024, 1, 1)).await;

    send(&tracker, "/plan").await;
    send(&tracker, "80").await;
    assert_eq!(send(&tracker, "/cancel").await.as_deref(), Some(PLAN_CANCELLED));
    assert_eq!(tracker.intake_state(USER).await, None);

    // Numbers are weight reports again, and there is still no plan
    assert_eq!(send(&tracker, "75").await.as_deref(), Some(NO_PLAN));
    assert_eq!(
        send(&tracker, "/cancel").await.as_deref(),
        Some(NOTHING_TO_CANCEL)
    );
}

#[tokio::test]
async fn test_plan_command_restarts_open_intake() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let tracker = create_test_tracker(&temp_dir, date(2024, 1, 1)).await;

    send(&tracker, "/plan").await;
    send(&tracker, "80").await;
    send(&tracker, "75").await;
    assert_eq!(
        send(&tracker, "/start").await.as_deref(),
        Some("What's your current weight (kg)?")
    );
    assert_eq!(
        tracker.intake_state(USER).await,
        Some(IntakeState::AwaitingCurrentWeight)
    );
}

#[tokio::test]
async fn test_report_without_plan_asks_for_one() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let tracker = create_test_tracker(&temp_dir, date(2024, 1, 1)).await;

    assert_eq!(send(&tracker, "78").await.as_deref(), Some(NO_PLAN));
    assert!(tracker
        .get_weights(USER)
        .await
        .expect("Failed to get weights")
        .is_empty());
}

#[tokio::test]
async fn test_non_numeric_text_and_unknown_commands_are_ignored() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let tracker = create_test_tracker(&temp_dir, date(2024, 1, 1)).await;

    assert_eq!(send(&tracker, "hello there").await, None);
    assert_eq!(send(&tracker, "/help").await, None);
}

#[tokio::test]
async fn test_first_report_after_plan_has_no_milestone() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let tracker = create_test_tracker(&temp_dir, date(2024, 1, 1)).await;

    for text in ["/plan", "80", "75", "4"] {
        send(&tracker, text).await;
    }

    let report = tracker
        .record_weight(USER, 80.0)
        .await
        .expect("Failed to record weight");
    assert_eq!(report.milestone_delta, 0.0);
    assert!(!report.milestone_achieved);
    assert_eq!(report.days_remaining, 28);
}

#[tokio::test]
async fn test_goal_completion_clears_history_but_keeps_plan() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let tracker = create_test_tracker(&temp_dir, date(2024, 1, 1)).await;

    for text in ["/plan", "76", "75", "1"] {
        send(&tracker, text).await;
    }

    let reply = send(&tracker, "75").await.expect("Expected progress reply");
    assert!(reply.contains("Remaining to lose: 0.00 kg."));
    assert!(reply.ends_with("Time to set a new goal with /plan"));
    assert!(tracker
        .get_weights(USER)
        .await
        .expect("Failed to get weights")
        .is_empty());
    assert!(tracker.get_plan(USER).await.expect("Failed to get plan").is_some());

    // A later report against the stale plan starts a fresh history
    let report = tracker
        .record_weight(USER, 74.5)
        .await
        .expect("Failed to record weight");
    assert_eq!(report.milestone_delta, 0.0);
    assert!(report.goal_reached);
}

#[tokio::test]
async fn test_days_left_counts_from_plan_start() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let tracker = create_test_tracker(&temp_dir, date(2024, 1, 1)).await;
    for text in ["/plan", "80", "75", "4"] {
        send(&tracker, text).await;
    }

    let later = create_test_tracker(&temp_dir, date(2024, 1, 11)).await;
    let reply = later
        .handle_message(USER, "78")
        .await
        .expect("Failed to handle message")
        .expect("Expected progress reply");

    assert_eq!(
        reply,
        "Weight logged: 78.00 kg. Target: 75.00 kg. Days left: 18. Remaining to lose: 3.00 kg.\n\
         Nice work! You lost 2.00 kg since last time!"
    );
}

#[tokio::test]
async fn test_users_have_separate_conversations() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let tracker = create_test_tracker(&temp_dir, date(2024, 1, 1)).await;

    send(&tracker, "/plan").await;
    let other = tracker
        .handle_message(USER + 1, "80")
        .await
        .expect("Failed to handle message");

    assert_eq!(other.as_deref(), Some(NO_PLAN));
    assert_eq!(
        tracker.intake_state(USER).await,
        Some(IntakeState::AwaitingCurrentWeight)
    );
    assert_eq!(tracker.intake_state(USER + 1).await, None);
}
