mod common;

use std::sync::Arc;

use common::create_test_tracker;
use jiff::civil::date;
use scales_core::{GoalDirection, IntakeState};

#[tokio::test]
async fn test_gain_plan_conversation() {
    let (_temp_dir, tracker) = create_test_tracker(date(2024, 6, 1)).await;
    let user = 55;

    let mut replies = Vec::new();
    for text in ["/plan", "60", "63.5", "3", "60.8", "60.82", "63.6"] {
        replies.push(
            tracker
                .handle_message(user, text)
                .await
                .expect("Failed to handle message"),
        );
    }

    assert_eq!(
        replies[3].as_deref(),
        Some("Plan saved! Target: 63.5 kg. Timeline: 3.0 weeks. Starting today! Goal: gain weight")
    );
    assert_eq!(
        replies[4].as_deref(),
        Some(
            "Weight logged: 60.80 kg. Target: 63.50 kg. Days left: 21. Remaining to gain: 2.70 kg.\n\
             Awesome! You gained 0.80 kg since last time!"
        )
    );
    // 0.02 kg is noise
    assert_eq!(
        replies[5].as_deref(),
        Some("Weight logged: 60.82 kg. Target: 63.50 kg. Days left: 21. Remaining to gain: 2.68 kg.")
    );
    let last = replies[6].as_deref().expect("Expected progress reply");
    assert!(last.contains("Awesome! You gained 2.78 kg since last time!"));
    assert!(last.contains("AMAZING! You've reached your target weight!"));

    let plan = tracker
        .get_plan(user)
        .await
        .expect("Failed to get plan")
        .expect("Plan should exist");
    assert_eq!(plan.direction(), GoalDirection::Gain);
}

#[tokio::test]
async fn test_new_plan_overwrites_old_one() {
    let (_temp_dir, tracker) = create_test_tracker(date(2024, 6, 1)).await;
    let user = 8;

    for text in ["/plan", "90", "85", "4", "89", "/plan", "89", "87", "2"] {
        tracker
            .handle_message(user, text)
            .await
            .expect("Failed to handle message");
    }

    let plan = tracker
        .get_plan(user)
        .await
        .expect("Failed to get plan")
        .expect("Plan should exist");
    assert_eq!(plan.current_weight, 89.0);
    assert_eq!(plan.target_weight, 87.0);
    assert_eq!(
        tracker.get_weights(user).await.expect("Failed to get weights"),
        vec![89.0]
    );
}

#[tokio::test]
async fn test_concurrent_reports_are_all_recorded() {
    let (_temp_dir, tracker) = create_test_tracker(date(2024, 6, 1)).await;
    let tracker = Arc::new(tracker);
    let user = 12;

    for text in ["/plan", "100", "90", "8"] {
        tracker
            .handle_message(user, text)
            .await
            .expect("Failed to handle message");
    }

    let mut handles = Vec::new();
    for i in 0..10_i32 {
        let tracker = Arc::clone(&tracker);
        handles.push(tokio::spawn(async move {
            tracker
                .handle_message(user, &format!("{}", 99.0 - f64::from(i) * 0.1))
                .await
        }));
    }
    for handle in handles {
        let reply = handle
            .await
            .expect("Task panicked")
            .expect("Failed to handle message");
        assert!(reply.is_some());
    }

    let weights = tracker.get_weights(user).await.expect("Failed to get weights");
    assert_eq!(weights.len(), 11);
    assert_eq!(weights[0], 100.0);
}

#[tokio::test]
async fn test_intake_state_reports_open_question() {
    let (_temp_dir, tracker) = create_test_tracker(date(2024, 6, 1)).await;

    assert_eq!(tracker.intake_state(3).await, None);
    tracker
        .handle_message(3, "/plan")
        .await
        .expect("Failed to handle message");
    tracker
        .handle_message(3, "72")
        .await
        .expect("Failed to handle message");

    assert_eq!(
        tracker.intake_state(3).await,
        Some(IntakeState::AwaitingTargetWeight)
    );
}
