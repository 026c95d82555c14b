use jiff::civil::date;
use scales_core::{Database, Gender, GoalDirection, Plan, TrackerError, UserProfile};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn sample_plan(user_id: i64) -> Plan {
    Plan {
        user_id,
        current_weight: 80.0,
        target_weight: 75.0,
        duration_weeks: 4.0,
        start_date: date(2024, 1, 1),
        profile: UserProfile::default(),
    }
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();

    assert!(temp_file.path().exists());
    assert!(db.get_plan(1).expect("Failed to query plan").is_none());
    assert!(db.get_weights(1).expect("Failed to query weights").is_empty());
}

#[test]
fn test_start_plan_round_trips_every_field() {
    let (_temp_file, mut db) = create_test_db();

    let plan = Plan {
        duration_weeks: 6.5,
        profile: UserProfile {
            age: 40,
            height_cm: 165.5,
            activity_level: 1.375,
            gender: Gender::Female,
        },
        ..sample_plan(7)
    };
    db.start_plan(&plan).expect("Failed to start plan");

    let stored = db
        .get_plan(7)
        .expect("Failed to get plan")
        .expect("Plan should exist");
    assert_eq!(stored, plan);
    assert_eq!(db.get_weights(7).expect("Failed to get weights"), vec![80.0]);
}

#[test]
fn test_start_plan_replaces_previous_plan_and_history() {
    let (_temp_file, mut db) = create_test_db();

    db.start_plan(&sample_plan(1)).expect("Failed to start plan");
    db.append_weight(1, 79.0).expect("Failed to append weight");
    db.append_weight(1, 78.5).expect("Failed to append weight");

    let replacement = Plan {
        current_weight: 78.5,
        target_weight: 82.0,
        start_date: date(2024, 2, 1),
        ..sample_plan(1)
    };
    db.start_plan(&replacement).expect("Failed to replace plan");

    let stored = db
        .get_plan(1)
        .expect("Failed to get plan")
        .expect("Plan should exist");
    assert_eq!(stored.direction(), GoalDirection::Gain);
    assert_eq!(stored.start_date, date(2024, 2, 1));
    assert_eq!(db.get_weights(1).expect("Failed to get weights"), vec![78.5]);
}

#[test]
fn test_weights_keep_insertion_order() {
    let (_temp_file, db) = create_test_db();

    for weight in [80.0, 79.4, 79.9, 78.1] {
        db.append_weight(3, weight).expect("Failed to append weight");
    }

    assert_eq!(
        db.get_weights(3).expect("Failed to get weights"),
        vec![80.0, 79.4, 79.9, 78.1]
    );

    db.clear_weights(3).expect("Failed to clear weights");
    assert!(db.get_weights(3).expect("Failed to get weights").is_empty());
}

#[test]
fn test_stores_are_keyed_by_user() {
    let (_temp_file, mut db) = create_test_db();

    db.start_plan(&sample_plan(1)).expect("Failed to start plan");
    db.start_plan(&Plan {
        current_weight: 60.0,
        target_weight: 65.0,
        ..sample_plan(2)
    })
    .expect("Failed to start plan");

    db.record_weight(1, 79.0, date(2024, 1, 2))
        .expect("Failed to record weight");

    assert_eq!(db.get_weights(1).expect("Failed to get weights"), vec![80.0, 79.0]);
    assert_eq!(db.get_weights(2).expect("Failed to get weights"), vec![60.0]);
}

#[test]
fn test_record_weight_without_plan_leaves_history_alone() {
    let (_temp_file, mut db) = create_test_db();
    db.append_weight(9, 70.0).expect("Failed to append weight");

    let err = db
        .record_weight(9, 69.0, date(2024, 1, 2))
        .expect_err("Recording without a plan must fail");

    assert!(matches!(err, TrackerError::NoActivePlan { user_id: 9 }));
    assert_eq!(db.get_weights(9).expect("Failed to get weights"), vec![70.0]);
}

#[test]
fn test_record_weight_appends_progress() {
    let (_temp_file, mut db) = create_test_db();
    db.start_plan(&sample_plan(1)).expect("Failed to start plan");

    let report = db
        .record_weight(1, 78.0, date(2024, 1, 8))
        .expect("Failed to record weight");

    assert_eq!(report.remaining, 3.0);
    assert_eq!(report.milestone_delta, 2.0);
    assert!(report.milestone_achieved);
    assert!(!report.goal_reached);
    assert_eq!(report.days_remaining, 21);
    assert_eq!(db.get_weights(1).expect("Failed to get weights"), vec![80.0, 78.0]);
}

#[test]
fn test_record_weight_clears_history_on_goal() {
    let (_temp_file, mut db) = create_test_db();
    db.start_plan(&sample_plan(1)).expect("Failed to start plan");
    db.append_weight(1, 76.0).expect("Failed to append weight");

    let report = db
        .record_weight(1, 75.0, date(2024, 1, 20))
        .expect("Failed to record weight");

    assert!(report.goal_reached);
    assert_eq!(report.remaining, 0.0);
    assert!(db.get_weights(1).expect("Failed to get weights").is_empty());
    assert!(db.get_plan(1).expect("Failed to get plan").is_some());
}

#[test]
fn test_plan_survives_reopening_database() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    {
        let mut db = Database::new(temp_file.path()).expect("Failed to create test database");
        db.start_plan(&sample_plan(5)).expect("Failed to start plan");
    }

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    assert_eq!(
        db.get_plan(5).expect("Failed to get plan"),
        Some(sample_plan(5))
    );
}
