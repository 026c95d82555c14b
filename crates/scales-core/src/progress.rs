//! Progress computation for reported weights.
//!
//! [`assess`] is the pure half of the progress engine: it compares a newly
//! reported weight with the plan and the previous report. Persisting the
//! report and clearing history on completion is done by
//! [`Database::record_weight`](crate::db::Database::record_weight).

use jiff::civil::Date;

use crate::{
    error::Result,
    models::{GoalDirection, Plan, ProgressReport},
};

/// Smallest favourable change, in kg, that counts as a milestone.
pub const MILESTONE_THRESHOLD_KG: f64 = 0.05;

/// Computes the progress report for `reported_weight`.
///
/// `previous_weight` is the most recent entry of the weight history, or
/// `None` when history is empty, in which case the report is compared with
/// itself and never registers a milestone.
///
/// # Errors
///
/// Returns `TrackerError::Date` if the day difference between `today` and the
/// plan start cannot be computed.
pub fn assess(
    plan: &Plan,
    previous_weight: Option<f64>,
    reported_weight: f64,
    today: Date,
) -> Result<ProgressReport> {
    let direction = plan.direction();
    let target = plan.target_weight;
    let previous = previous_weight.unwrap_or(reported_weight);

    let (remaining, goal_reached, milestone_delta) = match direction {
        GoalDirection::Lose => (
            (reported_weight - target).max(0.0),
            reported_weight <= target,
            previous - reported_weight,
        ),
        GoalDirection::Gain => (
            (target - reported_weight).max(0.0),
            reported_weight >= target,
            reported_weight - previous,
        ),
    };

    let days_elapsed = i64::from(today.since(plan.start_date)?.get_days());
    let days_remaining = plan.total_days().saturating_sub(days_elapsed).max(0);

    Ok(ProgressReport {
        reported_weight,
        target_weight: target,
        direction,
        remaining,
        days_remaining,
        milestone_delta,
        milestone_achieved: milestone_delta >= MILESTONE_THRESHOLD_KG,
        goal_reached,
    })
}
