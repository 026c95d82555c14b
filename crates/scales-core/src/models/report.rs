//! Progress report produced for every accepted weight.

use serde::{Deserialize, Serialize};

use super::GoalDirection;

/// Outcome of one weight report against the active plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProgressReport {
    /// The weight that was reported
    pub reported_weight: f64,

    pub target_weight: f64,

    pub direction: GoalDirection,

    /// Distance still to cover, never negative
    pub remaining: f64,

    /// Days left in the plan, never negative
    pub days_remaining: i64,

    /// Change since the previous report, positive when it moves toward the
    /// goal
    pub milestone_delta: f64,

    /// Whether `milestone_delta` clears the noise threshold
    pub milestone_achieved: bool,

    /// Whether the target weight has been reached
    pub goal_reached: bool,
}
