//! Plan model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{GoalDirection, UserProfile};

/// The single active weight goal of a user.
///
/// Plans are never edited in place. A new intake replaces the stored plan
/// wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Chat user the plan belongs to
    pub user_id: i64,

    /// Weight in kg when the plan was created
    pub current_weight: f64,

    /// Goal weight in kg
    pub target_weight: f64,

    /// Planned duration in weeks (may be fractional)
    pub duration_weeks: f64,

    /// Calendar day the plan started
    pub start_date: Date,

    /// User attributes captured at creation
    pub profile: UserProfile,
}

impl Plan {
    /// Direction of the goal, derived from the stored weights.
    pub fn direction(&self) -> GoalDirection {
        GoalDirection::between(self.current_weight, self.target_weight)
    }

    /// Whole days the plan spans (`floor(weeks * 7)`).
    pub fn total_days(&self) -> i64 {
        (self.duration_weeks * 7.0).floor() as i64
    }
}
