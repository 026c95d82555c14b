//! Goal direction of a plan.

use serde::{Deserialize, Serialize};

/// Whether a plan aims to gain or lose weight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GoalDirection {
    /// Target weight is strictly above the starting weight
    Gain,

    /// Target weight is at or below the starting weight
    Lose,
}

impl GoalDirection {
    /// Classifies a pair of weights.
    ///
    /// `Gain` only when `target > current`; equal weights classify as `Lose`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scales_core::models::GoalDirection;
    ///
    /// assert_eq!(GoalDirection::between(70.0, 75.0), GoalDirection::Gain);
    /// assert_eq!(GoalDirection::between(80.0, 75.0), GoalDirection::Lose);
    /// assert_eq!(GoalDirection::between(75.0, 75.0), GoalDirection::Lose);
    /// ```
    pub fn between(current: f64, target: f64) -> Self {
        if target > current {
            GoalDirection::Gain
        } else {
            GoalDirection::Lose
        }
    }

    /// Verb used in user-facing messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalDirection::Gain => "gain",
            GoalDirection::Lose => "lose",
        }
    }
}

