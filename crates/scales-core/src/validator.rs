//! Feasibility check for new weight plans.
//!
//! A plan is rejected when it asks for more than [`MAX_WEEKLY_RATE_KG`] of
//! change per week. Rejections carry the shortest duration that would have
//! been accepted so the user can retry with a realistic timeline.

use crate::{
    error::{Result, TrackerError},
    models::GoalDirection,
};

/// Maximum safe change of body weight per week, in kg.
pub const MAX_WEEKLY_RATE_KG: f64 = 2.5;

/// Result of evaluating a candidate plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Feasibility {
    /// The plan can be saved.
    Feasible { direction: GoalDirection },

    /// The plan exceeds the weekly ceiling.
    Infeasible {
        weekly_rate: f64,
        minimum_weeks: f64,
    },
}

impl Feasibility {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Feasibility::Feasible { .. })
    }
}

/// Evaluates a candidate plan against the weekly ceiling.
///
/// # Errors
///
/// Returns `TrackerError::InvalidInput` if `duration_weeks` is not a finite
/// positive number.
///
/// # Examples
///
/// ```rust
/// use scales_core::{validator::{evaluate, Feasibility}, models::GoalDirection};
///
/// let result = evaluate(80.0, 75.0, 4.0).unwrap();
/// assert_eq!(result, Feasibility::Feasible { direction: GoalDirection::Lose });
/// ```
pub fn evaluate(current_weight: f64, target_weight: f64, duration_weeks: f64) -> Result<Feasibility> {
    if !duration_weeks.is_finite() || duration_weeks <= 0.0 {
        return Err(TrackerError::invalid_input("duration_weeks")
            .with_reason(format!("must be a positive number, got {duration_weeks}")));
    }

    let total_change = (current_weight - target_weight).abs();
    let weekly_rate = total_change / duration_weeks;

    if weekly_rate > MAX_WEEKLY_RATE_KG {
        return Ok(Feasibility::Infeasible {
            weekly_rate,
            minimum_weeks: total_change / MAX_WEEKLY_RATE_KG,
        });
    }

    Ok(Feasibility::Feasible {
        direction: GoalDirection::between(current_weight, target_weight),
    })
}
