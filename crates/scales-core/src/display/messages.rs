//! Intake outcomes and fixed replies.

use std::fmt;

use super::Decimal;
use crate::models::Plan;

/// Reply to a weight report sent before any plan exists.
pub const NO_PLAN: &str = "You need to set a plan first.";

/// Reply to `/cancel` during an intake.
pub const PLAN_CANCELLED: &str = "Plan setup cancelled.";

/// Reply to `/cancel` with no intake open.
pub const NOTHING_TO_CANCEL: &str = "Nothing to cancel.";

/// Rejection of a plan that changes weight too fast.
#[derive(Debug, Clone, Copy)]
pub struct Rejection {
    pub weekly_rate: f64,
    pub minimum_weeks: f64,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "This plan is impossible. You're trying to change {:.2} kg/week. \
             Minimum safe time: {:.1} weeks. \
             Please restart planning and set a realistic timeline.",
            self.weekly_rate, self.minimum_weeks
        )
    }
}

/// Confirmation for a newly saved plan.
#[derive(Debug, Clone, Copy)]
pub struct PlanSaved<'a>(pub &'a Plan);

impl fmt::Display for PlanSaved<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        write!(
            f,
            "Plan saved! Target: {} kg. Timeline: {} weeks. Starting today! Goal: {} weight",
            Decimal(plan.target_weight),
            Decimal(plan.duration_weeks),
            plan.direction().as_str()
        )
    }
}
