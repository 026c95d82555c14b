//! Markdown overview of a plan and its weight history.

use std::fmt;

use super::Decimal;
use crate::models::Plan;

/// Plan details followed by the logged weights, for terminal output.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use scales_core::{display::PlanOverview, Plan, UserProfile};
///
/// let plan = Plan {
///     user_id: 1,
///     current_weight: 80.0,
///     target_weight: 75.0,
///     duration_weeks: 4.0,
///     start_date: date(2024, 1, 1),
///     profile: UserProfile::default(),
/// };
///
/// let text = PlanOverview::new(&plan, &[80.0, 79.1]).to_string();
/// assert!(text.contains("**Target:** 75.0 kg (lose)"));
/// assert!(text.contains("1. 80.00 kg"));
/// ```
pub struct PlanOverview<'a> {
    pub plan: &'a Plan,
    pub weights: &'a [f64],
}

impl<'a> PlanOverview<'a> {
    pub fn new(plan: &'a Plan, weights: &'a [f64]) -> Self {
        Self { plan, weights }
    }
}

impl fmt::Display for PlanOverview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.plan;
        writeln!(f, "# Weight plan")?;
        writeln!(f)?;
        writeln!(f, "- **Started:** {}", plan.start_date)?;
        writeln!(f, "- **Starting weight:** {} kg", Decimal(plan.current_weight))?;
        writeln!(
            f,
            "- **Target:** {} kg ({})",
            Decimal(plan.target_weight),
            plan.direction().as_str()
        )?;
        writeln!(
            f,
            "- **Timeline:** {} weeks ({} days)",
            Decimal(plan.duration_weeks),
            plan.total_days()
        )?;
        writeln!(f)?;
        writeln!(f, "## History")?;
        writeln!(f)?;

        if self.weights.is_empty() {
            writeln!(f, "No weights logged since the last goal was reached.")?;
        }
        for (i, weight) in self.weights.iter().enumerate() {
            writeln!(f, "{}. {weight:.2} kg", i + 1)?;
        }
        Ok(())
    }
}
