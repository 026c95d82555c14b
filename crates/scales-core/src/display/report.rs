//! Display implementation for progress reports.

use std::fmt;

use crate::models::{GoalDirection, ProgressReport};

impl fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weight logged: {:.2} kg. Target: {:.2} kg. Days left: {}. Remaining to {}: {:.2} kg.",
            self.reported_weight,
            self.target_weight,
            self.days_remaining,
            self.direction.as_str(),
            self.remaining
        )?;

        if self.milestone_achieved {
            match self.direction {
                GoalDirection::Lose => write!(
                    f,
                    "\nNice work! You lost {:.2} kg since last time!",
                    self.milestone_delta
                )?,
                GoalDirection::Gain => write!(
                    f,
                    "\nAwesome! You gained {:.2} kg since last time!",
                    self.milestone_delta
                )?,
            }
        }

        if self.goal_reached {
            write!(
                f,
                "\nAMAZING! You've reached your target weight! Time to set a new goal with /plan"
            )?;
        }

        Ok(())
    }
}
