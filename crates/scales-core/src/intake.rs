//! Conversational state machine that collects the parameters of a new plan.
//!
//! An [`IntakeSession`] asks for the current weight, the target weight and
//! the duration, one message at a time. The machine itself performs no I/O:
//! [`IntakeSession::advance`] consumes one line of user text and returns an
//! [`IntakeStep`] telling the caller what to say and whether a plan is ready
//! to be persisted.

use crate::validator::{self, Feasibility};

/// Heaviest weight, in kg, accepted as an answer or a report.
pub const MAX_WEIGHT_KG: f64 = 1000.0;

/// Longest plan, in weeks, accepted by the intake.
pub const MAX_DURATION_WEEKS: f64 = 520.0;

/// Which value the session is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntakeState {
    #[default]
    AwaitingCurrentWeight,
    AwaitingTargetWeight,
    AwaitingDuration,
}

impl IntakeState {
    /// Question asked while in this state.
    pub fn prompt(&self) -> &'static str {
        match self {
            IntakeState::AwaitingCurrentWeight => "What's your current weight (kg)?",
            IntakeState::AwaitingTargetWeight => "What's your target weight (kg)?",
            IntakeState::AwaitingDuration => "In how many weeks do you want to achieve it?",
        }
    }
}

/// Values collected by a completed intake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanDraft {
    pub current_weight: f64,
    pub target_weight: f64,
    pub duration_weeks: f64,
}

/// What the caller should do after feeding one message to the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntakeStep {
    /// Ask the question of the (possibly unchanged) current state.
    Prompt(IntakeState),

    /// The plan was rejected; the session is over and nothing is stored.
    Rejected { weekly_rate: f64, minimum_weeks: f64 },

    /// The plan passed validation and should be persisted.
    Ready(PlanDraft),
}

/// Accumulator for one in-progress intake.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntakeSession {
    state: IntakeState,
    current_weight: Option<f64>,
    target_weight: Option<f64>,
}

impl IntakeSession {
    /// Starts a session at the first question.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> IntakeState {
        self.state
    }

    /// Feeds one message to the session.
    ///
    /// Unparseable, non-positive or out-of-range input leaves the session untouched and
    /// repeats the current question. When the duration is accepted the
    /// session stays in [`IntakeState::AwaitingDuration`] so the caller can
    /// retry if persisting the returned draft fails.
    pub fn advance(&mut self, text: &str) -> IntakeStep {
        let parsed = match self.state {
            IntakeState::AwaitingDuration => parse_duration(text),
            _ => parse_weight(text),
        };
        let Some(value) = parsed else {
            return IntakeStep::Prompt(self.state);
        };

        match self.state {
            IntakeState::AwaitingCurrentWeight => {
                self.current_weight = Some(value);
                self.state = IntakeState::AwaitingTargetWeight;
                IntakeStep::Prompt(self.state)
            }
            IntakeState::AwaitingTargetWeight => {
                self.target_weight = Some(value);
                self.state = IntakeState::AwaitingDuration;
                IntakeStep::Prompt(self.state)
            }
            IntakeState::AwaitingDuration => self.finish(value),
        }
    }

    fn finish(&mut self, duration_weeks: f64) -> IntakeStep {
        let (Some(current_weight), Some(target_weight)) = (self.current_weight, self.target_weight)
        else {
            // Only reachable through a hand-built session; start over.
            *self = Self::new();
            return IntakeStep::Prompt(self.state);
        };

        match validator::evaluate(current_weight, target_weight, duration_weeks) {
            Ok(Feasibility::Feasible { .. }) => IntakeStep::Ready(PlanDraft {
                current_weight,
                target_weight,
                duration_weeks,
            }),
            Ok(Feasibility::Infeasible {
                weekly_rate,
                minimum_weeks,
            }) => IntakeStep::Rejected {
                weekly_rate,
                minimum_weeks,
            },
            Err(_) => IntakeStep::Prompt(self.state),
        }
    }
}

/// Parses a finite, strictly positive number.
///
/// # Examples
///
/// ```rust
/// use scales_core::intake::parse_positive;
///
/// assert_eq!(parse_positive(" 78.5 "), Some(78.5));
/// assert_eq!(parse_positive("0"), None);
/// assert_eq!(parse_positive("eighty"), None);
/// ```
pub fn parse_positive(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

/// Parses a weight in kg, up to [`MAX_WEIGHT_KG`].
pub fn parse_weight(text: &str) -> Option<f64> {
    parse_positive(text).filter(|weight| *weight <= MAX_WEIGHT_KG)
}

/// Parses a plan duration in weeks, up to [`MAX_DURATION_WEEKS`].
pub fn parse_duration(text: &str) -> Option<f64> {
    parse_positive(text).filter(|weeks| *weeks <= MAX_DURATION_WEEKS)
}
