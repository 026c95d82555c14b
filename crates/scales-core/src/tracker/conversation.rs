//! Message routing for chat conversations.
//!
//! Commands open or abort an intake session. Free text goes to the active
//! session when there is one and is treated as a weight report otherwise.
//! All messages of one user are handled under that user's conversation lock.

use std::{collections::HashMap, sync::Arc};

use log::{debug, info};
use tokio::sync::Mutex;

use super::Tracker;
use crate::{
    display::{PlanSaved, Rejection, NOTHING_TO_CANCEL, NO_PLAN, PLAN_CANCELLED},
    error::{Result, TrackerError},
    intake::{parse_weight, IntakeSession, IntakeState, IntakeStep},
};

/// Commands understood by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/plan` or `/start`: begin a new intake, discarding any open one
    StartIntake,
    /// `/cancel`: abandon the open intake
    Cancel,
    /// Any other slash command
    Unknown,
}

impl Command {
    /// Recognizes a command message, or returns `None` for free text.
    ///
    /// Telegram appends `@botname` to commands in group chats; the suffix is
    /// ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scales_core::tracker::Command;
    ///
    /// assert_eq!(Command::parse("/plan"), Some(Command::StartIntake));
    /// assert_eq!(Command::parse("/cancel@scales_bot"), Some(Command::Cancel));
    /// assert_eq!(Command::parse("78.4"), None);
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let token = text.split_whitespace().next()?.strip_prefix('/')?;
        let name = token.split('@').next().unwrap_or(token);

        Some(match name.to_lowercase().as_str() {
            "plan" | "start" => Command::StartIntake,
            "cancel" => Command::Cancel,
            _ => Command::Unknown,
        })
    }
}

type Slot = Arc<Mutex<Option<IntakeSession>>>;

/// Open intake sessions keyed by user.
#[derive(Default)]
pub(crate) struct Conversations {
    slots: Mutex<HashMap<i64, Slot>>,
}

impl Conversations {
    async fn slot(&self, user_id: i64) -> Slot {
        let mut slots = self.slots.lock().await;
        Arc::clone(slots.entry(user_id).or_default())
    }
}

impl Tracker {
    /// Handles one inbound chat message and returns the reply, if any.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Persistence` when a store read or write fails.
    /// An intake that fails to persist stays open at the duration question,
    /// keeping the values collected so far.
    pub async fn handle_message(&self, user_id: i64, text: &str) -> Result<Option<String>> {
        let slot = self.conversations.slot(user_id).await;
        let mut session = slot.lock().await;

        match Command::parse(text) {
            Some(Command::StartIntake) => {
                debug!("User {user_id} started plan intake");
                let intake = IntakeSession::new();
                *session = Some(intake);
                Ok(Some(intake.state().prompt().to_owned()))
            }
            Some(Command::Cancel) => {
                if session.take().is_some() {
                    debug!("User {user_id} cancelled plan intake");
                    Ok(Some(PLAN_CANCELLED.to_owned()))
                } else {
                    Ok(Some(NOTHING_TO_CANCEL.to_owned()))
                }
            }
            Some(Command::Unknown) => {
                debug!("Ignoring unknown command from user {user_id}: {text}");
                Ok(None)
            }
            None => {
                let step = match session.as_mut() {
                    Some(intake) => intake.advance(text),
                    None => return self.report_weight(user_id, text).await,
                };
                self.continue_intake(user_id, &mut session, step).await
            }
        }
    }

    /// Returns the question the user's open intake is waiting on.
    pub async fn intake_state(&self, user_id: i64) -> Option<IntakeState> {
        let slot = self.conversations.slot(user_id).await;
        let session = slot.lock().await;
        session.as_ref().map(IntakeSession::state)
    }

    async fn continue_intake(
        &self,
        user_id: i64,
        session: &mut Option<IntakeSession>,
        step: IntakeStep,
    ) -> Result<Option<String>> {
        match step {
            IntakeStep::Prompt(state) => Ok(Some(state.prompt().to_owned())),
            IntakeStep::Rejected {
                weekly_rate,
                minimum_weeks,
            } => {
                info!("Rejected plan for user {user_id}: {weekly_rate:.2} kg/week");
                *session = None;
                Ok(Some(
                    Rejection {
                        weekly_rate,
                        minimum_weeks,
                    }
                    .to_string(),
                ))
            }
            IntakeStep::Ready(draft) => {
                let plan = self.create_plan(user_id, draft).await?;
                info!(
                    "Saved plan for user {user_id}: {} -> {} kg in {} weeks",
                    plan.current_weight, plan.target_weight, plan.duration_weeks
                );
                *session = None;
                Ok(Some(PlanSaved(&plan).to_string()))
            }
        }
    }

    async fn report_weight(&self, user_id: i64, text: &str) -> Result<Option<String>> {
        let Some(weight) = parse_weight(text) else {
            debug!("Ignoring non-numeric message from user {user_id}");
            return Ok(None);
        };

        match self.record_weight(user_id, weight).await {
            Ok(report) => {
                if report.goal_reached {
                    info!("User {user_id} reached target weight {}", report.target_weight);
                }
                Ok(Some(report.to_string()))
            }
            Err(TrackerError::NoActivePlan { .. }) => Ok(Some(NO_PLAN.to_owned())),
            Err(e) => Err(e),
        }
    }
}
