//! High-level tracker API driven by chat messages.
//!
//! The [`Tracker`] owns the per-user conversation state and coordinates the
//! intake state machine, the plan validator and the progress engine with the
//! SQLite stores.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  conversation   │    │    plan_ops     │    │    Database     │
//! │ (commands, FSM, │───▶│ (async store    │───▶│   (via db/)     │
//! │  weight reports)│    │  operations)    │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!    Message routing       Blocking offload       Data Persistence
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use scales_core::TrackerBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("scales.db"))
//!     .build()
//!     .await?;
//!
//! let user_id = 7;
//! for text in ["/plan", "80", "75", "4", "79.2"] {
//!     if let Some(reply) = tracker.handle_message(user_id, text).await? {
//!         println!("{reply}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

pub mod builder;
pub mod clock;
pub mod conversation;
pub mod plan_ops;

#[cfg(test)]
mod tests;

pub use builder::TrackerBuilder;
pub use clock::{Clock, FixedClock, SystemClock};
pub use conversation::Command;

use crate::models::UserProfile;
use conversation::Conversations;

/// Main tracker interface.
pub struct Tracker {
    pub(crate) db_path: PathBuf,
    pub(crate) profile: UserProfile,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) conversations: Conversations,
}

impl Tracker {
    pub(crate) fn new(db_path: PathBuf, profile: UserProfile, clock: Arc<dyn Clock>) -> Self {
        Self {
            db_path,
            profile,
            clock,
            conversations: Conversations::default(),
        }
    }

    /// Profile attached to plans created by this tracker.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }
}
