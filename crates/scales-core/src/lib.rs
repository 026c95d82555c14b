//! Core library for the Scales weight-goal tracker.
//!
//! This crate holds the decision logic of the tracker and the SQLite stores
//! it relies on:
//!
//! - [`validator`]: feasibility of a new plan against the weekly ceiling
//! - [`intake`]: the three-question state machine that collects a plan
//! - [`progress`]: remaining distance, milestones and goal completion
//! - [`db`]: per-user plan and weight-history storage
//! - [`tracker`]: message routing that ties the pieces together
//! - [`display`]: the text of every reply
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use scales_core::{FixedClock, TrackerBuilder};
//! use jiff::civil::date;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .with_clock(FixedClock(date(2024, 1, 1)))
//!     .build()
//!     .await?;
//!
//! tracker.handle_message(1, "/plan").await?;
//! tracker.handle_message(1, "80").await?;
//! tracker.handle_message(1, "75").await?;
//! let saved = tracker.handle_message(1, "4").await?;
//! assert_eq!(
//!     saved.as_deref(),
//!     Some("Plan saved! Target: 75.0 kg. Timeline: 4.0 weeks. Starting today! Goal: lose weight")
//! );
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod intake;
pub mod models;
pub mod progress;
pub mod tracker;
pub mod validator;

// Re-export commonly used types
pub use db::Database;
pub use error::{Result, TrackerError};
pub use intake::{IntakeSession, IntakeState, IntakeStep, PlanDraft};
pub use models::{Gender, GoalDirection, Plan, ProgressReport, UserProfile};
pub use tracker::{Clock, Command, FixedClock, SystemClock, Tracker, TrackerBuilder};
pub use validator::{evaluate, Feasibility, MAX_WEEKLY_RATE_KG};
