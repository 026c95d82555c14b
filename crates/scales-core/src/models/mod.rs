//! Data models for weight plans and progress reports.
//!
//! Display implementations for user-facing messages live in
//! [`crate::display`], keeping the records here free of presentation logic.

pub mod direction;
pub mod plan;
pub mod profile;
pub mod report;


pub use direction::GoalDirection;
pub use plan::Plan;
pub use profile::{Gender, UserProfile};
pub use report::ProgressReport;
