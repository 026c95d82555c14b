//! User-facing chat messages.
//!
//! Domain results implement [`std::fmt::Display`] (or are wrapped in a small
//! newtype that does) so that every transport renders identical text.
//!
//! - [`report`]: progress message for a logged weight
//! - [`messages`]: intake confirmations, rejections and fixed replies
//! - [`number`]: decimal formatting helpers
//! - [`overview`]: markdown summary of a plan for terminal output

pub mod messages;
pub mod number;
pub mod overview;
pub mod report;

pub use messages::{PlanSaved, Rejection, NOTHING_TO_CANCEL, NO_PLAN, PLAN_CANCELLED};
pub use number::Decimal;
pub use overview::PlanOverview;
