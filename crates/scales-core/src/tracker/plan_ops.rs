//! Store operations for the Tracker.
//!
//! Each call opens its own SQLite connection on the blocking pool.

use tokio::task;

use super::Tracker;
use crate::{
    db::Database,
    error::{Result, TrackerError},
    intake::PlanDraft,
    models::{Plan, ProgressReport},
};

impl Tracker {
    /// Persists a validated draft as the user's plan, starting today, and
    /// seeds the weight history with the starting weight.
    pub async fn create_plan(&self, user_id: i64, draft: PlanDraft) -> Result<Plan> {
        let db_path = self.db_path.clone();
        let plan = Plan {
            user_id,
            current_weight: draft.current_weight,
            target_weight: draft.target_weight,
            duration_weeks: draft.duration_weeks,
            start_date: self.clock.today(),
            profile: self.profile,
        };

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.start_plan(&plan)?;
            Ok::<_, TrackerError>(plan)
        })
        .await
        .map_err(TrackerError::join)?
    }

    /// Retrieves the user's active plan.
    pub async fn get_plan(&self, user_id: i64) -> Result<Option<Plan>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_plan(user_id)
        })
        .await
        .map_err(TrackerError::join)?
    }

    /// Retrieves the user's weight history, oldest first.
    pub async fn get_weights(&self, user_id: i64) -> Result<Vec<f64>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_weights(user_id)
        })
        .await
        .map_err(TrackerError::join)?
    }

    /// Records a weight against the user's plan and returns the progress
    /// report.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::NoActivePlan` when no plan exists.
    pub async fn record_weight(&self, user_id: i64, weight: f64) -> Result<ProgressReport> {
        let db_path = self.db_path.clone();
        let today = self.clock.today();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.record_weight(user_id, weight, today)
        })
        .await
        .map_err(TrackerError::join)?
    }
}
