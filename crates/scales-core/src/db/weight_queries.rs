//! Weight log queries and the transactional progress update.

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::ProgressReport,
    progress,
};

const INSERT_WEIGHT_SQL: &str =
    "INSERT INTO weights (user_id, weight, recorded_at) VALUES (?1, ?2, ?3)";
const SELECT_WEIGHTS_SQL: &str = "SELECT weight FROM weights WHERE user_id = ?1 ORDER BY id";
const SELECT_LAST_WEIGHT_SQL: &str =
    "SELECT weight FROM weights WHERE user_id = ?1 ORDER BY id DESC LIMIT 1";
const DELETE_WEIGHTS_SQL: &str = "DELETE FROM weights WHERE user_id = ?1";

impl super::Database {
    /// Returns the user's weight history, oldest first.
    pub fn get_weights(&self, user_id: i64) -> Result<Vec<f64>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_WEIGHTS_SQL)
            .db_context("Failed to prepare query")?;

        let weights = stmt
            .query_map(params![user_id], |row| row.get(0))
            .db_context("Failed to query weights")?
            .collect::<std::result::Result<Vec<f64>, _>>()
            .db_context("Failed to read weight row")?;

        Ok(weights)
    }

    /// Appends a weight to the user's history.
    pub fn append_weight(&self, user_id: i64, weight: f64) -> Result<()> {
        insert_weight(&self.connection, user_id, weight)
    }

    /// Removes the user's entire weight history.
    pub fn clear_weights(&self, user_id: i64) -> Result<()> {
        self.connection
            .execute(DELETE_WEIGHTS_SQL, params![user_id])
            .db_context("Failed to clear weights")?;
        Ok(())
    }

    /// Records a weight report against the user's active plan.
    ///
    /// The plan lookup, the history read and the history write happen in one
    /// immediate transaction, so two reports for the same user cannot
    /// interleave. On goal completion the history is cleared instead of
    /// appended to; the plan itself is kept.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::NoActivePlan` without touching the history when
    /// the user has no plan.
    pub fn record_weight(
        &mut self,
        user_id: i64,
        weight: f64,
        today: Date,
    ) -> Result<ProgressReport> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let plan = super::plan_queries::select_plan(&tx, user_id)?
            .ok_or(TrackerError::NoActivePlan { user_id })?;

        let previous: Option<f64> = tx
            .query_row(SELECT_LAST_WEIGHT_SQL, params![user_id], |row| row.get(0))
            .optional()
            .db_context("Failed to query last weight")?;

        let report = progress::assess(&plan, previous, weight, today)?;

        if report.goal_reached {
            tx.execute(DELETE_WEIGHTS_SQL, params![user_id])
                .db_context("Failed to clear weights")?;
        } else {
            insert_weight(&tx, user_id, weight)?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(report)
    }
}

pub(super) fn insert_weight(conn: &Connection, user_id: i64, weight: f64) -> Result<()> {
    conn.execute(
        INSERT_WEIGHT_SQL,
        params![user_id, weight, Timestamp::now().to_string()],
    )
    .db_context("Failed to insert weight")?;
    Ok(())
}
