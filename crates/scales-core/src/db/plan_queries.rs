//! Plan store queries.

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, types::Type, Connection, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Gender, Plan, UserProfile},
};

const UPSERT_PLAN_SQL: &str = "INSERT OR REPLACE INTO plans (user_id, current_weight, target_weight, duration_weeks, start_date, age, height_cm, activity_level, gender, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const SELECT_PLAN_SQL: &str = "SELECT user_id, current_weight, target_weight, duration_weeks, start_date, age, height_cm, activity_level, gender FROM plans WHERE user_id = ?1";
const DELETE_USER_WEIGHTS_SQL: &str = "DELETE FROM weights WHERE user_id = ?1";

impl super::Database {
    /// Stores `plan` as the user's active plan, replacing any previous one,
    /// and reseeds the weight history with the plan's starting weight.
    pub fn start_plan(&mut self, plan: &Plan) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let profile = &plan.profile;
        tx.execute(
            UPSERT_PLAN_SQL,
            params![
                plan.user_id,
                plan.current_weight,
                plan.target_weight,
                plan.duration_weeks,
                plan.start_date.to_string(),
                profile.age,
                profile.height_cm,
                profile.activity_level,
                profile.gender.as_str(),
                Timestamp::now().to_string(),
            ],
        )
        .db_context("Failed to store plan")?;

        tx.execute(DELETE_USER_WEIGHTS_SQL, params![plan.user_id])
            .db_context("Failed to reset weight history")?;
        super::weight_queries::insert_weight(&tx, plan.user_id, plan.current_weight)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Retrieves the active plan of a user.
    pub fn get_plan(&self, user_id: i64) -> Result<Option<Plan>> {
        select_plan(&self.connection, user_id)
    }
}

pub(super) fn select_plan(conn: &Connection, user_id: i64) -> Result<Option<Plan>> {
    conn.query_row(SELECT_PLAN_SQL, params![user_id], |row| {
        let start_date = row
            .get::<_, String>(4)?
            .parse::<Date>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;

        let gender_str: String = row.get(8)?;
        let gender = gender_str.parse::<Gender>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                8,
                Type::Text,
                Box::new(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("Invalid gender: {gender_str}"),
                )),
            )
        })?;

        Ok(Plan {
            user_id: row.get(0)?,
            current_weight: row.get(1)?,
            target_weight: row.get(2)?,
            duration_weeks: row.get(3)?,
            start_date,
            profile: UserProfile {
                age: row.get(5)?,
                height_cm: row.get(6)?,
                activity_level: row.get(7)?,
                gender,
            },
        })
    })
    .optional()
    .db_context("Failed to query plan")
}
