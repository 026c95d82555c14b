//! SQLite storage for plans and weight histories.
//!
//! Every row is keyed by the chat user id, so the plan store and the weight
//! log store are maps from user to record even though a typical deployment
//! only ever sees one user.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod plan_queries;
pub mod weight_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (creating if needed) the database at `path` and initializes the
    /// schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
