//! Database schema and connection management

use crate::core::paths::ensure_parent_dir;
use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

/// Database connection manager for salary and stats records
pub struct RecordDatabase {
    pub(crate) conn: Connection,
}

impl RecordDatabase {
    /// Open (or create) the database file and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        ensure_parent_dir(path)?;

        debug!(path = %path.display(), "opening record database");
        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Create an in-memory database, for tests and throwaway runs
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // Plain INTEGER PRIMARY KEY (no AUTOINCREMENT): ids restart at 1
        // after a table is cleared, so a reload reproduces the same ids
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS salary_records (
                id INTEGER PRIMARY KEY,
                player TEXT NOT NULL,
                season TEXT NOT NULL,
                salary REAL NOT NULL,
                rank INTEGER NOT NULL DEFAULT 0
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS stats_records (
                id INTEGER PRIMARY KEY,
                source_id TEXT NOT NULL,
                rank INTEGER NOT NULL,
                player TEXT NOT NULL,
                team TEXT NOT NULL,
                position TEXT NOT NULL,
                age INTEGER NOT NULL,
                games INTEGER NOT NULL,
                mpg REAL NOT NULL,
                ppg REAL NOT NULL,
                rpg REAL NOT NULL,
                apg REAL NOT NULL,
                spg REAL NOT NULL,
                bpg REAL NOT NULL,
                season TEXT NOT NULL,
                year INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_salary_season
             ON salary_records(season, rank)",
            [],
        )?;

        Ok(())
    }
}
