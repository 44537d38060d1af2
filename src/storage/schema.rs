//! Database schema and connection management

use crate::Result;
use rusqlite::Connection;
use std::path::Path;

/// Connection owner for the team, result and composition tables.
///
/// One instance is opened per command run and borrowed by every scraper;
/// the connection closes when it is dropped.
pub struct TeamDatabase {
    pub(crate) conn: Connection,
}

impl TeamDatabase {
    /// Open (or create) the database file and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Create an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // Team names are not unique; lookups take the first match
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS name_teams (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                team_name TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS result_tournaments_team (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                id_team INTEGER NOT NULL,
                name_team TEXT NOT NULL,
                name_tournaments TEXT NOT NULL,
                place TEXT NOT NULL,
                FOREIGN KEY (id_team) REFERENCES name_teams(id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS team_composition (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                id_team INTEGER NOT NULL,
                name_team TEXT NOT NULL,
                name_player TEXT NOT NULL,
                position TEXT NOT NULL
                    CHECK (position IN ('Support', 'Offlaner', 'Carry', 'Solo Middle')),
                FOREIGN KEY (id_team) REFERENCES name_teams(id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_name_teams_team_name
             ON name_teams(team_name)",
            [],
        )?;

        Ok(())
    }
}
