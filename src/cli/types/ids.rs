//! ID types for stored teams.

use crate::error::{Result, ScrapeError};
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for the generated `name_teams.id` column.
///
/// Keeps team ids from being mixed up with row counts or other integers
/// flowing through the scrapers.
///
/// # Examples
///
/// ```rust
/// use dota_scrape::TeamId;
///
/// let team_id = TeamId::new(42);
/// assert_eq!(team_id.as_i64(), 42);
/// assert_eq!(team_id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub i64);

impl TeamId {
    /// Create a new TeamId from an i64 value.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying i64 value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

impl ToSql for TeamId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0))
    }
}

impl FromSql for TeamId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_id_from_str() {
        assert_eq!("17".parse::<TeamId>().unwrap(), TeamId::new(17));
        assert_eq!(" 3 ".parse::<TeamId>().unwrap(), TeamId::new(3));
        assert!("Team_Liquid".parse::<TeamId>().is_err());
    }

    #[test]
    fn test_team_id_sql_round_trip() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let id: TeamId = conn
            .query_row("SELECT ?", [TeamId::new(9)], |row| row.get(0))
            .unwrap();
        assert_eq!(id, TeamId::new(9));
    }
}
