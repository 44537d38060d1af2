//! Basic database query operations

use super::{models::*, schema::TeamDatabase};
use crate::cli::types::{Position, TeamId};
use crate::{error::ScrapeError, Result};
use rusqlite::{params, types::Type, Row};

impl TeamDatabase {
    /// Insert a team name and return its generated id
    pub fn insert_team(&mut self, team_name: &str) -> Result<TeamId> {
        self.conn.execute(
            "INSERT INTO name_teams (team_name) VALUES (?)",
            params![team_name],
        )?;
        Ok(TeamId::new(self.conn.last_insert_rowid()))
    }

    /// Look up a team id by exact name; the lowest id wins when names repeat
    pub fn team_id_by_name(&self, team_name: &str) -> Result<Option<TeamId>> {
        let result = self.conn.query_row(
            "SELECT id FROM name_teams WHERE team_name = ? ORDER BY id LIMIT 1",
            params![team_name],
            |row| row.get::<_, TeamId>(0),
        );

        match result {
            Ok(id) => Ok(Some(id)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Insert a tournament result row
    pub fn insert_tournament_result(&self, result: &TournamentResult) -> Result<()> {
        self.conn.execute(
            "INSERT INTO result_tournaments_team (id_team, name_team, name_tournaments, place)
             VALUES (?, ?, ?, ?)",
            params![
                result.id_team,
                result.team_name,
                result.tournament_name,
                result.place
            ],
        )?;
        Ok(())
    }

    /// Insert a team composition row
    pub fn insert_composition(&self, composition: &TeamComposition) -> Result<()> {
        self.conn.execute(
            "INSERT INTO team_composition (id_team, name_team, name_player, position)
             VALUES (?, ?, ?, ?)",
            params![
                composition.id_team,
                composition.team_name,
                composition.player_name,
                composition.position.label()
            ],
        )?;
        Ok(())
    }

    /// All stored team names, in insertion order
    pub fn all_team_names(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT team_name FROM name_teams ORDER BY id")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut names = Vec::new();
        for row in rows {
            names.push(row?);
        }
        Ok(names)
    }

    /// All stored teams with their ids, in insertion order
    pub fn teams(&self) -> Result<Vec<Team>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, team_name FROM name_teams ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Team {
                id: row.get(0)?,
                team_name: row.get(1)?,
            })
        })?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    /// Resolve the team and write a result row in one transaction.
    ///
    /// Returns `Ok(None)` without writing when the team is not stored.
    pub fn record_tournament_result(
        &mut self,
        team_name: &str,
        tournament_name: &str,
        place: &str,
    ) -> Result<Option<TournamentResult>> {
        let tx = self.conn.unchecked_transaction()?;
        let Some(id_team) = self.team_id_by_name(team_name)? else {
            return Ok(None);
        };

        let result = TournamentResult {
            id_team,
            team_name: team_name.to_string(),
            tournament_name: tournament_name.to_string(),
            place: place.to_string(),
        };
        self.insert_tournament_result(&result)?;
        tx.commit()?;
        Ok(Some(result))
    }

    /// Resolve the team and write a composition row in one transaction.
    ///
    /// Returns `Ok(None)` without writing when the team is not stored.
    pub fn record_composition(
        &mut self,
        team_name: &str,
        player_name: &str,
        position: Position,
    ) -> Result<Option<TeamComposition>> {
        let tx = self.conn.unchecked_transaction()?;
        let Some(id_team) = self.team_id_by_name(team_name)? else {
            return Ok(None);
        };

        let composition = TeamComposition {
            id_team,
            team_name: team_name.to_string(),
            player_name: player_name.to_string(),
            position,
        };
        self.insert_composition(&composition)?;
        tx.commit()?;
        Ok(Some(composition))
    }

    /// Stored results for a team, oldest first
    pub fn results_for_team(&self, team_name: &str) -> Result<Vec<TournamentResult>> {
        let mut stmt = self.conn.prepare(
            "SELECT id_team, name_team, name_tournaments, place
             FROM result_tournaments_team
             WHERE name_team = ?
             ORDER BY id",
        )?;
        let rows = stmt.query_map(params![team_name], |row| {
            Ok(TournamentResult {
                id_team: row.get(0)?,
                team_name: row.get(1)?,
                tournament_name: row.get(2)?,
                place: row.get(3)?,
            })
        })?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    /// Stored composition for a team, optionally limited to one position
    pub fn compositions_for_team(
        &self,
        team_name: &str,
        position: Option<Position>,
    ) -> Result<Vec<TeamComposition>> {
        let mut stmt = self.conn.prepare(
            "SELECT id_team, name_team, name_player, position
             FROM team_composition
             WHERE name_team = ?1 AND (?2 IS NULL OR position = ?2)
             ORDER BY id",
        )?;
        let rows = stmt.query_map(
            params![team_name, position.map(|p| p.label())],
            row_to_composition,
        )?;

        let mut compositions = Vec::new();
        for row in rows {
            compositions.push(row?);
        }
        Ok(compositions)
    }
}

fn row_to_composition(row: &Row) -> rusqlite::Result<TeamComposition> {
    let label: String = row.get(3)?;
    let position = Position::from_label(&label).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            Type::Text,
            Box::new(ScrapeError::InvalidPosition { position: label }),
        )
    })?;

    Ok(TeamComposition {
        id_team: row.get(0)?,
        team_name: row.get(1)?,
        player_name: row.get(2)?,
        position,
    })
}
