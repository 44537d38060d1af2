//! Data models for the storage layer

use crate::cli::types::{Position, TeamId};
use serde::{Deserialize, Serialize};

/// A row of `name_teams`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub team_name: String,
}

/// A row of `result_tournaments_team`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentResult {
    pub id_team: TeamId,
    pub team_name: String,
    pub tournament_name: String,
    pub place: String,
}

/// A row of `team_composition`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamComposition {
    pub id_team: TeamId,
    pub team_name: String,
    pub player_name: String,
    pub position: Position,
}
