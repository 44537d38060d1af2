//! Read-only commands over stored data

use crate::{
    cli::types::{Position, TeamId},
    storage::{TeamComposition, TeamDatabase, TournamentResult},
    Result,
};
use serde::Serialize;

/// Everything stored for one team
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamReport {
    pub team_name: String,
    pub id_team: Option<TeamId>,
    pub results: Vec<TournamentResult>,
    pub composition: Vec<TeamComposition>,
}

pub fn build_report(
    db: &TeamDatabase,
    team: &str,
    position: Option<Position>,
) -> Result<TeamReport> {
    Ok(TeamReport {
        team_name: team.to_string(),
        id_team: db.team_id_by_name(team)?,
        results: db.results_for_team(team)?,
        composition: db.compositions_for_team(team, position)?,
    })
}

pub fn format_report(report: &TeamReport) -> String {
    let mut out = match report.id_team {
        Some(id) => format!("{} (id {})\n", report.team_name, id),
        None => format!("{} (not stored)\n", report.team_name),
    };

    out.push_str("Results:\n");
    if report.results.is_empty() {
        out.push_str("  none\n");
    }
    for result in &report.results {
        out.push_str(&format!(
            "  {:>6}  {}\n",
            result.place, result.tournament_name
        ));
    }

    out.push_str("Composition:\n");
    if report.composition.is_empty() {
        out.push_str("  none\n");
    }
    for member in &report.composition {
        out.push_str(&format!(
            "  {:<20} {}\n",
            member.player_name, member.position
        ));
    }

    out
}

/// Handle the report command
pub fn handle_report(
    db: &TeamDatabase,
    team: &str,
    position: Option<Position>,
    as_json: bool,
) -> Result<()> {
    let report = build_report(db, team, position)?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_report(&report));
    }
    Ok(())
}

/// Handle the teams command
pub fn handle_teams(db: &TeamDatabase, as_json: bool) -> Result<()> {
    let teams = db.teams()?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(&teams)?);
        return Ok(());
    }

    if teams.is_empty() {
        println!("No teams stored yet");
    }
    for team in &teams {
        println!("{:>5}  {}", team.id.as_i64(), team.team_name);
    }
    Ok(())
}
