//! Liquipedia Dota 2 page scrapers.
//!
//! Page layout knowledge lives here: URL patterns, CSS selectors and the
//! fixed text layout of result rows. Each scraper takes the browser session
//! and the database by reference and writes rows as it goes.

pub mod parse;
pub mod participants;
pub mod player;
pub mod results;
pub mod roster;

pub use participants::scrape_participants;
pub use player::scrape_player_position;
pub use results::scrape_team_results;
pub use roster::{scrape_all_rosters, scrape_team_composition};

use serde::Serialize;
use std::fmt;

/// Team links on a tournament page's participant cards.
pub const TEAMCARD_LINKS: &str = ".teamcard center a";
/// Rows of the tables on a team's results page.
pub const RESULT_ROWS: &str = ".wikitable tbody tr";
/// Player links on a team's roster card.
pub const ROSTER_LINKS: &str = ".wikitable.wikitable-striped.roster-card a";
/// The player infobox container.
pub const PLAYER_INFOBOX: &str = ".fo-nttax-infobox";
/// Links in the infobox half-width cells, where roles are listed.
pub const INFOBOX_ROLE_LINKS: &str = r#".fo-nttax-infobox div[style="width:50%"] a"#;

/// Href fragment marking category pages among participant links.
pub const CATEGORY_MARKER: &str = "/Category";
/// Only the first few result rows of a team are recorded.
pub const MAX_RESULT_ROWS: usize = 5;

/// Totals for one crawl over a list of teams.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrawlSummary {
    pub teams: usize,
    pub rows_written: usize,
    /// Teams whose scrape stopped on an error.
    pub failed_teams: usize,
}

impl fmt::Display for CrawlSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} teams processed, {} rows written, {} teams failed",
            self.teams, self.rows_written, self.failed_teams
        )
    }
}

/// Path of a team's results page.
pub fn results_path(team: &str) -> String {
    format!("{}/Results", team)
}
