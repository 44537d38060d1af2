//! Tournament participants crawl.

use super::{parse::team_slugs, results::scrape_team_results, CrawlSummary, TEAMCARD_LINKS};
use crate::{
    browser::{BrowserSession, PageSource},
    storage::TeamDatabase,
    Result,
};
use log::{error, info, warn};

/// Store every team on a tournament page and scrape its results.
///
/// Teams are processed in page order; a failure on one team is logged and
/// the next team proceeds. A page without team cards yields an empty
/// summary. Only a failure to load the tournament page itself is returned.
pub async fn scrape_participants<S: PageSource>(
    session: &mut BrowserSession<S>,
    db: &mut TeamDatabase,
    tournament_path: &str,
) -> Result<CrawlSummary> {
    session.navigate(tournament_path).await?;
    if !session.wait_for_optional(TEAMCARD_LINKS).await? {
        warn!("No team cards on {}", tournament_path);
        return Ok(CrawlSummary::default());
    }

    let hrefs = session.attrs(TEAMCARD_LINKS, "href")?;
    let teams = team_slugs(hrefs.into_iter().flatten());
    info!("Found {} teams on {}", teams.len(), tournament_path);

    let mut summary = CrawlSummary::default();
    for team in &teams {
        info!("Fetching results for team {}", team);
        summary.teams += 1;

        match db.insert_team(team) {
            Ok(id) => info!("Team {} stored with id {}", team, id),
            Err(e) => error!("Failed to store team {}: {}", team, e),
        }

        match scrape_team_results(session, db, team).await {
            Ok(written) => summary.rows_written += written,
            Err(e) => {
                summary.failed_teams += 1;
                error!("Failed to scrape results of {}: {}", team, e);
            }
        }
    }

    Ok(summary)
}
