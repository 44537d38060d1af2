//! Team roster scraper and the all-teams roster crawl.

use super::{parse::slug_from_href, player::scrape_player_position, CrawlSummary, ROSTER_LINKS};
use crate::{
    browser::{BrowserSession, PageSource},
    storage::TeamDatabase,
    Result,
};
use log::{error, info, warn};

/// Visit every player on a team's roster card and record their position.
///
/// The link list is queried again on each iteration since the team page is
/// reloaded after every player visit. A team page without a roster card
/// writes nothing. Player failures are logged; a failure to get back to the
/// team page aborts the team. Returns rows written.
pub async fn scrape_team_composition<S: PageSource>(
    session: &mut BrowserSession<S>,
    db: &mut TeamDatabase,
    team: &str,
) -> Result<usize> {
    session.navigate(team).await?;
    if !session.wait_for_optional(ROSTER_LINKS).await? {
        warn!("No roster found for {}", team);
        return Ok(0);
    }

    let count = session.count(ROSTER_LINKS)?;
    info!("Found {} roster links for {}", count, team);

    let mut written = 0;
    for index in 0..count {
        let hrefs = session.attrs(ROSTER_LINKS, "href")?;
        let Some(href) = hrefs.into_iter().nth(index) else {
            warn!("Roster of {} no longer has link {}, stopping", team, index);
            break;
        };
        let Some(player) = href.as_deref().and_then(slug_from_href).map(str::to_string) else {
            warn!("Roster link {} of {} has no usable href", index, team);
            continue;
        };

        info!("Visiting player {} of team {}", player, team);
        match scrape_player_position(session, db, team, &player).await {
            Ok(Some(_)) => written += 1,
            Ok(None) => {}
            Err(e) => error!("Failed to scrape player {} of {}: {}", player, team, e),
        }

        session.back().await?;
        session.wait_for(ROSTER_LINKS).await?;
    }

    Ok(written)
}

/// Run the roster scraper over every team already stored.
///
/// A failed name listing is logged and treated as no teams.
pub async fn scrape_all_rosters<S: PageSource>(
    session: &mut BrowserSession<S>,
    db: &mut TeamDatabase,
) -> CrawlSummary {
    let names = match db.all_team_names() {
        Ok(names) => names,
        Err(e) => {
            error!("Failed to read team names from database: {}", e);
            Vec::new()
        }
    };

    let mut summary = CrawlSummary::default();
    if names.is_empty() {
        warn!("No team names found in database");
        return summary;
    }
    info!("Total teams: {}", names.len());

    for team in &names {
        info!("Processing team {}", team);
        summary.teams += 1;
        match scrape_team_composition(session, db, team).await {
            Ok(written) => summary.rows_written += written,
            Err(e) => {
                summary.failed_teams += 1;
                error!("Failed to scrape roster of {}: {}", team, e);
            }
        }
    }

    summary
}
