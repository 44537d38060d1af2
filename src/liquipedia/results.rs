//! Team results page scraper.

use super::{parse::parse_result_row, results_path, MAX_RESULT_ROWS, RESULT_ROWS};
use crate::{
    browser::{BrowserSession, PageSource},
    storage::TeamDatabase,
    Result,
};
use log::{debug, error, info, warn};

/// Record up to [`MAX_RESULT_ROWS`] results from a team's `Results` page.
///
/// The team is resolved before anything is loaded; an unknown team writes
/// nothing. A page without result rows writes nothing either. Unparseable
/// rows and failed inserts are logged and skipped. Returns the number of
/// rows written.
pub async fn scrape_team_results<S: PageSource>(
    session: &mut BrowserSession<S>,
    db: &mut TeamDatabase,
    team: &str,
) -> Result<usize> {
    if db.team_id_by_name(team)?.is_none() {
        warn!("Team {} not found in database, skipping results", team);
        return Ok(0);
    }

    session.navigate(&results_path(team)).await?;
    if !session.wait_for_optional(RESULT_ROWS).await? {
        warn!("No result rows on the results page of {}", team);
        return Ok(0);
    }
    let rows = session.texts(RESULT_ROWS)?;

    let mut written = 0;
    for text in rows.iter().take(MAX_RESULT_ROWS) {
        debug!("Result row for {}: {}", team, text);

        let Some(row) = parse_result_row(text) else {
            warn!("Unrecognized result row for {}: {:?}", team, text);
            continue;
        };

        match db.record_tournament_result(team, &row.tournament_name, &row.place) {
            Ok(Some(result)) => {
                info!(
                    "Stored result for {}: {} at {}",
                    team, result.place, result.tournament_name
                );
                written += 1;
            }
            Ok(None) => warn!("Team {} no longer in database, skipping row", team),
            Err(e) => error!("Failed to store tournament result for {}: {}", team, e),
        }
    }

    Ok(written)
}
