//! Player page scraper.

use super::{parse::select_position, INFOBOX_ROLE_LINKS, PLAYER_INFOBOX};
use crate::{
    browser::{BrowserSession, PageSource},
    cli::types::Position,
    storage::TeamDatabase,
    Result,
};
use log::{error, info, warn};

/// Store the first allowed position listed in a player's infobox.
///
/// Returns the recorded position, or `None` when nothing was written: no
/// infobox or no allowed role on the page, team not stored, or the insert
/// failed (logged). Page load failures are returned to the caller.
pub async fn scrape_player_position<S: PageSource>(
    session: &mut BrowserSession<S>,
    db: &mut TeamDatabase,
    team: &str,
    player: &str,
) -> Result<Option<Position>> {
    session.navigate(player).await?;
    if !session.wait_for_optional(PLAYER_INFOBOX).await? {
        info!("No player infobox on {}, skipping", player);
        return Ok(None);
    }

    let labels = session.texts(INFOBOX_ROLE_LINKS)?;
    let Some(position) = select_position(&labels) else {
        info!("No valid position found for player {}", player);
        return Ok(None);
    };
    info!("Player {} of {}: {}", player, team, position);

    match db.record_composition(team, player, position) {
        Ok(Some(_)) => Ok(Some(position)),
        Ok(None) => {
            warn!(
                "Team {} not found in database, skipping player {}",
                team, player
            );
            Ok(None)
        }
        Err(e) => {
            error!("Failed to store player {} for team {}: {}", player, team, e);
            Ok(None)
        }
    }
}
