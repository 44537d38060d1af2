//! Tournament participants and full crawl commands

use super::{rosters::handle_rosters, CommandContext};
use crate::{
    browser::PageSource,
    liquipedia::{scrape_participants, CrawlSummary},
};
use log::{error, info};

/// Handle the participants command.
///
/// A tournament page that can't be loaded is logged and reported as an empty
/// crawl; the process still exits normally.
pub async fn handle_participants<S: PageSource>(
    ctx: &mut CommandContext<S>,
    tournament: &str,
) -> CrawlSummary {
    info!("Scraping participants of {}", tournament);

    match scrape_participants(&mut ctx.session, &mut ctx.db, tournament).await {
        Ok(summary) => summary,
        Err(e) => {
            error!("Failed to scrape participants of {}: {}", tournament, e);
            CrawlSummary::default()
        }
    }
}

/// Handle the crawl command: participants first, then every stored roster.
pub async fn handle_crawl<S: PageSource>(
    ctx: &mut CommandContext<S>,
    tournament: &str,
) -> (CrawlSummary, CrawlSummary) {
    let participants = handle_participants(ctx, tournament).await;
    let rosters = handle_rosters(ctx).await;
    (participants, rosters)
}
