//! Roster command implementation

use super::CommandContext;
use crate::{
    browser::PageSource,
    liquipedia::{scrape_all_rosters, CrawlSummary},
};

/// Handle the rosters command
pub async fn handle_rosters<S: PageSource>(ctx: &mut CommandContext<S>) -> CrawlSummary {
    scrape_all_rosters(&mut ctx.session, &mut ctx.db).await
}
