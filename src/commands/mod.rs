//! Command implementations for the scraper CLI

pub mod participants;
pub mod report;
pub mod rosters;

pub use participants::{handle_crawl, handle_participants};
pub use report::{handle_report, handle_teams};
pub use rosters::handle_rosters;

use crate::{
    browser::{BrowserSession, PageSource},
    core::{config::SessionConfig, http::HttpPages},
    storage::TeamDatabase,
    Result,
};
use std::path::Path;

/// Resources a crawl command owns for its whole run: one database
/// connection and one browser session, both released when it drops.
pub struct CommandContext<S: PageSource> {
    pub db: TeamDatabase,
    pub session: BrowserSession<S>,
}

impl<S: PageSource> CommandContext<S> {
    pub fn new(db: TeamDatabase, session: BrowserSession<S>) -> Self {
        Self { db, session }
    }
}

impl CommandContext<HttpPages> {
    /// Open the database file and a live HTTP session
    pub fn open(db_path: &Path, config: SessionConfig) -> Result<Self> {
        let db = TeamDatabase::open(db_path)?;
        let pages = HttpPages::new(&config)?;
        Ok(Self::new(db, BrowserSession::new(pages, config)))
    }
}
