//! Liquipedia Dota 2 scraper library
//!
//! Crawls tournament, team and player pages on Liquipedia and stores teams,
//! recent tournament results and roster positions in a local SQLite database.
//!
//! ## Features
//!
//! - **Participants crawl**: Store every team of a tournament and its latest results
//! - **Roster crawl**: Record the listed position of each player on each stored team
//! - **Explicit waits**: Page elements are polled for instead of sleeping a fixed time
//! - **Reports**: Print what has been stored for a team, as text or JSON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dota_scrape::{
//!     commands::{handle_participants, CommandContext},
//!     core::SessionConfig,
//! };
//! use std::path::Path;
//!
//! # async fn example() -> dota_scrape::Result<()> {
//! let mut ctx = CommandContext::open(Path::new("dota.db"), SessionConfig::default())?;
//! let summary = handle_participants(&mut ctx, "PGL/Wallachia/2").await;
//! println!("{}", summary);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export DOTA_SCRAPE_DB=~/dota.db
//! export DOTA_SCRAPE_BASE_URL=https://liquipedia.net/dota2
//! export RUST_LOG=debug
//! ```

pub mod browser;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod liquipedia;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{Position, TeamId};
pub use error::{Result, ScrapeError};
pub use liquipedia::CrawlSummary;

pub const DATABASE_ENV_VAR: &str = "DOTA_SCRAPE_DB";
pub const BASE_URL_ENV_VAR: &str = "DOTA_SCRAPE_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "https://liquipedia.net/dota2";
pub const DEFAULT_TOURNAMENT: &str = "PGL/Wallachia/2";
