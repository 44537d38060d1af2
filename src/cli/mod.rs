//! CLI argument definitions and parsing.

pub mod types;

use crate::{
    core::config::SessionConfig, BASE_URL_ENV_VAR, DATABASE_ENV_VAR, DEFAULT_BASE_URL,
    DEFAULT_TOURNAMENT,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use types::Position;

/// Options shared by every subcommand
#[derive(Debug, Args)]
pub struct GlobalOptions {
    /// SQLite database file (or set `DOTA_SCRAPE_DB`).
    #[clap(long, global = true, env = DATABASE_ENV_VAR)]
    pub db: Option<PathBuf>,

    /// Wiki base URL that page paths are joined onto.
    #[clap(long, global = true, env = BASE_URL_ENV_VAR, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// How long to wait for a page element before giving up, in milliseconds.
    #[clap(long, global = true, default_value_t = 10_000)]
    pub wait_timeout_ms: u64,

    /// Delay between page reloads while waiting, in milliseconds.
    #[clap(
        long,
        global = true,
        default_value_t = 1_000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub poll_interval_ms: u64,

    /// Log page loads and polling (same as `RUST_LOG=debug`).
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

impl GlobalOptions {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            base_url: self.base_url.clone(),
            wait_timeout: Duration::from_millis(self.wait_timeout_ms),
            poll_interval: Duration::from_millis(self.poll_interval_ms),
            ..SessionConfig::default()
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Store the teams of a tournament and scrape their latest results
    Participants {
        /// Tournament page path, relative to the base URL.
        #[clap(long, short, default_value = DEFAULT_TOURNAMENT)]
        tournament: String,
    },

    /// Scrape roster positions for every stored team
    Rosters,

    /// Run `participants` and then `rosters`
    Crawl {
        /// Tournament page path, relative to the base URL.
        #[clap(long, short, default_value = DEFAULT_TOURNAMENT)]
        tournament: String,
    },

    /// List stored team names
    Teams {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show stored results and composition for one team
    Report {
        /// Team name as stored, e.g. `Team_Liquid`.
        #[clap(long, short)]
        team: String,

        /// Only list players with this position: `-p carry`.
        #[clap(long, short = 'p')]
        position: Option<Position>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "dota-scrape",
    about = "Scrape Dota 2 teams, results and rosters from Liquipedia"
)]
pub struct DotaScrape {
    #[clap(flatten)]
    pub options: GlobalOptions,

    #[clap(subcommand)]
    pub command: Commands,
}
