//! Runtime configuration: site base URL, wait timings and database location.

use crate::{error::ScrapeError, Result, DATABASE_ENV_VAR, DEFAULT_BASE_URL};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_USER_AGENT: &str = concat!("dota-scrape/", env!("CARGO_PKG_VERSION"));

/// Options shared by every page load in a browser session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Absolute URL that relative page paths are joined onto.
    pub base_url: String,
    /// How long `wait_for` keeps polling before giving up.
    pub wait_timeout: Duration,
    /// Delay between reloads while waiting for a selector.
    pub poll_interval: Duration,
    pub user_agent: String,
    pub request_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl SessionConfig {
    /// Join a site-relative path such as `Team_Liquid/Results` onto the base URL.
    pub fn page_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Resolve the SQLite file: explicit path, then `DOTA_SCRAPE_DB`, then the
/// platform data directory.
pub fn resolve_database_path(path: Option<PathBuf>) -> Result<PathBuf> {
    path.or_else(|| std::env::var_os(DATABASE_ENV_VAR).map(PathBuf::from))
        .or_else(|| dirs::data_dir().map(|dir| dir.join("dota-scrape").join("dota.db")))
        .ok_or_else(|| ScrapeError::MissingDataDir {
            env_var: DATABASE_ENV_VAR.to_string(),
        })
}
