//! Error types for the Liquipedia Dota 2 scraper

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse team ID: {0}")]
    InvalidTeamId(#[from] std::num::ParseIntError),

    #[error("Invalid CSS selector {selector:?}: {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("Timed out after {waited_ms}ms waiting for {selector:?} on {url}")]
    WaitTimeout {
        selector: String,
        url: String,
        waited_ms: u128,
    },

    #[error("No page loaded in browser session")]
    NoPageLoaded,

    #[error("No previous page to navigate back to")]
    NoHistory,

    #[error("No page registered for {url}")]
    UnknownPage { url: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Database path not provided and {env_var} environment variable not set; no data directory available")]
    MissingDataDir { env_var: String },
}
