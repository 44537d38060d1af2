//! Dota 2 player positions as labelled in Liquipedia infoboxes.

use crate::error::ScrapeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles a player can be recorded with.
///
/// Only these four labels are accepted from a player infobox; anything else
/// (Coach, Analyst, Captain, ...) is ignored by the player scraper.
///
/// # Examples
///
/// ```rust
/// use dota_scrape::Position;
///
/// assert_eq!(Position::SoloMiddle.to_string(), "Solo Middle");
/// assert_eq!(Position::from_label("Carry"), Some(Position::Carry));
/// assert_eq!(Position::from_label("Coach"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Support,
    Offlaner,
    Carry,
    #[serde(rename = "Solo Middle")]
    SoloMiddle,
}

impl Position {
    /// Every accepted position, in allow-list order.
    pub const ALL: [Position; 4] = [
        Position::Support,
        Position::Offlaner,
        Position::Carry,
        Position::SoloMiddle,
    ];

    /// The exact infobox label for this position.
    pub fn label(&self) -> &'static str {
        match self {
            Position::Support => "Support",
            Position::Offlaner => "Offlaner",
            Position::Carry => "Carry",
            Position::SoloMiddle => "Solo Middle",
        }
    }

    /// Exact, case-sensitive match against the infobox labels.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lenient parsing for command-line input: case-insensitive, and accepts
/// `mid`/`solo-middle` style spellings. Scraped labels go through
/// [`Position::from_label`] instead.
impl FromStr for Position {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "support" | "sup" => Ok(Position::Support),
            "offlaner" | "offlane" | "off" => Ok(Position::Offlaner),
            "carry" => Ok(Position::Carry),
            "solo middle" | "mid" | "middle" => Ok(Position::SoloMiddle),
            _ => Err(ScrapeError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
