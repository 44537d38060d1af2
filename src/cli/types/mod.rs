//! Type-safe wrappers and enums for scraped Dota 2 data.

pub mod ids;
pub mod position;

pub use ids::TeamId;
pub use position::Position;
