//! Storage layer for scraped team data
//!
//! This module provides a thin gateway over the SQLite database,
//! organized into logical components:
//! - `models`: Row structures
//! - `schema`: Database connection and schema management
//! - `queries`: Inserts, lookups and listings

pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::TeamDatabase;
