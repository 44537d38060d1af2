//! Core utilities for the scraper
//!
//! This module consolidates the pieces every command needs:
//! - `config`: Session settings and database path resolution
//! - `http`: The HTTP client and live page source

pub mod config;
pub mod http;

// Re-export commonly used items for convenience
pub use config::{resolve_database_path, SessionConfig};
pub use http::{build_client, HttpPages};
