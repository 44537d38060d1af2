//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod scrape_error_tests {
    use super::*;

    #[test]
    fn test_database_error_conversion() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let db_error = conn
            .execute("INSERT INTO missing_table (x) VALUES (1)", [])
            .unwrap_err();
        let scrape_error = ScrapeError::from(db_error);

        match scrape_error {
            ScrapeError::Database(_) => (),
            _ => panic!("Expected Database error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let scrape_error = ScrapeError::from(json_error);

        match scrape_error {
            ScrapeError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let scrape_error = ScrapeError::from(io_error);

        match scrape_error {
            ScrapeError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<i64>().unwrap_err();
        let scrape_error = ScrapeError::from(parse_error);

        match scrape_error {
            ScrapeError::InvalidTeamId(_) => (),
            _ => panic!("Expected InvalidTeamId error variant"),
        }
    }

    #[test]
    fn test_wait_timeout_error() {
        let error = ScrapeError::WaitTimeout {
            selector: ".roster-card a".to_string(),
            url: "https://liquipedia.net/dota2/Team_Liquid".to_string(),
            waited_ms: 1500,
        };

        let error_string = error.to_string();
        assert!(error_string.contains("1500ms"));
        assert!(error_string.contains(".roster-card a"));
        assert!(error_string.contains("Team_Liquid"));
    }

    #[test]
    fn test_invalid_selector_error() {
        let error = ScrapeError::InvalidSelector {
            selector: "div[".to_string(),
            message: "unexpected end of input".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Invalid CSS selector"));
        assert!(error_string.contains("div["));
    }

    #[test]
    fn test_session_state_errors() {
        assert_eq!(
            ScrapeError::NoPageLoaded.to_string(),
            "No page loaded in browser session"
        );
        assert_eq!(
            ScrapeError::NoHistory.to_string(),
            "No previous page to navigate back to"
        );
    }

    #[test]
    fn test_missing_data_dir_error() {
        let error = ScrapeError::MissingDataDir {
            env_var: "DOTA_SCRAPE_DB".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("DOTA_SCRAPE_DB"));
    }

    #[test]
    fn test_invalid_position_error() {
        let error = ScrapeError::InvalidPosition {
            position: "Coach".to_string(),
        };

        assert_eq!(error.to_string(), "Invalid position: Coach");
    }
}
