//! Unit tests for the browser session

use super::*;
use crate::core::config::SessionConfig;
use std::time::Duration;

const BASE: &str = "http://wiki.test/dota2";

fn test_config() -> SessionConfig {
    SessionConfig {
        base_url: BASE.to_string(),
        wait_timeout: Duration::from_millis(60),
        poll_interval: Duration::from_millis(10),
        ..SessionConfig::default()
    }
}

fn url(path: &str) -> String {
    format!("{}/{}", BASE, path)
}

const TEAM_PAGE: &str = r#"
<html><body>
  <table class="wikitable wikitable-striped roster-card">
    <tr><td><a href="/dota2/Miracle-">Miracle-</a></td></tr>
    <tr><td><a href="/dota2/Nisha">Nisha</a></td></tr>
    <tr><td><a>no href</a></td></tr>
  </table>
</body></html>
"#;

#[tokio::test]
async fn test_navigate_and_query() {
    let pages = StaticPages::new().with_page(url("Team_Liquid"), TEAM_PAGE);
    let mut session = BrowserSession::new(pages, test_config());

    session.navigate("Team_Liquid").await.unwrap();

    assert_eq!(session.current_url(), Some(url("Team_Liquid").as_str()));
    assert_eq!(session.count(".roster-card a").unwrap(), 3);
    assert_eq!(
        session.texts(".roster-card a").unwrap(),
        vec!["Miracle-", "Nisha", "no href"]
    );
    assert_eq!(
        session.attrs(".roster-card a", "href").unwrap(),
        vec![
            Some("/dota2/Miracle-".to_string()),
            Some("/dota2/Nisha".to_string()),
            None
        ]
    );
}

#[tokio::test]
async fn test_rendered_text_collapses_whitespace() {
    let html = r#"<table class="wikitable"><tbody>
        <tr><td>2024-09-15</td>
            <td> 1st </td>
            <td>Tier
                1</td></tr>
    </tbody></table>"#;
    let pages = StaticPages::new().with_page(url("X/Results"), html);
    let mut session = BrowserSession::new(pages, test_config());

    session.navigate("X/Results").await.unwrap();

    assert_eq!(
        session.texts(".wikitable tbody tr").unwrap(),
        vec!["2024-09-15 1st Tier 1"]
    );
}

#[tokio::test]
async fn test_back_reloads_previous_page() {
    let pages = StaticPages::new()
        .with_page(url("Team_Liquid"), TEAM_PAGE)
        .with_page(url("Nisha"), "<div class=\"fo-nttax-infobox\"></div>");
    let mut session = BrowserSession::new(pages, test_config());

    session.navigate("Team_Liquid").await.unwrap();
    session.navigate("Nisha").await.unwrap();
    assert_eq!(session.count(".roster-card a").unwrap(), 0);

    session.back().await.unwrap();

    assert_eq!(session.current_url(), Some(url("Team_Liquid").as_str()));
    assert_eq!(session.count(".roster-card a").unwrap(), 3);
    assert_eq!(
        session.source().requests(),
        vec![url("Team_Liquid"), url("Nisha"), url("Team_Liquid")]
    );
}

#[tokio::test]
async fn test_back_after_failed_navigation_returns_to_previous_page() {
    let pages = StaticPages::new().with_page(url("Team_Liquid"), TEAM_PAGE);
    let mut session = BrowserSession::new(pages, test_config());

    session.navigate("Team_Liquid").await.unwrap();
    let result = session.navigate("Missing_Player").await;
    assert!(matches!(result, Err(ScrapeError::UnknownPage { .. })));
    assert!(matches!(
        session.count("a"),
        Err(ScrapeError::NoPageLoaded)
    ));

    session.back().await.unwrap();
    assert_eq!(session.current_url(), Some(url("Team_Liquid").as_str()));
    assert_eq!(session.count(".roster-card a").unwrap(), 3);
}

#[tokio::test]
async fn test_back_without_history() {
    let pages = StaticPages::new().with_page(url("Team_Liquid"), TEAM_PAGE);
    let mut session = BrowserSession::new(pages, test_config());

    assert!(matches!(session.back().await, Err(ScrapeError::NoHistory)));

    session.navigate("Team_Liquid").await.unwrap();
    assert!(matches!(session.back().await, Err(ScrapeError::NoHistory)));
}

#[tokio::test]
async fn test_wait_for_present_selector_does_not_reload() {
    let pages = StaticPages::new().with_page(url("Team_Liquid"), TEAM_PAGE);
    let mut session = BrowserSession::new(pages, test_config());

    session.navigate("Team_Liquid").await.unwrap();
    session.wait_for(".roster-card a").await.unwrap();

    assert_eq!(session.page_loads(), 1);
}

#[tokio::test]
async fn test_wait_for_polls_until_selector_appears() {
    let pages = StaticPages::new();
    pages.insert_sequence(
        url("Team_Liquid"),
        vec![
            "<html><body>loading</body></html>".to_string(),
            "<html><body>still loading</body></html>".to_string(),
            TEAM_PAGE.to_string(),
        ],
    );
    let config = SessionConfig {
        wait_timeout: Duration::from_secs(5),
        ..test_config()
    };
    let mut session = BrowserSession::new(pages, config);

    session.navigate("Team_Liquid").await.unwrap();
    session.wait_for(".roster-card a").await.unwrap();

    assert_eq!(session.page_loads(), 3);
    assert_eq!(session.count(".roster-card a").unwrap(), 3);
}

#[tokio::test]
async fn test_wait_for_times_out() {
    let pages = StaticPages::new().with_page(url("Empty"), "<html></html>");
    let mut session = BrowserSession::new(pages, test_config());

    session.navigate("Empty").await.unwrap();
    let result = session.wait_for(".teamcard center a").await;

    match result {
        Err(ScrapeError::WaitTimeout { selector, url: u, .. }) => {
            assert_eq!(selector, ".teamcard center a");
            assert_eq!(u, url("Empty"));
        }
        other => panic!("Expected WaitTimeout, got {:?}", other),
    }
    assert!(session.page_loads() > 1);
}

#[tokio::test]
async fn test_wait_for_optional_absent_selector_is_final() {
    let pages = StaticPages::new().with_page(url("Flag"), "<html><body>flag page</body></html>");
    let mut session = BrowserSession::new(pages, test_config());

    session.navigate("Flag").await.unwrap();
    let found = session.wait_for_optional(".fo-nttax-infobox").await.unwrap();

    assert!(!found);
    assert_eq!(session.page_loads(), 1);
}

#[tokio::test]
async fn test_wait_for_optional_present_selector() {
    let pages = StaticPages::new().with_page(url("Team_Liquid"), TEAM_PAGE);
    let mut session = BrowserSession::new(pages, test_config());

    session.navigate("Team_Liquid").await.unwrap();

    assert!(session.wait_for_optional(".roster-card a").await.unwrap());
    assert_eq!(session.page_loads(), 1);
}

#[tokio::test]
async fn test_wait_for_optional_retries_failed_load_then_times_out() {
    let mut session = BrowserSession::new(StaticPages::new(), test_config());

    assert!(session.navigate("Missing").await.is_err());
    let result = session.wait_for_optional(".roster-card a").await;

    assert!(matches!(result, Err(ScrapeError::WaitTimeout { .. })));
    assert!(session.page_loads() > 1);
}

#[tokio::test]
async fn test_wait_for_without_page() {
    let mut session = BrowserSession::new(StaticPages::new(), test_config());
    assert!(matches!(
        session.wait_for("a").await,
        Err(ScrapeError::NoPageLoaded)
    ));
}

#[tokio::test]
async fn test_invalid_selector() {
    let pages = StaticPages::new().with_page(url("Team_Liquid"), TEAM_PAGE);
    let mut session = BrowserSession::new(pages, test_config());
    session.navigate("Team_Liquid").await.unwrap();

    match session.count("div[") {
        Err(ScrapeError::InvalidSelector { selector, .. }) => assert_eq!(selector, "div["),
        other => panic!("Expected InvalidSelector, got {:?}", other),
    }
}
