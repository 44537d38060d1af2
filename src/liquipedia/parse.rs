//! Text helpers for scraped page content.

use super::CATEGORY_MARKER;
use crate::cli::types::Position;

/// Place and tournament extracted from one results row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub place: String,
    pub tournament_name: String,
}

/// Tokens a row needs before the fixed layout can be read.
const MIN_ROW_TOKENS: usize = 6;

/// Split a results row on whitespace and read the fixed layout:
/// date, place, then the tier and first words of the tournament.
///
/// `"2024-09-15 1st Tier 1 The International 2024 3:0 $1,170,965"` gives
/// place `1st` and tournament `Tier 1 The International`. Rows with fewer than
/// six tokens, or not starting with a date, give `None` (header rows, year
/// separators).
pub fn parse_result_row(text: &str) -> Option<ResultRow> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < MIN_ROW_TOKENS || !tokens[0].starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    Some(ResultRow {
        place: tokens[1].to_string(),
        tournament_name: tokens[2..MIN_ROW_TOKENS].join(" "),
    })
}

/// Last path segment of a link, e.g. `Team_Liquid` from
/// `https://liquipedia.net/dota2/Team_Liquid`. Query strings and fragments
/// are dropped.
pub fn slug_from_href(href: &str) -> Option<&str> {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
}

pub fn is_category_link(href: &str) -> bool {
    href.contains(CATEGORY_MARKER)
}

/// Team slugs from participant hrefs, category links removed, document order kept.
pub fn team_slugs<I, S>(hrefs: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    hrefs
        .into_iter()
        .filter_map(|href| {
            let href = href.as_ref();
            if is_category_link(href) {
                log::info!("Skipping category link: {}", href);
                return None;
            }
            slug_from_href(href).map(str::to_string)
        })
        .collect()
}

/// First infobox label that is an allowed position, in the order listed.
pub fn select_position<I, S>(labels: I) -> Option<Position>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels
        .into_iter()
        .find_map(|label| Position::from_label(label.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_result_row_fixed_layout() {
        let row = parse_result_row("2024-09-15 1st Tier 1 The International 2024 3:0 $1,170,965")
            .unwrap();
        assert_eq!(row.place, "1st");
        assert_eq!(row.tournament_name, "Tier 1 The International");
    }

    #[test]
    fn test_parse_result_row_tolerates_extra_whitespace() {
        let row = parse_result_row("  2024-06-30\t3rd  Tier 2   DreamLeague Season 23 ").unwrap();
        assert_eq!(row.place, "3rd");
        assert_eq!(row.tournament_name, "Tier 2 DreamLeague Season");
    }

    #[test]
    fn test_parse_result_row_rejects_short_rows() {
        assert_eq!(parse_result_row(""), None);
        assert_eq!(parse_result_row("Date Place Tier Tournament Result"), None);
        assert_eq!(
            parse_result_row("Date Place Tier Type Tournament Result Prize"),
            None
        );
        assert_eq!(parse_result_row("2024"), None);
    }

    #[test]
    fn test_slug_from_href() {
        assert_eq!(
            slug_from_href("https://liquipedia.net/dota2/Team_Liquid"),
            Some("Team_Liquid")
        );
        assert_eq!(slug_from_href("/dota2/Miracle-"), Some("Miracle-"));
        assert_eq!(slug_from_href("/dota2/Tundra_Esports/"), Some("Tundra_Esports"));
        assert_eq!(slug_from_href("/dota2/Nisha?action=edit"), Some("Nisha"));
        assert_eq!(slug_from_href("/dota2/Nisha#Results"), Some("Nisha"));
        assert_eq!(slug_from_href(""), None);
    }

    #[test]
    fn test_team_slugs_drop_categories_in_order() {
        let hrefs = [
            "https://liquipedia.net/dota2/Team_Liquid",
            "https://liquipedia.net/dota2/Category:Teams",
            "https://liquipedia.net/dota2/Gaimin_Gladiators",
            "https://liquipedia.net/dota2/Team_Falcons",
        ];

        assert!(is_category_link(hrefs[1]));
        assert!(!is_category_link(hrefs[0]));
        assert_eq!(
            team_slugs(hrefs),
            vec!["Team_Liquid", "Gaimin_Gladiators", "Team_Falcons"]
        );
    }

    #[test]
    fn test_select_position_first_allowed_wins() {
        assert_eq!(select_position(["Coach", "Carry"]), Some(Position::Carry));
        assert_eq!(
            select_position(["Captain", "Solo Middle", "Carry"]),
            Some(Position::SoloMiddle)
        );
        assert_eq!(
            select_position(vec!["Support".to_string(), "Offlaner".to_string()]),
            Some(Position::Support)
        );
    }

    #[test]
    fn test_select_position_none_allowed() {
        assert_eq!(select_position(["Coach", "Analyst"]), None);
        assert_eq!(select_position(Vec::<String>::new()), None);
    }
}
