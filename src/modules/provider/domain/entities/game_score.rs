use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Final (or in-progress) result of a single game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameScore {
    pub away_team: String,
    pub home_team: String,
    pub away_score: Option<u32>,
    pub home_score: Option<u32>,
    pub game_date: Option<DateTime<Utc>>,
    /// League-specific status string ("Final", "OFF", "STATUS_FINAL", ...)
    pub status: String,
}

impl GameScore {
    /// Only games with both scores are worth printing
    pub fn has_score(&self) -> bool {
        self.away_score.is_some() && self.home_score.is_some()
    }
}

/// Parse the timestamps the league APIs hand out.
///
/// ESPN omits seconds ("2024-10-22T23:30Z"), the others send RFC 3339.
pub fn parse_game_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%MZ")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_game_time_formats() {
        let rfc = parse_game_time("2024-07-04T17:05:00Z").unwrap();
        assert_eq!((rfc.month(), rfc.day(), rfc.hour()), (7, 4, 17));

        let espn = parse_game_time("2024-10-22T23:30Z").unwrap();
        assert_eq!((espn.hour(), espn.minute()), (23, 30));

        assert!(parse_game_time("yesterday").is_none());
    }

    #[test]
    fn test_has_score_requires_both_sides() {
        let mut game = GameScore {
            away_team: "Toronto Maple Leafs".to_string(),
            home_team: "Columbus Blue Jackets".to_string(),
            away_score: Some(3),
            home_score: None,
            game_date: None,
            status: "LIVE".to_string(),
        };
        assert!(!game.has_score());
        game.home_score = Some(6);
        assert!(game.has_score());
    }
}
