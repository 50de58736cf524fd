use super::models::{CalendarPeriod, Event, ScoreboardResponse, Stat};
use crate::modules::provider::domain::entities::{parse_game_time, GameScore, StandingsRow};
use crate::modules::provider::infrastructure::adapters::mapper::ScoreMapper;
use crate::shared::errors::AppError;
use chrono::NaiveDate;
use std::collections::HashMap;

pub const FINAL_STATUS: &str = "STATUS_FINAL";

/// Season type and week number of an NFL scoreboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonWeek {
    pub season_type: u32,
    pub week: u32,
}

/// Scoreboard mapping shared by the ESPN-backed leagues
#[derive(Debug, Clone, Default)]
pub struct EspnMapper;

impl EspnMapper {
    pub fn new() -> Self {
        Self
    }

    /// Completed games only
    pub fn map_scoreboard(&self, response: ScoreboardResponse) -> Result<Vec<GameScore>, AppError> {
        let finished: Vec<Event> = response
            .events
            .into_iter()
            .filter(|event| {
                event
                    .competitions
                    .first()
                    .and_then(|c| c.status.as_ref())
                    .map(|s| s.kind.name == FINAL_STATUS || s.kind.completed)
                    .unwrap_or(false)
            })
            .collect();

        self.map_to_game_scores(finished)
    }

    /// Locate the calendar week whose window contains `date`
    pub fn find_week(&self, response: &ScoreboardResponse, date: NaiveDate) -> Option<SeasonWeek> {
        let calendar = &response.leagues.first()?.calendar;
        calendar
            .iter()
            .filter(|period| covers(&period.start_date, &period.end_date, date))
            .find_map(|period| week_in(period, date))
    }

    /// `{"name": value}` lookup over an ESPN stats array
    pub fn stat_map(&self, stats: &[Stat]) -> HashMap<String, f64> {
        stats
            .iter()
            .filter_map(|s| s.value.map(|v| (s.name.clone(), v)))
            .collect()
    }

    /// Sort each conference by win percentage (best first) and number the ranks
    pub fn rank_by_win_pct(&self, mut rows: Vec<StandingsRow>) -> Vec<StandingsRow> {
        rows.sort_by(|a, b| {
            a.conference.cmp(&b.conference).then(
                b.win_pct
                    .partial_cmp(&a.win_pct)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
        });

        let mut position: HashMap<Option<String>, u32> = HashMap::new();
        for row in rows.iter_mut() {
            let counter = position.entry(row.conference.clone()).or_insert(0);
            *counter += 1;
            row.rank = *counter;
        }
        rows
    }
}

impl ScoreMapper<Event> for EspnMapper {
    fn map_to_game_score(&self, event: Event) -> Result<GameScore, AppError> {
        let competition = event.competitions.into_iter().next().ok_or_else(|| {
            AppError::MappingError(format!("ESPN event {} has no competition", event.id))
        })?;

        let status = competition
            .status
            .as_ref()
            .map(|s| s.kind.name.clone())
            .unwrap_or_default();

        // competitors are listed home first, but trust the homeAway flag when present
        let mut competitors = competition.competitors.into_iter();
        let (first, second) = match (competitors.next(), competitors.next()) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                return Err(AppError::MappingError(format!(
                    "ESPN event {} does not have two competitors",
                    event.id
                )))
            }
        };
        let (home, away) = if first.home_away.as_deref() == Some("away") {
            (second, first)
        } else {
            (first, second)
        };

        Ok(GameScore {
            away_team: away.team.display_name,
            home_team: home.team.display_name,
            away_score: away.score,
            home_score: home.score,
            game_date: event.date.as_deref().and_then(parse_game_time),
            status,
        })
    }
}

fn covers(start: &Option<String>, end: &Option<String>, date: NaiveDate) -> bool {
    let day = |raw: &Option<String>| {
        raw.as_deref()
            .and_then(parse_game_time)
            .map(|dt| dt.date_naive())
    };
    match (day(start), day(end)) {
        (Some(start), Some(end)) => start <= date && date <= end,
        _ => false,
    }
}

fn week_in(period: &CalendarPeriod, date: NaiveDate) -> Option<SeasonWeek> {
    let season_type = period.value?;
    period
        .entries
        .iter()
        .find(|entry| covers(&entry.start_date, &entry.end_date, date))
        .and_then(|entry| entry.value)
        .map(|week| SeasonWeek { season_type, week })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scoreboard() -> ScoreboardResponse {
        serde_json::from_value(json!({
            "leagues": [{
                "calendar": [
                    {
                        "label": "Preseason", "value": "1",
                        "startDate": "2024-07-31T07:00Z", "endDate": "2024-09-05T06:59Z",
                        "entries": [{"label": "Hall of Fame Weekend", "value": "1", "startDate": "2024-07-31T07:00Z", "endDate": "2024-08-07T06:59Z"}]
                    },
                    {
                        "label": "Regular Season", "value": "2",
                        "startDate": "2024-09-05T07:00Z", "endDate": "2025-01-09T07:59Z",
                        "entries": [
                            {"label": "Week 1", "value": "1", "startDate": "2024-09-05T07:00Z", "endDate": "2024-09-11T06:59Z"},
                            {"label": "Week 2", "value": "2", "startDate": "2024-09-11T07:00Z", "endDate": "2024-09-18T06:59Z"}
                        ]
                    }
                ]
            }],
            "events": [
                {
                    "id": "401671789",
                    "date": "2024-09-06T00:20Z",
                    "competitions": [{
                        "status": {"type": {"name": "STATUS_FINAL", "completed": true}},
                        "competitors": [
                            {"homeAway": "home", "score": "27", "team": {"id": "12", "displayName": "Kansas City Chiefs"}},
                            {"homeAway": "away", "score": "20", "team": {"id": "33", "displayName": "Baltimore Ravens"}}
                        ]
                    }]
                },
                {
                    "id": "401671790",
                    "date": "2024-09-08T17:00Z",
                    "competitions": [{
                        "status": {"type": {"name": "STATUS_SCHEDULED", "completed": false}},
                        "competitors": [
                            {"homeAway": "home", "team": {"displayName": "Atlanta Falcons"}},
                            {"homeAway": "away", "team": {"displayName": "Pittsburgh Steelers"}}
                        ]
                    }]
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_map_scoreboard_keeps_final_games() {
        let games = EspnMapper::new().map_scoreboard(scoreboard()).unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].home_team, "Kansas City Chiefs");
        assert_eq!(games[0].away_team, "Baltimore Ravens");
        assert_eq!(games[0].home_score, Some(27));
        assert_eq!(games[0].away_score, Some(20));
        assert_eq!(games[0].status, "STATUS_FINAL");
    }

    #[test]
    fn test_find_week_by_date() {
        let mapper = EspnMapper::new();
        let board = scoreboard();
        let week = mapper
            .find_week(&board, NaiveDate::from_ymd_opt(2024, 9, 8).unwrap())
            .unwrap();
        assert_eq!(week, SeasonWeek { season_type: 2, week: 1 });

        let week = mapper
            .find_week(&board, NaiveDate::from_ymd_opt(2024, 9, 15).unwrap())
            .unwrap();
        assert_eq!(week.week, 2);

        assert!(mapper
            .find_week(&board, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
            .is_none());
    }

    #[test]
    fn test_rank_by_win_pct_per_conference() {
        let row = |team: &str, conference: &str, pct: f64| StandingsRow {
            team: team.to_string(),
            conference: Some(conference.to_string()),
            division: conference.to_string(),
            wins: 0,
            losses: 0,
            ties: None,
            ot_losses: None,
            points: None,
            games_played: None,
            win_pct: pct,
            rank: 0,
        };
        let ranked = EspnMapper::new().rank_by_win_pct(vec![
            row("Eagles", "NFC", 0.70),
            row("Chiefs", "AFC", 0.88),
            row("Lions", "NFC", 0.88),
            row("Bills", "AFC", 0.76),
        ]);
        let order: Vec<_> = ranked.iter().map(|r| (r.team.as_str(), r.rank)).collect();
        assert_eq!(
            order,
            vec![("Chiefs", 1), ("Bills", 2), ("Lions", 1), ("Eagles", 2)]
        );
    }
}
