use super::models::{
    BoxscoreResponse, BoxscoreTeam, DivisionRecord, LiveFeedResponse, ScheduleResponse,
    ScheduledGame,
};
use crate::modules::provider::domain::entities::{
    parse_game_time, BattingLine, BoxScore, GameScore, PitchingLine, Standings, StandingsColumn,
    StandingsRow,
};
use crate::modules::provider::infrastructure::adapters::mapper::ScoreMapper;
use crate::modules::summary::GameFacts;
use crate::shared::errors::AppError;

pub const UNKNOWN_DIVISION: &str = "Unknown Division";

/// Status code of a finished game
pub const FINAL_STATUS_CODE: &str = "F";

#[derive(Debug, Clone, Default)]
pub struct MlbMapper;

impl MlbMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map_schedule(&self, response: ScheduleResponse) -> Result<Vec<GameScore>, AppError> {
        let games = response
            .dates
            .into_iter()
            .flat_map(|d| d.games)
            .collect();
        self.map_to_game_scores(games)
    }

    /// First finished game involving `team_id`
    pub fn find_final_game(&self, response: &ScheduleResponse, team_id: u32) -> Option<u64> {
        self.team_games(response, team_id)
            .find(|g| g.status.status_code == FINAL_STATUS_CODE)
            .map(|g| g.game_pk)
    }

    /// First game of the day involving `team_id`, whatever its status
    pub fn find_any_game(&self, response: &ScheduleResponse, team_id: u32) -> Option<u64> {
        self.team_games(response, team_id).next().map(|g| g.game_pk)
    }

    fn team_games<'a>(
        &self,
        response: &'a ScheduleResponse,
        team_id: u32,
    ) -> impl Iterator<Item = &'a ScheduledGame> {
        response
            .dates
            .iter()
            .flat_map(|d| d.games.iter())
            .filter(move |g| g.teams.away.team.id == team_id || g.teams.home.team.id == team_id)
    }

    /// Rows for one division record; `division` is the resolved name
    pub fn map_division_record(&self, record: DivisionRecord, division: &str) -> Vec<StandingsRow> {
        let conference = record.league.as_ref().and_then(|l| league_name(l.id));
        record
            .team_records
            .into_iter()
            .enumerate()
            .map(|(idx, team)| StandingsRow {
                team: team.team.name,
                conference: conference.clone(),
                division: division.to_string(),
                wins: team.league_record.wins,
                losses: team.league_record.losses,
                ties: team.league_record.ties,
                ot_losses: None,
                points: None,
                games_played: team.games_played,
                win_pct: parse_pct(team.league_record.pct.as_deref()),
                rank: team
                    .division_rank
                    .as_deref()
                    .and_then(|r| r.trim().parse().ok())
                    .unwrap_or(idx as u32 + 1),
            })
            .collect()
    }

    pub fn standings(&self, rows: Vec<StandingsRow>) -> Standings {
        Standings::from_rows(
            rows,
            vec![
                StandingsColumn::Wins,
                StandingsColumn::Losses,
                StandingsColumn::WinPct,
            ],
        )
    }

    pub fn map_box_score(&self, response: BoxscoreResponse, team_id: u32) -> Result<BoxScore, AppError> {
        let side = if response.teams.home.team.id == team_id {
            response.teams.home
        } else if response.teams.away.team.id == team_id {
            response.teams.away
        } else {
            return Err(AppError::MappingError(format!(
                "Team {} is not in this MLB box score",
                team_id
            )));
        };

        let batting = ordered_players(&side, &side.batters)
            .into_iter()
            .filter_map(|p| {
                let stats = p.stats.batting.as_ref().filter(|s| !s.is_empty())?;
                Some(BattingLine {
                    name: p.person.full_name.clone(),
                    at_bats: stats.at_bats.unwrap_or(0),
                    runs: stats.runs.unwrap_or(0),
                    hits: stats.hits.unwrap_or(0),
                    home_runs: stats.home_runs.unwrap_or(0),
                    rbi: stats.rbi.unwrap_or(0),
                    walks: stats.base_on_balls.unwrap_or(0),
                    strikeouts: stats.strike_outs.unwrap_or(0),
                })
            })
            .collect();

        let pitching = ordered_players(&side, &side.pitchers)
            .into_iter()
            .filter_map(|p| {
                let stats = p.stats.pitching.as_ref().filter(|s| !s.is_empty())?;
                Some(PitchingLine {
                    name: p.person.full_name.clone(),
                    innings_pitched: stats.innings_pitched.clone().unwrap_or_default(),
                    hits: stats.hits.unwrap_or(0),
                    runs: stats.runs.unwrap_or(0),
                    earned_runs: stats.earned_runs.unwrap_or(0),
                    walks: stats.base_on_balls.unwrap_or(0),
                    strikeouts: stats.strike_outs.unwrap_or(0),
                })
            })
            .collect();

        Ok(BoxScore::Baseball {
            team: side.team.name.clone(),
            batting,
            pitching,
        })
    }

    pub fn map_game_facts(&self, response: LiveFeedResponse) -> GameFacts {
        let (away_score, home_score) = response
            .live_data
            .linescore
            .as_ref()
            .map(|l| (l.teams.away.runs.unwrap_or(0), l.teams.home.runs.unwrap_or(0)))
            .unwrap_or((0, 0));

        let narrative = response
            .live_data
            .plays
            .map(|p| p.all_plays)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|play| play.result.description)
            .collect();

        GameFacts {
            home_team: response.game_data.teams.home.name,
            away_team: response.game_data.teams.away.name,
            home_score,
            away_score,
            narrative,
        }
    }
}

impl ScoreMapper<ScheduledGame> for MlbMapper {
    fn map_to_game_score(&self, game: ScheduledGame) -> Result<GameScore, AppError> {
        Ok(GameScore {
            away_team: game.teams.away.team.name,
            home_team: game.teams.home.team.name,
            away_score: game.teams.away.score,
            home_score: game.teams.home.score,
            game_date: game.game_date.as_deref().and_then(parse_game_time),
            status: game.status.detailed_state,
        })
    }
}

fn league_name(league_id: u32) -> Option<String> {
    match league_id {
        103 => Some("American League".to_string()),
        104 => Some("National League".to_string()),
        _ => None,
    }
}

fn parse_pct(raw: Option<&str>) -> f64 {
    raw.and_then(|p| p.trim().parse::<f64>().ok()).unwrap_or(0.0)
}

/// Players in the order listed by `ids`; the whole roster when the list is missing
fn ordered_players<'a>(
    side: &'a BoxscoreTeam,
    ids: &[u64],
) -> Vec<&'a super::models::BoxscorePlayer> {
    if ids.is_empty() {
        return side.players.values().collect();
    }
    ids.iter()
        .filter_map(|id| side.players.get(&format!("ID{}", id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_pct() {
        assert_eq!(parse_pct(Some(".623")), 0.623);
        assert_eq!(parse_pct(Some("1.000")), 1.0);
        assert_eq!(parse_pct(Some("-.--")), 0.0);
        assert_eq!(parse_pct(None), 0.0);
    }

    #[test]
    fn test_map_division_record() {
        let record: DivisionRecord = serde_json::from_value(json!({
            "league": {"id": 104},
            "division": {"id": 204, "link": "/api/v1/divisions/204"},
            "teamRecords": [
                {"team": {"id": 121, "name": "New York Mets"}, "leagueRecord": {"wins": 89, "losses": 73, "pct": ".549"}, "divisionRank": "2"},
                {"team": {"id": 143, "name": "Philadelphia Phillies"}, "leagueRecord": {"wins": 95, "losses": 67, "pct": ".586"}, "divisionRank": "1"}
            ]
        }))
        .unwrap();

        let mapper = MlbMapper::new();
        let standings = mapper.standings(mapper.map_division_record(record, "National League East"));
        let group = &standings.groups[0];
        assert_eq!(group.conference.as_deref(), Some("National League"));
        assert_eq!(group.label, "National League East");
        assert_eq!(group.rows[0].team, "Philadelphia Phillies");
        assert_eq!(group.rows[0].win_pct, 0.586);
        assert_eq!(group.rows[1].rank, 2);
    }

    #[test]
    fn test_box_score_follows_batting_order_and_skips_empty_stats() {
        let response: BoxscoreResponse = serde_json::from_value(json!({
            "teams": {
                "away": {"team": {"id": 121, "name": "New York Mets"}},
                "home": {
                    "team": {"id": 143, "name": "Philadelphia Phillies"},
                    "batters": [656941, 547180, 1],
                    "pitchers": [554430],
                    "players": {
                        "ID547180": {"person": {"id": 547180, "fullName": "Bryce Harper"},
                                     "stats": {"batting": {"atBats": 4, "runs": 1, "hits": 2, "homeRuns": 1, "rbi": 3, "baseOnBalls": 0, "strikeOuts": 1}, "pitching": {}}},
                        "ID656941": {"person": {"id": 656941, "fullName": "Kyle Schwarber"},
                                     "stats": {"batting": {"atBats": 3, "runs": 0, "hits": 0, "homeRuns": 0, "rbi": 0, "baseOnBalls": 1, "strikeOuts": 2}}},
                        "ID1": {"person": {"id": 1, "fullName": "Bench Player"}, "stats": {"batting": {}}},
                        "ID554430": {"person": {"id": 554430, "fullName": "Zack Wheeler"},
                                     "stats": {"batting": {}, "pitching": {"inningsPitched": "7.0", "hits": 4, "runs": 1, "earnedRuns": 1, "baseOnBalls": 2, "strikeOuts": 9}}}
                    }
                }
            }
        }))
        .unwrap();

        match MlbMapper::new().map_box_score(response, 143).unwrap() {
            BoxScore::Baseball { team, batting, pitching } => {
                assert_eq!(team, "Philadelphia Phillies");
                let names: Vec<_> = batting.iter().map(|b| b.name.as_str()).collect();
                assert_eq!(names, vec!["Kyle Schwarber", "Bryce Harper"]);
                assert_eq!(batting[1].rbi, 3);
                assert_eq!(pitching.len(), 1);
                assert_eq!(pitching[0].innings_pitched, "7.0");
                assert_eq!(pitching[0].strikeouts, 9);
            }
            other => panic!("unexpected box score: {:?}", other),
        }
    }

    #[test]
    fn test_box_score_for_absent_team_is_an_error() {
        let response: BoxscoreResponse = serde_json::from_value(json!({
            "teams": {
                "away": {"team": {"id": 121, "name": "New York Mets"}},
                "home": {"team": {"id": 144, "name": "Atlanta Braves"}}
            }
        }))
        .unwrap();
        assert!(MlbMapper::new().map_box_score(response, 143).is_err());
    }
}
