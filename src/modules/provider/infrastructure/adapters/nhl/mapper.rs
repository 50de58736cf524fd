use super::models::{
    BoxscoreResponse, GameTeam, Play, PlayByPlayResponse, ScheduleResponse, ScheduledGame,
    StandingsResponse,
};
use crate::modules::provider::domain::entities::{
    parse_game_time, BoxScore, GameScore, GoalieLine, SkaterLine, Standings, StandingsColumn,
    StandingsRow,
};
use crate::modules::provider::infrastructure::adapters::mapper::ScoreMapper;
use crate::modules::summary::GameFacts;
use crate::shared::errors::AppError;
use std::collections::HashMap;

/// Game states that have a score worth printing
pub const SCORED_STATES: &[&str] = &["FINAL", "OFF", "LIVE"];

/// State of a game whose box score is final
pub const FINAL_STATE: &str = "OFF";

/// Play types kept as narrative for game recaps
const NARRATIVE_PLAYS: &[&str] = &["goal", "penalty", "shot-on-goal", "hit", "takeaway"];

#[derive(Debug, Clone, Default)]
pub struct NhlMapper;

impl NhlMapper {
    pub fn new() -> Self {
        Self
    }

    /// Scored games of the first day in the schedule week
    pub fn map_schedule(&self, response: ScheduleResponse) -> Result<Vec<GameScore>, AppError> {
        let games: Vec<ScheduledGame> = response
            .game_week
            .into_iter()
            .next()
            .map(|day| day.games)
            .unwrap_or_default()
            .into_iter()
            .filter(|g| SCORED_STATES.contains(&g.game_state.as_str()))
            .collect();

        self.map_to_game_scores(games)
    }

    /// First final game in the week that involves `team_id`
    pub fn find_final_game(&self, response: &ScheduleResponse, team_id: u32) -> Option<u64> {
        response
            .game_week
            .iter()
            .flat_map(|day| day.games.iter())
            .find(|g| {
                g.game_state == FINAL_STATE
                    && (g.home_team.id == team_id || g.away_team.id == team_id)
            })
            .map(|g| g.id)
    }

    pub fn map_standings(&self, response: StandingsResponse) -> Standings {
        let rows = response
            .standings
            .into_iter()
            .enumerate()
            .map(|(idx, record)| StandingsRow {
                team: record.team_name.default,
                conference: record.conference_name,
                division: record
                    .division_name
                    .unwrap_or_else(|| "Unknown Division".to_string()),
                wins: record.wins,
                losses: record.losses,
                ties: None,
                ot_losses: record.ot_losses,
                points: record.points,
                games_played: record.games_played,
                win_pct: record.point_pctg.unwrap_or(0.0),
                rank: record.division_sequence.unwrap_or(idx as u32 + 1),
            })
            .collect();

        Standings::from_rows(
            rows,
            vec![
                StandingsColumn::GamesPlayed,
                StandingsColumn::Wins,
                StandingsColumn::Losses,
                StandingsColumn::OtLosses,
                StandingsColumn::Points,
            ],
        )
    }

    /// Skater and goalie lines of the side `team_id` played on
    pub fn map_box_score(
        &self,
        response: BoxscoreResponse,
        team_id: u32,
    ) -> Result<BoxScore, AppError> {
        let stats = response.player_by_game_stats.ok_or_else(|| {
            AppError::MappingError(format!("NHL boxscore {} has no player stats", response.id))
        })?;

        let (team, side) = if response.home_team.id == team_id {
            (response.home_team, stats.home_team)
        } else if response.away_team.id == team_id {
            (response.away_team, stats.away_team)
        } else {
            return Err(AppError::MappingError(format!(
                "Team {} did not play in NHL game {}",
                team_id, response.id
            )));
        };

        let skaters = side
            .forwards
            .into_iter()
            .chain(side.defense)
            .map(|p| SkaterLine {
                name: p.name.default,
                position: p.position.unwrap_or_default(),
                goals: p.goals,
                assists: p.assists,
                points: p.points,
                shots: p.sog.or(p.shots).unwrap_or(0),
                penalty_minutes: p.pim,
            })
            .collect();

        let goalies = side
            .goalies
            .into_iter()
            .map(|g| {
                let (saves, shots_against) = match (g.saves, g.shots_against) {
                    (Some(saves), Some(shots)) => (saves, shots),
                    _ => parse_save_shots(g.save_shots_against.as_deref()),
                };
                GoalieLine {
                    name: g.name.default,
                    saves,
                    shots_against,
                }
            })
            .collect();

        Ok(BoxScore::Hockey {
            team: team.full_name(),
            skaters,
            goalies,
        })
    }

    pub fn map_game_facts(&self, response: PlayByPlayResponse) -> GameFacts {
        let names: HashMap<u64, String> = response
            .roster_spots
            .iter()
            .map(|spot| {
                (
                    spot.player_id,
                    format!("{} {}", spot.first_name.default, spot.last_name.default),
                )
            })
            .collect();
        let teams: HashMap<u32, String> = [&response.home_team, &response.away_team]
            .into_iter()
            .map(|t| (t.id, t.common_name.default.clone()))
            .collect();

        let narrative = response
            .plays
            .iter()
            .filter(|p| NARRATIVE_PLAYS.contains(&p.type_desc_key.as_str()))
            .map(|p| describe_play(p, &names, &teams))
            .collect();

        GameFacts {
            home_team: response.home_team.full_name(),
            away_team: response.away_team.full_name(),
            home_score: response.home_team.score.unwrap_or(0),
            away_score: response.away_team.score.unwrap_or(0),
            narrative,
        }
    }
}

impl ScoreMapper<ScheduledGame> for NhlMapper {
    fn map_to_game_score(&self, game: ScheduledGame) -> Result<GameScore, AppError> {
        Ok(GameScore {
            away_team: game.away_team.full_name(),
            home_team: game.home_team.full_name(),
            away_score: Some(score_or_zero(&game.away_team)),
            home_score: Some(score_or_zero(&game.home_team)),
            game_date: game.start_time_utc.as_deref().and_then(parse_game_time),
            status: game.game_state,
        })
    }
}

fn score_or_zero(team: &GameTeam) -> u32 {
    team.score.unwrap_or(0)
}

/// "24/30" -> (24, 30)
fn parse_save_shots(raw: Option<&str>) -> (u32, u32) {
    raw.and_then(|s| s.split_once('/'))
        .and_then(|(saves, shots)| Some((saves.trim().parse().ok()?, shots.trim().parse().ok()?)))
        .unwrap_or((0, 0))
}

fn describe_play(play: &Play, names: &HashMap<u64, String>, teams: &HashMap<u32, String>) -> String {
    let period = play.period_descriptor.as_ref().map(|p| p.number).unwrap_or(0);
    let clock = play.time_in_period.as_deref().unwrap_or("--:--");
    let mut line = format!("P{} {} {}", period, clock, play.type_desc_key);

    if let Some(details) = &play.details {
        let actor = details
            .scoring_player_id
            .or(details.committed_by_player_id)
            .or(details.shooting_player_id)
            .or(details.hitting_player_id)
            .or(details.player_id)
            .and_then(|id| names.get(&id));
        if let Some(actor) = actor {
            line.push_str(&format!(" by {}", actor));
        }
        if let Some(team) = details.event_owner_team_id.and_then(|id| teams.get(&id)) {
            line.push_str(&format!(" ({})", team));
        }
        if let Some(desc) = &details.desc_key {
            line.push_str(&format!(" [{}]", desc));
        }
        if let (Some(away), Some(home)) = (details.away_score, details.home_score) {
            line.push_str(&format!(" score {}-{}", away, home));
        }
    }
    line
}
