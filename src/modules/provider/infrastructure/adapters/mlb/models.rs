use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamRef {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub link: Option<String>,
}

// Schedule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub dates: Vec<ScheduleDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDate {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub games: Vec<ScheduledGame>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledGame {
    pub game_pk: u64,
    #[serde(default)]
    pub game_date: Option<String>,
    #[serde(default)]
    pub status: GameStatus,
    pub teams: GameTeams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatus {
    #[serde(default)]
    pub detailed_state: String,
    #[serde(default)]
    pub status_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameTeams {
    pub away: GameTeam,
    pub home: GameTeam,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameTeam {
    pub team: TeamRef,
    #[serde(default)]
    pub score: Option<u32>,
}

// Standings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandingsResponse {
    #[serde(default)]
    pub records: Vec<DivisionRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionRecord {
    #[serde(default)]
    pub league: Option<TeamRef>,
    #[serde(default)]
    pub division: Option<TeamRef>,
    #[serde(default)]
    pub team_records: Vec<TeamRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub team: TeamRef,
    pub league_record: LeagueRecord,
    /// Sent as a string ("1")
    #[serde(default)]
    pub division_rank: Option<String>,
    #[serde(default)]
    pub games_played: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueRecord {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ties: Option<u32>,
    /// Sent as a string (".623")
    #[serde(default)]
    pub pct: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DivisionsResponse {
    #[serde(default)]
    pub divisions: Vec<TeamRef>,
}

// Box score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxscoreResponse {
    pub teams: BoxscoreTeams,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxscoreTeams {
    pub away: BoxscoreTeam,
    pub home: BoxscoreTeam,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxscoreTeam {
    pub team: TeamRef,
    #[serde(default)]
    pub batters: Vec<u64>,
    #[serde(default)]
    pub pitchers: Vec<u64>,
    /// Keyed "ID{personId}"
    #[serde(default)]
    pub players: BTreeMap<String, BoxscorePlayer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxscorePlayer {
    pub person: Person,
    #[serde(default)]
    pub stats: PlayerStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: u64,
    #[serde(default)]
    pub full_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    #[serde(default)]
    pub batting: Option<BattingStats>,
    #[serde(default)]
    pub pitching: Option<PitchingStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingStats {
    #[serde(default)]
    pub at_bats: Option<u32>,
    #[serde(default)]
    pub runs: Option<u32>,
    #[serde(default)]
    pub hits: Option<u32>,
    #[serde(default)]
    pub home_runs: Option<u32>,
    #[serde(default)]
    pub rbi: Option<u32>,
    #[serde(default)]
    pub base_on_balls: Option<u32>,
    #[serde(default)]
    pub strike_outs: Option<u32>,
}

impl BattingStats {
    /// The API sends `{}` for players who never came to the plate
    pub fn is_empty(&self) -> bool {
        self.at_bats.is_none() && self.hits.is_none() && self.base_on_balls.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchingStats {
    #[serde(default)]
    pub innings_pitched: Option<String>,
    #[serde(default)]
    pub hits: Option<u32>,
    #[serde(default)]
    pub runs: Option<u32>,
    #[serde(default)]
    pub earned_runs: Option<u32>,
    #[serde(default)]
    pub base_on_balls: Option<u32>,
    #[serde(default)]
    pub strike_outs: Option<u32>,
}

impl PitchingStats {
    pub fn is_empty(&self) -> bool {
        self.innings_pitched.is_none()
    }
}

// Live feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveFeedResponse {
    pub game_data: LiveGameData,
    pub live_data: LiveData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveGameData {
    pub teams: LiveTeams,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveTeams {
    pub away: TeamRef,
    pub home: TeamRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveData {
    #[serde(default)]
    pub linescore: Option<Linescore>,
    #[serde(default)]
    pub plays: Option<Plays>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Linescore {
    pub teams: LinescoreTeams,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinescoreTeams {
    #[serde(default)]
    pub away: LinescoreTeam,
    #[serde(default)]
    pub home: LinescoreTeam,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinescoreTeam {
    #[serde(default)]
    pub runs: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plays {
    #[serde(default)]
    pub all_plays: Vec<LivePlay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LivePlay {
    #[serde(default)]
    pub result: PlayResult,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayResult {
    #[serde(default)]
    pub description: Option<String>,
}
