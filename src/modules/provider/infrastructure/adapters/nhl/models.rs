use serde::{Deserialize, Serialize};

/// `{"default": "..."}` wrapper the NHL API uses for names
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalizedName {
    #[serde(default)]
    pub default: String,
}

// Schedule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    #[serde(default)]
    pub game_week: Vec<GameDay>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameDay {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub games: Vec<ScheduledGame>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledGame {
    pub id: u64,
    #[serde(default)]
    pub game_state: String,
    #[serde(default, rename = "startTimeUTC")]
    pub start_time_utc: Option<String>,
    pub away_team: GameTeam,
    pub home_team: GameTeam,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameTeam {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub place_name: LocalizedName,
    #[serde(default)]
    pub common_name: LocalizedName,
    #[serde(default)]
    pub abbrev: Option<String>,
    #[serde(default)]
    pub score: Option<u32>,
}

impl GameTeam {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.place_name.default, self.common_name.default)
            .trim()
            .to_string()
    }
}

// Standings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandingsResponse {
    #[serde(default)]
    pub standings: Vec<TeamRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    #[serde(default)]
    pub team_name: LocalizedName,
    #[serde(default)]
    pub conference_name: Option<String>,
    #[serde(default)]
    pub division_name: Option<String>,
    #[serde(default)]
    pub division_sequence: Option<u32>,
    #[serde(default)]
    pub games_played: Option<u32>,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ot_losses: Option<u32>,
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub point_pctg: Option<f64>,
}

// Box score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxscoreResponse {
    pub id: u64,
    pub home_team: GameTeam,
    pub away_team: GameTeam,
    #[serde(default)]
    pub player_by_game_stats: Option<PlayerByGameStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerByGameStats {
    #[serde(default)]
    pub home_team: TeamPlayerStats,
    #[serde(default)]
    pub away_team: TeamPlayerStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamPlayerStats {
    #[serde(default)]
    pub forwards: Vec<SkaterStats>,
    #[serde(default)]
    pub defense: Vec<SkaterStats>,
    #[serde(default)]
    pub goalies: Vec<GoalieStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkaterStats {
    #[serde(default)]
    pub name: LocalizedName,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub points: u32,
    /// Newer payloads call shots on goal `sog`, older ones `shots`
    #[serde(default)]
    pub sog: Option<u32>,
    #[serde(default)]
    pub shots: Option<u32>,
    #[serde(default)]
    pub pim: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalieStats {
    #[serde(default)]
    pub name: LocalizedName,
    #[serde(default)]
    pub saves: Option<u32>,
    #[serde(default)]
    pub shots_against: Option<u32>,
    /// "24/30"
    #[serde(default)]
    pub save_shots_against: Option<String>,
}

// Play by play
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayByPlayResponse {
    pub id: u64,
    pub home_team: GameTeam,
    pub away_team: GameTeam,
    #[serde(default)]
    pub plays: Vec<Play>,
    #[serde(default)]
    pub roster_spots: Vec<RosterSpot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Play {
    #[serde(default)]
    pub type_desc_key: String,
    #[serde(default)]
    pub period_descriptor: Option<PeriodDescriptor>,
    #[serde(default)]
    pub time_in_period: Option<String>,
    #[serde(default)]
    pub details: Option<PlayDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodDescriptor {
    #[serde(default)]
    pub number: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayDetails {
    #[serde(default)]
    pub event_owner_team_id: Option<u32>,
    #[serde(default)]
    pub scoring_player_id: Option<u64>,
    #[serde(default)]
    pub committed_by_player_id: Option<u64>,
    #[serde(default)]
    pub shooting_player_id: Option<u64>,
    #[serde(default)]
    pub hitting_player_id: Option<u64>,
    #[serde(default)]
    pub player_id: Option<u64>,
    #[serde(default)]
    pub desc_key: Option<String>,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSpot {
    pub player_id: u64,
    #[serde(default)]
    pub team_id: Option<u32>,
    #[serde(default)]
    pub first_name: LocalizedName,
    #[serde(default)]
    pub last_name: LocalizedName,
}
