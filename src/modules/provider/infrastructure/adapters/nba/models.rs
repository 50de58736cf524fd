use super::super::espn::models::{EspnTeam, Stat};
use serde::{Deserialize, Serialize};

/// Site API standings: one child per conference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandingsResponse {
    #[serde(default)]
    pub children: Vec<ConferenceStandings>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConferenceStandings {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub standings: StandingsEntries,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandingsEntries {
    #[serde(default)]
    pub entries: Vec<StandingsEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub team: EspnTeam,
    #[serde(default)]
    pub stats: Vec<Stat>,
}
