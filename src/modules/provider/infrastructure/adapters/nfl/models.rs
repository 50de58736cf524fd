use super::super::espn::models::{EspnTeam, Stat};
use serde::{Deserialize, Serialize};

// Core API standings (sports.core.api.espn.com)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreStandingsResponse {
    #[serde(default)]
    pub standings: Vec<CoreStandingEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreStandingEntry {
    #[serde(default)]
    pub team: Option<RefLink>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub records: Vec<CoreRecord>,
}

impl CoreStandingEntry {
    /// Stats live either on the entry or on its first record
    pub fn stats(&self) -> &[Stat] {
        if !self.stats.is_empty() {
            return &self.stats;
        }
        self.records
            .first()
            .map(|r| r.stats.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefLink {
    #[serde(default, rename = "$ref")]
    pub reference: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreRecord {
    #[serde(default)]
    pub stats: Vec<Stat>,
}

// Site API teams list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamsResponse {
    #[serde(default)]
    pub sports: Vec<TeamsSport>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamsSport {
    #[serde(default)]
    pub leagues: Vec<TeamsLeague>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamsLeague {
    #[serde(default)]
    pub teams: Vec<TeamEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamEntry {
    pub team: EspnTeam,
}
