use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattingLine {
    pub name: String,
    pub at_bats: u32,
    pub runs: u32,
    pub hits: u32,
    pub home_runs: u32,
    pub rbi: u32,
    pub walks: u32,
    pub strikeouts: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchingLine {
    pub name: String,
    /// Kept as text: "6.1" means six and one third innings
    pub innings_pitched: String,
    pub hits: u32,
    pub runs: u32,
    pub earned_runs: u32,
    pub walks: u32,
    pub strikeouts: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkaterLine {
    pub name: String,
    pub position: String,
    pub goals: u32,
    pub assists: u32,
    pub points: u32,
    pub shots: u32,
    pub penalty_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalieLine {
    pub name: String,
    pub saves: u32,
    pub shots_against: u32,
}

impl GoalieLine {
    pub fn save_percentage(&self) -> String {
        save_percentage(self.saves, self.shots_against)
    }
}

/// Save percentage with three decimals, "N/A" when no shots were faced
pub fn save_percentage(saves: u32, shots_against: u32) -> String {
    if shots_against == 0 {
        return "N/A".to_string();
    }
    format!("{:.3}", saves as f64 / shots_against as f64)
}

/// Per-player lines for the featured team in one completed game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BoxScore {
    Baseball {
        team: String,
        batting: Vec<BattingLine>,
        pitching: Vec<PitchingLine>,
    },
    Hockey {
        team: String,
        skaters: Vec<SkaterLine>,
        goalies: Vec<GoalieLine>,
    },
}

impl BoxScore {
    pub fn team(&self) -> &str {
        match self {
            BoxScore::Baseball { team, .. } | BoxScore::Hockey { team, .. } => team,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            BoxScore::Baseball {
                batting, pitching, ..
            } => batting.is_empty() && pitching.is_empty(),
            BoxScore::Hockey {
                skaters, goalies, ..
            } => skaters.is_empty() && goalies.is_empty(),
        }
    }
}
