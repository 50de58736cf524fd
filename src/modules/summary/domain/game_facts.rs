use serde::{Deserialize, Serialize};

/// What a model is told about one finished game
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameFacts {
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    /// Scoring plays and other notable events, in game order
    pub narrative: Vec<String>,
}
