use crate::modules::provider::domain::entities::{
    BoxScore, ForecastDay, GameScore, SlottedArticle, Standings,
};
use crate::shared::domain::value_objects::League;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Sports data for one league.
///
/// Methods never fail: a provider logs what went wrong and hands back an
/// empty or absent result so the sheet can still be printed.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// League this provider serves
    fn league(&self) -> League;

    /// Games played on `date`
    async fn get_game_scores(&self, date: NaiveDate) -> Vec<GameScore>;

    /// Current standings, grouped for printing
    async fn get_standings(&self) -> Standings;

    /// Box score of the team's completed game on `date` (optional capability)
    async fn get_box_score(&self, _team_id: u32, _date: NaiveDate) -> Option<BoxScore> {
        None
    }

    /// Model-written recap of the team's game on `date` (optional capability)
    async fn get_game_summary(&self, _team_id: u32, _date: NaiveDate) -> Option<String> {
        None
    }
}

/// Articles for a news sheet, already placed into digest slots
#[async_trait]
pub trait ArticleProvider: Send + Sync {
    /// Human readable source name used in sheet titles
    fn source_name(&self) -> &str;

    async fn get_articles(&self) -> Vec<SlottedArticle>;

    /// Whether articles should be rewritten by a model before printing
    fn needs_summary(&self) -> bool {
        true
    }
}

/// Multi-day weather forecast for a fixed location
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Up to five days, today first; empty when the forecast is unavailable
    async fn get_forecast(&self) -> Vec<ForecastDay>;
}
