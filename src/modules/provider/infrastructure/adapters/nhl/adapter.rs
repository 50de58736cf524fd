use super::mapper::NhlMapper;
use super::models::{BoxscoreResponse, PlayByPlayResponse, ScheduleResponse, StandingsResponse};
use crate::modules::provider::domain::entities::{BoxScore, GameScore, Standings};
use crate::modules::provider::infrastructure::source::DataSource;
use crate::modules::provider::traits::DataProvider;
use crate::modules::summary::{GameFacts, Summarizer};
use crate::shared::domain::value_objects::League;
use crate::shared::errors::{AppResult, ResultExt};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

const NHL_BASE_URL: &str = "https://api-web.nhle.com/v1";

/// NHL web API provider (api-web.nhle.com)
pub struct NhlAdapter {
    source: DataSource,
    base_url: String,
    mapper: NhlMapper,
    summarizer: Option<Arc<Summarizer>>,
}

impl NhlAdapter {
    pub fn new(source: DataSource) -> Self {
        Self {
            source: source.named("NHL"),
            base_url: NHL_BASE_URL.to_string(),
            mapper: NhlMapper::new(),
            summarizer: None,
        }
    }

    /// Enable model-written game recaps
    pub fn with_summarizer(mut self, summarizer: Arc<Summarizer>) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    async fn fetch_schedule(&self, date: NaiveDate) -> AppResult<ScheduleResponse> {
        let url = format!("{}/schedule/{}", self.base_url, date.format("%Y-%m-%d"));
        self.source
            .get_json(&url, &format!("nhl_schedule_{}", date))
            .await
    }

    pub async fn fetch_game_scores(&self, date: NaiveDate) -> AppResult<Vec<GameScore>> {
        log::info!("NHL: Fetching scores for {}", date);
        let schedule = self.fetch_schedule(date).await?;
        let games = self.mapper.map_schedule(schedule)?;
        log::info!("NHL: Found {} scored games for {}", games.len(), date);
        Ok(games)
    }

    pub async fn fetch_standings(&self) -> AppResult<Standings> {
        let url = format!("{}/standings/now", self.base_url);
        log::info!("NHL: Fetching standings");
        let response: StandingsResponse = self.source.get_json(&url, "nhl_standings").await?;
        Ok(self.mapper.map_standings(response))
    }

    async fn find_final_game(&self, team_id: u32, date: NaiveDate) -> AppResult<Option<u64>> {
        let schedule = self.fetch_schedule(date).await?;
        let game_id = self.mapper.find_final_game(&schedule, team_id);
        if game_id.is_none() {
            log::info!("NHL: No completed game for team {} on {}", team_id, date);
        }
        Ok(game_id)
    }

    pub async fn fetch_box_score(&self, team_id: u32, date: NaiveDate) -> AppResult<Option<BoxScore>> {
        let Some(game_id) = self.find_final_game(team_id, date).await? else {
            return Ok(None);
        };

        let url = format!("{}/gamecenter/{}/boxscore", self.base_url, game_id);
        log::info!("NHL: Fetching box score for game {}", game_id);
        let response: BoxscoreResponse = self
            .source
            .get_json(&url, &format!("nhl_boxscore_{}", game_id))
            .await?;

        Ok(Some(self.mapper.map_box_score(response, team_id)?))
    }

    pub async fn fetch_game_facts(&self, team_id: u32, date: NaiveDate) -> AppResult<Option<GameFacts>> {
        let Some(game_id) = self.find_final_game(team_id, date).await? else {
            return Ok(None);
        };

        let url = format!("{}/gamecenter/{}/play-by-play", self.base_url, game_id);
        log::info!("NHL: Fetching play-by-play for game {}", game_id);
        let response: PlayByPlayResponse = self
            .source
            .get_json(&url, &format!("nhl_play_by_play_{}", game_id))
            .await?;

        Ok(Some(self.mapper.map_game_facts(response)))
    }
}

#[async_trait]
impl DataProvider for NhlAdapter {
    fn league(&self) -> League {
        League::Nhl
    }

    async fn get_game_scores(&self, date: NaiveDate) -> Vec<GameScore> {
        self.fetch_game_scores(date).await.or_degrade("NHL: game scores")
    }

    async fn get_standings(&self) -> Standings {
        self.fetch_standings().await.or_degrade("NHL: standings")
    }

    async fn get_box_score(&self, team_id: u32, date: NaiveDate) -> Option<BoxScore> {
        self.fetch_box_score(team_id, date)
            .await
            .or_degrade("NHL: box score")
    }

    async fn get_game_summary(&self, team_id: u32, date: NaiveDate) -> Option<String> {
        let summarizer = self.summarizer.as_ref()?;
        let facts = self
            .fetch_game_facts(team_id, date)
            .await
            .or_degrade("NHL: game summary")?;
        Some(summarizer.summarize_game(League::Nhl, &facts).await)
    }
}
