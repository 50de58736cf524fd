use super::mapper::{MlbMapper, UNKNOWN_DIVISION};
use super::models::{
    BoxscoreResponse, DivisionRecord, DivisionsResponse, LiveFeedResponse, ScheduleResponse,
    StandingsResponse,
};
use crate::modules::provider::domain::entities::{BoxScore, GameScore, Standings, StandingsRow};
use crate::modules::provider::infrastructure::source::DataSource;
use crate::modules::provider::traits::DataProvider;
use crate::modules::summary::{GameFacts, Summarizer};
use crate::shared::domain::value_objects::League;
use crate::shared::errors::{AppResult, ResultExt};
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Utc};
use std::sync::Arc;

const MLB_BASE_URL: &str = "https://statsapi.mlb.com";

/// MLB Stats API provider (statsapi.mlb.com)
pub struct MlbAdapter {
    source: DataSource,
    base_url: String,
    mapper: MlbMapper,
    summarizer: Option<Arc<Summarizer>>,
    /// Date the standings season is derived from
    as_of: NaiveDate,
}

impl MlbAdapter {
    pub fn new(source: DataSource) -> Self {
        Self {
            source: source.named("MLB"),
            base_url: MLB_BASE_URL.to_string(),
            mapper: MlbMapper::new(),
            summarizer: None,
            as_of: Utc::now().date_naive(),
        }
    }

    pub fn with_summarizer(mut self, summarizer: Arc<Summarizer>) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    pub fn with_as_of(mut self, as_of: NaiveDate) -> Self {
        self.as_of = as_of;
        self
    }

    pub async fn fetch_game_scores(&self, date: NaiveDate) -> AppResult<Vec<GameScore>> {
        let day = date.format("%Y-%m-%d");
        let url = format!(
            "{}/api/v1/schedule?sportId=1&startDate={}&endDate={}",
            self.base_url, day, day
        );
        log::info!("MLB: Fetching scores for {}", date);
        let schedule: ScheduleResponse = self
            .source
            .get_json(&url, &format!("mlb_schedule_{}", date))
            .await?;
        let games = self.mapper.map_schedule(schedule)?;
        log::info!("MLB: Found {} games for {}", games.len(), date);
        Ok(games)
    }

    async fn fetch_season_records(&self, season: i32) -> AppResult<Vec<DivisionRecord>> {
        let url = format!(
            "{}/api/v1/standings?season={}&leagueId=103,104",
            self.base_url, season
        );
        let response: StandingsResponse = self
            .source
            .get_json(&url, &format!("mlb_standings_{}", season))
            .await?;
        Ok(response.records)
    }

    pub async fn fetch_standings(&self) -> AppResult<Standings> {
        let mut season = self.as_of.year();
        log::info!("MLB: Fetching standings for {}", season);
        let mut records = self.fetch_season_records(season).await?;

        // Before opening day the new season has no records yet
        if records.is_empty() && self.as_of.month() <= 3 {
            season -= 1;
            log::info!("MLB: No standings yet, using the {} season", season);
            records = self.fetch_season_records(season).await?;
        }

        let mut rows: Vec<StandingsRow> = Vec::new();
        for record in records {
            let division = self.division_name(&record).await;
            rows.extend(self.mapper.map_division_record(record, &division));
        }
        Ok(self.mapper.standings(rows))
    }

    /// Resolve a division link to its name; any failure gives "Unknown Division"
    async fn division_name(&self, record: &DivisionRecord) -> String {
        let Some(division) = &record.division else {
            return UNKNOWN_DIVISION.to_string();
        };
        let Some(link) = division.link.as_deref().filter(|l| !l.is_empty()) else {
            return UNKNOWN_DIVISION.to_string();
        };

        let url = format!("{}{}", self.base_url, link);
        let key = format!("mlb_division_{}", division.id);
        match self.source.get_json::<DivisionsResponse>(&url, &key).await {
            Ok(response) => response
                .divisions
                .into_iter()
                .next()
                .map(|d| d.name)
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNKNOWN_DIVISION.to_string()),
            Err(e) => {
                log::warn!("MLB: Error getting division name: {}", e);
                UNKNOWN_DIVISION.to_string()
            }
        }
    }

    async fn fetch_team_schedule(&self, team_id: u32, date: NaiveDate) -> AppResult<ScheduleResponse> {
        let url = format!(
            "{}/api/v1/schedule?sportId=1&teamId={}&date={}",
            self.base_url,
            team_id,
            date.format("%Y-%m-%d")
        );
        self.source
            .get_json(&url, &format!("mlb_team_schedule_{}_{}", team_id, date))
            .await
    }

    pub async fn fetch_box_score(&self, team_id: u32, date: NaiveDate) -> AppResult<Option<BoxScore>> {
        let schedule = self.fetch_team_schedule(team_id, date).await?;
        let Some(game_pk) = self.mapper.find_final_game(&schedule, team_id) else {
            log::info!("MLB: No final game for team {} on {}", team_id, date);
            return Ok(None);
        };

        let url = format!("{}/api/v1/game/{}/boxscore", self.base_url, game_pk);
        log::info!("MLB: Fetching box score for game {}", game_pk);
        let response: BoxscoreResponse = self
            .source
            .get_json(&url, &format!("mlb_boxscore_{}", game_pk))
            .await?;
        Ok(Some(self.mapper.map_box_score(response, team_id)?))
    }

    pub async fn fetch_game_facts(&self, team_id: u32, date: NaiveDate) -> AppResult<Option<GameFacts>> {
        let schedule = self.fetch_team_schedule(team_id, date).await?;
        let Some(game_pk) = self.mapper.find_any_game(&schedule, team_id) else {
            log::info!("MLB: No game for team {} on {}", team_id, date);
            return Ok(None);
        };

        let url = format!("{}/api/v1.1/game/{}/feed/live", self.base_url, game_pk);
        log::info!("MLB: Fetching live feed for game {}", game_pk);
        let response: LiveFeedResponse = self
            .source
            .get_json(&url, &format!("mlb_live_feed_{}", game_pk))
            .await?;
        Ok(Some(self.mapper.map_game_facts(response)))
    }
}

#[async_trait]
impl DataProvider for MlbAdapter {
    fn league(&self) -> League {
        League::Mlb
    }

    async fn get_game_scores(&self, date: NaiveDate) -> Vec<GameScore> {
        self.fetch_game_scores(date).await.or_degrade("MLB: game scores")
    }

    async fn get_standings(&self) -> Standings {
        self.fetch_standings().await.or_degrade("MLB: standings")
    }

    async fn get_box_score(&self, team_id: u32, date: NaiveDate) -> Option<BoxScore> {
        self.fetch_box_score(team_id, date)
            .await
            .or_degrade("MLB: box score")
    }

    async fn get_game_summary(&self, team_id: u32, date: NaiveDate) -> Option<String> {
        let summarizer = self.summarizer.as_ref()?;
        let facts = self
            .fetch_game_facts(team_id, date)
            .await
            .or_degrade("MLB: game summary")?;
        Some(summarizer.summarize_game(League::Mlb, &facts).await)
    }
}
