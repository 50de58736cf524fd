use super::mapper::{NflMapper, CONFERENCES};
use super::models::{CoreStandingsResponse, TeamsResponse};
use crate::modules::provider::domain::entities::{GameScore, Standings, StandingsColumn};
use crate::modules::provider::infrastructure::adapters::espn::models::ScoreboardResponse;
use crate::modules::provider::infrastructure::source::DataSource;
use crate::modules::provider::traits::DataProvider;
use crate::shared::domain::value_objects::League;
use crate::shared::errors::{AppResult, ResultExt};
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Utc};
use std::collections::HashMap;

const NFL_SITE_URL: &str = "https://site.api.espn.com/apis/site/v2/sports/football/nfl";
const NFL_CORE_URL: &str = "https://sports.core.api.espn.com/v2/sports/football/leagues/nfl";

/// NFL provider over the ESPN site and core APIs.
///
/// Games are scheduled by week, so the target date only selects the week.
pub struct NflAdapter {
    source: DataSource,
    site_url: String,
    core_url: String,
    mapper: NflMapper,
    as_of: NaiveDate,
}

impl NflAdapter {
    pub fn new(source: DataSource) -> Self {
        Self {
            source: source.named("NFL"),
            site_url: NFL_SITE_URL.to_string(),
            core_url: NFL_CORE_URL.to_string(),
            mapper: NflMapper::new(),
            as_of: Utc::now().date_naive(),
        }
    }

    pub fn with_as_of(mut self, as_of: NaiveDate) -> Self {
        self.as_of = as_of;
        self
    }

    pub async fn fetch_game_scores(&self, date: NaiveDate) -> AppResult<Vec<GameScore>> {
        let season = season_for(date);
        let calendar_url = format!("{}/scoreboard?dates={}&seasontype=2", self.site_url, season);
        let calendar: ScoreboardResponse = self
            .source
            .get_json(&calendar_url, &format!("nfl_calendar_{}", season))
            .await?;

        let Some(week) = self.mapper.espn().find_week(&calendar, date) else {
            log::info!("NFL: {} is not inside any {} season week", date, season);
            return Ok(Vec::new());
        };

        log::info!(
            "NFL: Fetching scores for season {} type {} week {}",
            season,
            week.season_type,
            week.week
        );
        let url = format!(
            "{}/scoreboard?dates={}&seasontype={}&week={}",
            self.site_url, season, week.season_type, week.week
        );
        let board: ScoreboardResponse = self
            .source
            .get_json(
                &url,
                &format!("nfl_scoreboard_{}_{}_{}", season, week.season_type, week.week),
            )
            .await?;

        let games = self.mapper.espn().map_scoreboard(board)?;
        log::info!("NFL: Found {} final games", games.len());
        Ok(games)
    }

    async fn fetch_team_names(&self) -> HashMap<u32, String> {
        let url = format!("{}/teams", self.site_url);
        self.source
            .get_json::<TeamsResponse>(&url, "nfl_teams")
            .await
            .map(|response| self.mapper.team_names(response))
            .or_degrade("NFL: team names")
    }

    pub async fn fetch_standings(&self) -> AppResult<Standings> {
        let season = season_for(self.as_of);
        log::info!("NFL: Fetching standings for {}", season);
        let names = self.fetch_team_names().await;

        let mut rows = Vec::new();
        for (group_id, conference) in CONFERENCES {
            let url = format!(
                "{}/seasons/{}/types/2/groups/{}/standings/0",
                self.core_url, season, group_id
            );
            let key = format!("nfl_standings_{}_{}", season, group_id);
            // one conference failing still prints the other
            match self.source.get_json::<CoreStandingsResponse>(&url, &key).await {
                Ok(response) => rows.extend(self.mapper.map_conference(response, conference, &names)),
                Err(e) => log::warn!("NFL: Error fetching standings for {}: {}", conference, e),
            }
        }

        Ok(Standings::from_rows(
            self.mapper.espn().rank_by_win_pct(rows),
            vec![
                StandingsColumn::Wins,
                StandingsColumn::Losses,
                StandingsColumn::Ties,
                StandingsColumn::WinPct,
            ],
        ))
    }
}

/// January and February games belong to the previous season
pub fn season_for(date: NaiveDate) -> i32 {
    if date.month() <= 2 {
        date.year() - 1
    } else {
        date.year()
    }
}

#[async_trait]
impl DataProvider for NflAdapter {
    fn league(&self) -> League {
        League::Nfl
    }

    async fn get_game_scores(&self, date: NaiveDate) -> Vec<GameScore> {
        self.fetch_game_scores(date).await.or_degrade("NFL: game scores")
    }

    async fn get_standings(&self) -> Standings {
        self.fetch_standings().await.or_degrade("NFL: standings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_for() {
        assert_eq!(season_for(NaiveDate::from_ymd_opt(2025, 1, 12).unwrap()), 2024);
        assert_eq!(season_for(NaiveDate::from_ymd_opt(2025, 2, 9).unwrap()), 2024);
        assert_eq!(season_for(NaiveDate::from_ymd_opt(2024, 9, 8).unwrap()), 2024);
    }
}
