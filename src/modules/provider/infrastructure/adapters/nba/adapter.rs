use super::models::StandingsResponse;
use crate::modules::provider::domain::entities::{
    GameScore, Standings, StandingsColumn, StandingsRow,
};
use crate::modules::provider::infrastructure::adapters::espn::models::ScoreboardResponse;
use crate::modules::provider::infrastructure::adapters::espn::EspnMapper;
use crate::modules::provider::infrastructure::source::DataSource;
use crate::modules::provider::traits::DataProvider;
use crate::shared::domain::value_objects::League;
use crate::shared::errors::{AppResult, ResultExt};
use async_trait::async_trait;
use chrono::NaiveDate;

const NBA_SITE_URL: &str = "https://site.api.espn.com/apis/site/v2/sports/basketball/nba";
const NBA_STANDINGS_URL: &str = "https://site.api.espn.com/apis/v2/sports/basketball/nba/standings";

/// NBA provider over the ESPN site APIs
pub struct NbaAdapter {
    source: DataSource,
    site_url: String,
    standings_url: String,
    mapper: EspnMapper,
}

impl NbaAdapter {
    pub fn new(source: DataSource) -> Self {
        Self {
            source: source.named("NBA"),
            site_url: NBA_SITE_URL.to_string(),
            standings_url: NBA_STANDINGS_URL.to_string(),
            mapper: EspnMapper::new(),
        }
    }

    pub async fn fetch_game_scores(&self, date: NaiveDate) -> AppResult<Vec<GameScore>> {
        let url = format!("{}/scoreboard?dates={}", self.site_url, date.format("%Y%m%d"));
        log::info!("NBA: Fetching scores for {}", date);
        let board: ScoreboardResponse = self
            .source
            .get_json(&url, &format!("nba_scoreboard_{}", date))
            .await?;

        let games: Vec<GameScore> = self
            .mapper
            .map_scoreboard(board)?
            .into_iter()
            .map(|game| GameScore {
                status: "Final".to_string(),
                ..game
            })
            .collect();
        log::info!("NBA: Found {} final games for {}", games.len(), date);
        Ok(games)
    }

    pub async fn fetch_standings(&self) -> AppResult<Standings> {
        log::info!("NBA: Fetching standings");
        let response: StandingsResponse = self
            .source
            .get_json(&self.standings_url, "nba_standings")
            .await?;

        let rows: Vec<StandingsRow> = response
            .children
            .into_iter()
            .flat_map(|conference| {
                let name = conference.name;
                let mapper = &self.mapper;
                conference
                    .standings
                    .entries
                    .into_iter()
                    .map(move |entry| {
                        let stats = mapper.stat_map(&entry.stats);
                        let stat = |key: &str| stats.get(key).copied().unwrap_or(0.0);
                        StandingsRow {
                            team: entry.team.display_name,
                            conference: Some(name.clone()),
                            division: name.clone(),
                            wins: stat("wins") as u32,
                            losses: stat("losses") as u32,
                            ties: None,
                            ot_losses: None,
                            points: None,
                            games_played: None,
                            win_pct: stat("winPercent"),
                            rank: 0,
                        }
                    })
            })
            .collect();

        Ok(Standings::from_rows(
            self.mapper.rank_by_win_pct(rows),
            vec![
                StandingsColumn::Wins,
                StandingsColumn::Losses,
                StandingsColumn::WinPct,
            ],
        ))
    }
}

#[async_trait]
impl DataProvider for NbaAdapter {
    fn league(&self) -> League {
        League::Nba
    }

    async fn get_game_scores(&self, date: NaiveDate) -> Vec<GameScore> {
        self.fetch_game_scores(date).await.or_degrade("NBA: game scores")
    }

    async fn get_standings(&self) -> Standings {
        self.fetch_standings().await.or_degrade("NBA: standings")
    }
}
