/// Hand-written fakes for the provider and model seams
use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use screamsheet_lib::modules::provider::domain::entities::{
    Article, BoxScore, ForecastDay, GameScore, GoalieLine, SkaterLine, SlottedArticle, Standings,
    StandingsColumn, StandingsRow, WeatherIcon,
};
use screamsheet_lib::modules::provider::{ArticleProvider, DataProvider, ForecastProvider};
use screamsheet_lib::modules::summary::{Prompt, TextGenerator};
use screamsheet_lib::shared::domain::value_objects::League;
use screamsheet_lib::{AppError, AppResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub fn game(away: &str, home: &str, away_score: Option<u32>, home_score: Option<u32>) -> GameScore {
    GameScore {
        away_team: away.to_string(),
        home_team: home.to_string(),
        away_score,
        home_score,
        game_date: None,
        status: "OFF".to_string(),
    }
}

pub fn standings_row(team: &str, conference: &str, division: &str, rank: u32) -> StandingsRow {
    StandingsRow {
        team: team.to_string(),
        conference: Some(conference.to_string()),
        division: division.to_string(),
        wins: 10,
        losses: 5,
        ties: None,
        ot_losses: Some(2),
        points: Some(22),
        games_played: Some(17),
        win_pct: 0.647,
        rank,
    }
}

pub fn hockey_standings() -> Standings {
    Standings::from_rows(
        vec![
            standings_row("Philadelphia Flyers", "Eastern", "Metropolitan", 2),
            standings_row("New Jersey Devils", "Eastern", "Metropolitan", 1),
            standings_row("Winnipeg Jets", "Western", "Central", 1),
        ],
        vec![
            StandingsColumn::GamesPlayed,
            StandingsColumn::Wins,
            StandingsColumn::Losses,
            StandingsColumn::OtLosses,
            StandingsColumn::Points,
        ],
    )
}

pub fn article(title: &str, summary: &str) -> Article {
    Article {
        id: title.to_lowercase().replace(' ', "-"),
        title: title.to_string(),
        summary: summary.to_string(),
        link: format!("https://example.com/{}", title.to_lowercase().replace(' ', "-")),
        published: Utc.with_ymd_and_hms(2024, 7, 4, 12, 0, 0).single(),
    }
}

/// League data served from memory
pub struct FakeDataProvider {
    pub league: League,
    pub games: Vec<GameScore>,
    pub standings: Standings,
    pub box_score: Option<BoxScore>,
    pub summary: Option<String>,
    pub score_calls: AtomicUsize,
}

impl FakeDataProvider {
    pub fn new(league: League) -> Self {
        Self {
            league,
            games: Vec::new(),
            standings: Standings::default(),
            box_score: None,
            summary: None,
            score_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_games(mut self, games: Vec<GameScore>) -> Self {
        self.games = games;
        self
    }

    pub fn with_standings(mut self, standings: Standings) -> Self {
        self.standings = standings;
        self
    }

    pub fn with_hockey_box_score(mut self) -> Self {
        self.box_score = Some(BoxScore::Hockey {
            team: "Philadelphia Flyers".to_string(),
            skaters: vec![SkaterLine {
                name: "T. Konecny".to_string(),
                position: "R".to_string(),
                goals: 1,
                assists: 1,
                points: 2,
                shots: 4,
                penalty_minutes: 0,
            }],
            goalies: vec![GoalieLine {
                name: "S. Ersson".to_string(),
                saves: 24,
                shots_against: 30,
            }],
        });
        self
    }

    pub fn with_summary(mut self, summary: &str) -> Self {
        self.summary = Some(summary.to_string());
        self
    }
}

#[async_trait]
impl DataProvider for FakeDataProvider {
    fn league(&self) -> League {
        self.league
    }

    async fn get_game_scores(&self, _date: NaiveDate) -> Vec<GameScore> {
        self.score_calls.fetch_add(1, Ordering::SeqCst);
        self.games.clone()
    }

    async fn get_standings(&self) -> Standings {
        self.standings.clone()
    }

    async fn get_box_score(&self, _team_id: u32, _date: NaiveDate) -> Option<BoxScore> {
        self.box_score.clone()
    }

    async fn get_game_summary(&self, _team_id: u32, _date: NaiveDate) -> Option<String> {
        self.summary.clone()
    }
}

pub struct FakeArticleProvider {
    pub name: String,
    pub articles: Vec<SlottedArticle>,
    pub needs_summary: bool,
}

impl FakeArticleProvider {
    pub fn new(name: &str, articles: Vec<Article>) -> Self {
        Self {
            name: name.to_string(),
            articles: articles
                .into_iter()
                .enumerate()
                .map(|(slot, article)| SlottedArticle { slot, article })
                .collect(),
            needs_summary: false,
        }
    }

    pub fn needing_summary(mut self) -> Self {
        self.needs_summary = true;
        self
    }
}

#[async_trait]
impl ArticleProvider for FakeArticleProvider {
    fn source_name(&self) -> &str {
        &self.name
    }

    async fn get_articles(&self) -> Vec<SlottedArticle> {
        self.articles.clone()
    }

    fn needs_summary(&self) -> bool {
        self.needs_summary
    }
}

pub struct FakeForecast(pub Vec<ForecastDay>);

impl FakeForecast {
    pub fn sunny_week() -> Self {
        let day = |name: &str, location: &str| ForecastDay {
            day: name.to_string(),
            location: location.to_string(),
            description: "Sunny".to_string(),
            icon: WeatherIcon::DaySunny,
            high: Some(60),
            low: Some(45),
        };
        Self(vec![
            day("Today", "Bryn Mawr, PA"),
            day("Tuesday", ""),
            day("Wednesday", ""),
        ])
    }
}

#[async_trait]
impl ForecastProvider for FakeForecast {
    async fn get_forecast(&self) -> Vec<ForecastDay> {
        self.0.clone()
    }
}

/// Replies from a script, one response per call; errors once the script runs out
pub struct ScriptedGenerator {
    replies: Mutex<Vec<AppResult<String>>>,
    pub prompts: Mutex<Vec<Prompt>>,
}

impl ScriptedGenerator {
    pub fn new(replies: Vec<AppResult<String>>) -> Self {
        let mut replies = replies;
        replies.reverse();
        Self {
            replies: Mutex::new(replies),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn always(reply: &str, times: usize) -> Self {
        Self::new((0..times).map(|_| Ok(reply.to_string())).collect())
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().expect("prompt log").len()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    fn name(&self) -> &'static str {
        "Scripted"
    }

    async fn generate(&self, prompt: &Prompt) -> AppResult<String> {
        self.prompts.lock().expect("prompt log").push(prompt.clone());
        self.replies
            .lock()
            .expect("reply script")
            .pop()
            .unwrap_or_else(|| Err(AppError::LlmError("script exhausted".to_string())))
    }
}
