use crate::modules::provider::infrastructure::adapters::feeds::mlb_trade_rumors::{
    DEFAULT_FAVORITE_TEAMS, DEFAULT_MAX_ARTICLES,
};
use crate::modules::provider::infrastructure::{
    DataSource, FanGraphsProvider, GeneratedMlbNewsProvider, JsonClient, MlbAdapter,
    MlbTradeRumorsProvider, NbaAdapter, NflAdapter, NhlAdapter, PlayersTribuneProvider,
    WeatherAdapter,
};
use crate::modules::provider::traits::{ArticleProvider, DataProvider, ForecastProvider};
use crate::modules::screamsheet::domain::{
    ArticleBlock, FeaturedTeam, NewsScreamsheet, SportsScreamsheet,
};
use crate::modules::screamsheet::traits::Screamsheet;
use crate::modules::summary::{LlmRegistry, Summarizer};
use crate::shared::config::Settings;
use crate::shared::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// Every screamsheet the factory can build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetKind {
    Mlb,
    Nhl,
    Nfl,
    Nba,
    MlbTradeRumors,
    PlayersTribune,
    FanGraphs,
    GeneratedMlbNews,
}

impl SheetKind {
    /// File name stem and CLI name
    pub fn slug(&self) -> &'static str {
        match self {
            SheetKind::Mlb => "mlb",
            SheetKind::Nhl => "nhl",
            SheetKind::Nfl => "nfl",
            SheetKind::Nba => "nba",
            SheetKind::MlbTradeRumors => "mlb_trade_rumors",
            SheetKind::PlayersTribune => "players_tribune",
            SheetKind::FanGraphs => "fangraphs",
            SheetKind::GeneratedMlbNews => "mlb_news",
        }
    }

    pub fn is_sports(&self) -> bool {
        matches!(
            self,
            SheetKind::Mlb | SheetKind::Nhl | SheetKind::Nfl | SheetKind::Nba
        )
    }
}

impl fmt::Display for SheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for SheetKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "mlb" => Ok(SheetKind::Mlb),
            "nhl" => Ok(SheetKind::Nhl),
            "nfl" => Ok(SheetKind::Nfl),
            "nba" => Ok(SheetKind::Nba),
            "mlb_trade_rumors" | "mlbtr" => Ok(SheetKind::MlbTradeRumors),
            "players_tribune" => Ok(SheetKind::PlayersTribune),
            "fangraphs" => Ok(SheetKind::FanGraphs),
            "mlb_news" | "generated_mlb_news" => Ok(SheetKind::GeneratedMlbNews),
            other => Err(AppError::InvalidInput(format!(
                "Unknown screamsheet '{}'",
                other
            ))),
        }
    }
}

/// Per-run options; anything unset falls back to settings and defaults
#[derive(Debug, Clone)]
pub struct SheetRequest {
    pub date: Option<NaiveDate>,
    pub output: Option<PathBuf>,
    pub team: Option<FeaturedTeam>,
    pub include_summary: bool,
    pub favorite_teams: Vec<String>,
    pub max_articles: Option<usize>,
    pub include_weather: bool,
}

impl Default for SheetRequest {
    fn default() -> Self {
        Self {
            date: None,
            output: None,
            team: None,
            include_summary: false,
            favorite_teams: Vec::new(),
            max_articles: None,
            include_weather: true,
        }
    }
}

/// Builds configured screamsheets from settings and a request
pub struct ScreamsheetFactory {
    settings: Settings,
    source: DataSource,
    llm: LlmRegistry,
    extension: &'static str,
}

impl ScreamsheetFactory {
    pub fn new(settings: Settings) -> AppResult<Self> {
        let client = JsonClient::from_settings(&settings)?;
        let source = DataSource::from_settings(&settings, client.clone());
        let llm = LlmRegistry::from_settings(&settings, &client);
        Ok(Self::with_parts(settings, source, llm))
    }

    pub fn with_parts(settings: Settings, source: DataSource, llm: LlmRegistry) -> Self {
        Self {
            settings,
            source,
            llm,
            extension: "pdf",
        }
    }

    /// Extension used for default output paths
    pub fn with_extension(mut self, extension: &'static str) -> Self {
        self.extension = extension;
        self
    }

    fn summarizer(&self) -> Option<Arc<Summarizer>> {
        self.llm
            .select(self.settings.llm)
            .map(|generator| Arc::new(Summarizer::new(generator)))
    }

    fn weather(&self, include: bool) -> Option<Arc<dyn ForecastProvider>> {
        include.then(|| {
            Arc::new(WeatherAdapter::new(
                self.source.clone(),
                self.settings.weather.clone(),
            )) as Arc<dyn ForecastProvider>
        })
    }

    /// `{output_dir}/{kind}_{date}.{ext}` unless the request names a path
    pub fn output_path(&self, kind: SheetKind, date: NaiveDate, request: &SheetRequest) -> PathBuf {
        request.output.clone().unwrap_or_else(|| {
            self.settings.output_dir.join(format!(
                "{}_{}.{}",
                kind.slug(),
                date.format("%Y%m%d"),
                self.extension
            ))
        })
    }

    fn sports_date(&self, request: &SheetRequest) -> NaiveDate {
        request.date.unwrap_or_else(|| self.settings.yesterday())
    }

    fn news_date(&self, request: &SheetRequest) -> NaiveDate {
        request.date.unwrap_or_else(|| self.settings.today())
    }

    fn sports(
        &self,
        kind: SheetKind,
        provider: Arc<dyn DataProvider>,
        date: NaiveDate,
        request: SheetRequest,
    ) -> SportsScreamsheet {
        let path = self.output_path(kind, date, &request);
        SportsScreamsheet::new(provider, date, path)
            .with_team(request.team)
            .with_summary(request.include_summary)
    }

    pub fn create_mlb(&self, request: SheetRequest) -> SportsScreamsheet {
        let date = self.sports_date(&request);
        let mut adapter = MlbAdapter::new(self.source.clone()).with_as_of(date);
        if request.include_summary {
            if let Some(summarizer) = self.summarizer() {
                adapter = adapter.with_summarizer(summarizer);
            }
        }
        self.sports(SheetKind::Mlb, Arc::new(adapter), date, request)
    }

    pub fn create_nhl(&self, request: SheetRequest) -> SportsScreamsheet {
        let date = self.sports_date(&request);
        let mut adapter = NhlAdapter::new(self.source.clone());
        if request.include_summary {
            if let Some(summarizer) = self.summarizer() {
                adapter = adapter.with_summarizer(summarizer);
            }
        }
        self.sports(SheetKind::Nhl, Arc::new(adapter), date, request)
    }

    pub fn create_nfl(&self, request: SheetRequest) -> SportsScreamsheet {
        let date = self.sports_date(&request);
        let adapter = NflAdapter::new(self.source.clone()).with_as_of(date);
        self.sports(SheetKind::Nfl, Arc::new(adapter), date, request)
    }

    pub fn create_nba(&self, request: SheetRequest) -> SportsScreamsheet {
        let date = self.sports_date(&request);
        let adapter = NbaAdapter::new(self.source.clone());
        self.sports(SheetKind::Nba, Arc::new(adapter), date, request)
    }

    fn news(
        &self,
        kind: SheetKind,
        provider: Arc<dyn ArticleProvider>,
        blocks: Vec<ArticleBlock>,
        request: SheetRequest,
    ) -> NewsScreamsheet {
        let date = self.news_date(&request);
        let path = self.output_path(kind, date, &request);
        NewsScreamsheet::new(provider, blocks, date, path)
            .with_weather(self.weather(request.include_weather))
            .with_summarizer(self.summarizer())
    }

    fn max_articles(request: &SheetRequest) -> usize {
        request.max_articles.unwrap_or(DEFAULT_MAX_ARTICLES)
    }

    /// Front page and back page, half the articles each
    fn split_blocks(front: &str, back: &str, max_articles: usize) -> Vec<ArticleBlock> {
        let first = max_articles.div_ceil(2);
        vec![
            ArticleBlock::new(front, 0, first),
            ArticleBlock::new(back, first, max_articles - first),
        ]
    }

    fn favorite_teams(request: &SheetRequest) -> Vec<String> {
        if request.favorite_teams.is_empty() {
            DEFAULT_FAVORITE_TEAMS.iter().map(|t| t.to_string()).collect()
        } else {
            request.favorite_teams.clone()
        }
    }

    pub fn create_mlb_trade_rumors(&self, request: SheetRequest) -> NewsScreamsheet {
        let max = Self::max_articles(&request);
        let provider =
            MlbTradeRumorsProvider::new(self.source.clone(), Self::favorite_teams(&request), max);
        let blocks = vec![ArticleBlock::new("Latest News", 0, max)];
        self.news(SheetKind::MlbTradeRumors, Arc::new(provider), blocks, request)
    }

    pub fn create_players_tribune(&self, request: SheetRequest) -> NewsScreamsheet {
        let max = Self::max_articles(&request);
        let mut provider = PlayersTribuneProvider::new(self.source.clone(), max);
        if let Some(summarizer) = self.summarizer() {
            provider = provider.with_summarizer(summarizer);
        }
        let blocks = Self::split_blocks("The Players' Tribune", "More Stories", max);
        self.news(SheetKind::PlayersTribune, Arc::new(provider), blocks, request)
    }

    pub fn create_fangraphs(&self, request: SheetRequest) -> NewsScreamsheet {
        let max = Self::max_articles(&request);
        let provider = FanGraphsProvider::new(self.source.clone(), max);
        let blocks = Self::split_blocks("FanGraphs Blogs", "More from FanGraphs", max);
        self.news(SheetKind::FanGraphs, Arc::new(provider), blocks, request)
    }

    pub fn create_generated_mlb_news(&self, request: SheetRequest) -> NewsScreamsheet {
        let max = Self::max_articles(&request);
        let provider =
            GeneratedMlbNewsProvider::new(self.llm.grok(), Self::favorite_teams(&request), max);
        let blocks = Self::split_blocks("MLB News", "More MLB News", max);
        self.news(SheetKind::GeneratedMlbNews, Arc::new(provider), blocks, request)
    }

    pub fn create(&self, kind: SheetKind, request: SheetRequest) -> Box<dyn Screamsheet> {
        match kind {
            SheetKind::Mlb => Box::new(self.create_mlb(request)),
            SheetKind::Nhl => Box::new(self.create_nhl(request)),
            SheetKind::Nfl => Box::new(self.create_nfl(request)),
            SheetKind::Nba => Box::new(self.create_nba(request)),
            SheetKind::MlbTradeRumors => Box::new(self.create_mlb_trade_rumors(request)),
            SheetKind::PlayersTribune => Box::new(self.create_players_tribune(request)),
            SheetKind::FanGraphs => Box::new(self.create_fangraphs(request)),
            SheetKind::GeneratedMlbNews => Box::new(self.create_generated_mlb_news(request)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factory() -> ScreamsheetFactory {
        let settings = Settings {
            output_dir: PathBuf::from("out"),
            ..Settings::default()
        };
        ScreamsheetFactory::with_parts(settings, DataSource::snapshot("snaps"), LlmRegistry::default())
    }

    fn on(date: &str) -> SheetRequest {
        SheetRequest {
            date: Some(date.parse().unwrap()),
            ..SheetRequest::default()
        }
    }

    #[test]
    fn test_sheet_kind_round_trips_through_slug() {
        for kind in [
            SheetKind::Mlb,
            SheetKind::Nhl,
            SheetKind::Nfl,
            SheetKind::Nba,
            SheetKind::MlbTradeRumors,
            SheetKind::PlayersTribune,
            SheetKind::FanGraphs,
            SheetKind::GeneratedMlbNews,
        ] {
            assert_eq!(kind.slug().parse::<SheetKind>().unwrap(), kind);
        }
        assert_eq!("mlb-trade-rumors".parse::<SheetKind>().unwrap(), SheetKind::MlbTradeRumors);
        assert!("cricket".parse::<SheetKind>().is_err());
    }

    #[test]
    fn test_default_output_path() {
        let sheet = factory().create_nhl(on("2024-11-23"));
        assert_eq!(sheet.output_path(), PathBuf::from("out/nhl_20241123.pdf").as_path());
        assert_eq!(sheet.title(), "NHL Screamsheet");

        let text = factory().with_extension("txt").create_fangraphs(on("2024-11-23"));
        assert_eq!(text.output_path(), PathBuf::from("out/fangraphs_20241123.txt").as_path());
    }

    #[test]
    fn test_news_title_uses_long_date() {
        let sheet = factory().create_mlb_trade_rumors(on("2025-07-04"));
        assert_eq!(sheet.title(), "MLB Trade Rumors - July 04, 2025");
    }

    #[test]
    fn test_sections_follow_request() {
        let mut request = on("2024-11-23");
        request.team = Some(FeaturedTeam {
            id: 4,
            name: "Flyers".to_string(),
        });
        request.include_summary = true;
        let titles: Vec<String> = factory()
            .create_nhl(request)
            .build_sections()
            .iter()
            .map(|s| s.title().to_string())
            .collect();
        assert_eq!(
            titles,
            vec![
                "NHL Game Scores",
                "NHL Standings",
                "Flyers Box Score",
                "Flyers Game Summary"
            ]
        );

        let mut request = on("2024-11-23");
        request.include_weather = false;
        let sheet = factory().create_players_tribune(request);
        let titles: Vec<String> = sheet
            .build_sections()
            .iter()
            .map(|s| s.title().to_string())
            .collect();
        assert_eq!(titles, vec!["The Players' Tribune", "More Stories"]);
    }
}
