use super::reader::FeedReader;
use crate::modules::provider::domain::entities::SlottedArticle;
use crate::modules::provider::domain::services::ArticleSelector;
use crate::modules::provider::infrastructure::source::DataSource;
use crate::modules::provider::traits::ArticleProvider;
use crate::shared::errors::{AppResult, ResultExt};
use async_trait::async_trait;

pub const MLB_TRADE_RUMORS_FEED: &str = "https://feeds.feedburner.com/MlbTradeRumors";
pub const DEFAULT_FAVORITE_TEAMS: &[&str] = &["Phillies", "Padres", "Yankees"];
pub const DEFAULT_MAX_ARTICLES: usize = 4;

/// MLB Trade Rumors, with slots reserved for favorite teams
pub struct MlbTradeRumorsProvider {
    reader: FeedReader,
    selector: ArticleSelector,
}

impl MlbTradeRumorsProvider {
    pub fn new(source: DataSource, favorite_teams: Vec<String>, max_articles: usize) -> Self {
        let favorite_teams = if favorite_teams.is_empty() {
            DEFAULT_FAVORITE_TEAMS.iter().map(|t| t.to_string()).collect()
        } else {
            favorite_teams
        };
        Self {
            reader: FeedReader::new(
                source,
                "MLB Trade Rumors",
                MLB_TRADE_RUMORS_FEED,
                "mlb_trade_rumors_feed",
            ),
            selector: ArticleSelector::new(favorite_teams, max_articles),
        }
    }

    pub async fn fetch_articles(&self) -> AppResult<Vec<SlottedArticle>> {
        let entries = self.reader.fetch_articles().await?;
        let selected = self.selector.select(entries);
        log::info!("MLB Trade Rumors: Selected {} articles", selected.len());
        Ok(selected)
    }
}

#[async_trait]
impl ArticleProvider for MlbTradeRumorsProvider {
    fn source_name(&self) -> &str {
        "MLB Trade Rumors"
    }

    async fn get_articles(&self) -> Vec<SlottedArticle> {
        self.fetch_articles()
            .await
            .or_degrade("MLB Trade Rumors: articles")
    }
}
