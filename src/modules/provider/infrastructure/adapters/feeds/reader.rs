use super::mapper::FeedMapper;
use crate::modules::provider::domain::entities::Article;
use crate::modules::provider::infrastructure::source::DataSource;
use crate::shared::errors::AppResult;

/// Fetches one RSS/Atom feed through a data source
#[derive(Debug, Clone)]
pub struct FeedReader {
    source: DataSource,
    url: String,
    snapshot_key: String,
    mapper: FeedMapper,
}

impl FeedReader {
    pub fn new(source: DataSource, name: &str, url: &str, snapshot_key: &str) -> Self {
        Self {
            source: source.named(name),
            url: url.to_string(),
            snapshot_key: snapshot_key.to_string(),
            mapper: FeedMapper::new(),
        }
    }

    pub async fn fetch_articles(&self) -> AppResult<Vec<Article>> {
        let xml = self.source.get_feed(&self.url, &self.snapshot_key).await?;
        let articles = self.mapper.parse(&xml)?;
        log::info!("Feed: {} entries from {}", articles.len(), self.url);
        Ok(articles)
    }
}
