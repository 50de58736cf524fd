use super::reader::FeedReader;
use crate::modules::provider::domain::entities::SlottedArticle;
use crate::modules::provider::infrastructure::source::DataSource;
use crate::modules::provider::traits::ArticleProvider;
use crate::shared::errors::{AppResult, ResultExt};
use async_trait::async_trait;
use tokio::sync::OnceCell;

pub const FANGRAPHS_FEED: &str = "https://blogs.fangraphs.com/feed/";

/// FanGraphs blogs, newest first, unfiltered. Fetched once per provider.
pub struct FanGraphsProvider {
    reader: FeedReader,
    max_articles: usize,
    cache: OnceCell<Vec<SlottedArticle>>,
}

impl FanGraphsProvider {
    pub fn new(source: DataSource, max_articles: usize) -> Self {
        Self {
            reader: FeedReader::new(source, "FanGraphs", FANGRAPHS_FEED, "fangraphs_feed"),
            max_articles,
            cache: OnceCell::new(),
        }
    }

    pub async fn fetch_articles(&self) -> AppResult<Vec<SlottedArticle>> {
        let entries = self.reader.fetch_articles().await?;
        Ok(slot_in_order(entries, self.max_articles))
    }
}

/// First `max` entries, one per slot
pub(super) fn slot_in_order(
    entries: Vec<crate::modules::provider::domain::entities::Article>,
    max: usize,
) -> Vec<SlottedArticle> {
    entries
        .into_iter()
        .take(max)
        .enumerate()
        .map(|(slot, article)| SlottedArticle { slot, article })
        .collect()
}

#[async_trait]
impl ArticleProvider for FanGraphsProvider {
    fn source_name(&self) -> &str {
        "FanGraphs"
    }

    async fn get_articles(&self) -> Vec<SlottedArticle> {
        self.cache
            .get_or_init(|| async { self.fetch_articles().await.or_degrade("FanGraphs: articles") })
            .await
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel><title>FanGraphs Baseball</title>
<item><title>Projecting the Phillies Bullpen</title><link>https://example.com/1</link>
<description>Relievers.</description></item>
<item><title>The Best Sliders of 2024</title><link>https://example.com/2</link>
<description>Spin.</description></item>
<item><title>A Note on Park Factors</title><link>https://example.com/3</link>
<description>Parks.</description></item>
</channel></rss>"#;

    #[tokio::test]
    async fn test_first_entries_fetched_once() {
        let dir = tempfile::tempdir().unwrap();
        let feed_path = dir.path().join("fangraphs_feed.xml");
        std::fs::write(&feed_path, FEED).unwrap();

        let provider = FanGraphsProvider::new(DataSource::snapshot(dir.path()), 2);
        let first = provider.get_articles().await;
        let slots: Vec<(usize, &str)> = first
            .iter()
            .map(|s| (s.slot, s.article.title.as_str()))
            .collect();
        assert_eq!(
            slots,
            vec![(0, "Projecting the Phillies Bullpen"), (1, "The Best Sliders of 2024")]
        );

        std::fs::remove_file(&feed_path).unwrap();
        assert_eq!(provider.get_articles().await, first);
    }
}
