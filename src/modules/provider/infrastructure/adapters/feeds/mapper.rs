use crate::modules::provider::domain::entities::Article;
use crate::shared::errors::AppResult;
use crate::shared::utils::text::strip_html;
use feed_rs::model::{Entry, Feed};

#[derive(Debug, Clone, Default)]
pub struct FeedMapper;

impl FeedMapper {
    pub fn new() -> Self {
        Self
    }

    /// Parse an RSS or Atom document into articles, feed order preserved
    pub fn parse(&self, xml: &str) -> AppResult<Vec<Article>> {
        let feed = feed_rs::parser::parse(xml.as_bytes())?;
        Ok(self.map_feed(feed))
    }

    pub fn map_feed(&self, feed: Feed) -> Vec<Article> {
        feed.entries
            .into_iter()
            .map(|entry| self.map_entry(entry))
            .collect()
    }

    pub fn map_entry(&self, entry: Entry) -> Article {
        let summary = entry
            .summary
            .map(|text| text.content)
            .or_else(|| entry.content.and_then(|content| content.body))
            .unwrap_or_default();

        Article {
            id: entry.id,
            title: entry.title.map(|text| text.content).unwrap_or_default(),
            summary: strip_html(&summary),
            link: entry
                .links
                .into_iter()
                .next()
                .map(|link| link.href)
                .unwrap_or_default(),
            published: entry.published.or(entry.updated),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>MLB Trade Rumors</title>
    <link>https://www.mlbtraderumors.com</link>
    <description>News</description>
    <item>
      <title>Phillies Sign Reliever</title>
      <link>https://www.mlbtraderumors.com/phillies-sign-reliever</link>
      <guid>https://www.mlbtraderumors.com/?p=1</guid>
      <description><![CDATA[<p>The <b>Phillies</b> have signed a reliever.</p>]]></description>
      <pubDate>Mon, 24 Nov 2025 14:05:00 +0000</pubDate>
    </item>
    <item>
      <title>Padres Explore Trades</title>
      <link>https://www.mlbtraderumors.com/padres-explore-trades</link>
      <guid>https://www.mlbtraderumors.com/?p=2</guid>
      <description>San Diego is listening.</description>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_parse_rss_keeps_order_and_strips_markup() {
        let articles = FeedMapper::new().parse(RSS).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Phillies Sign Reliever");
        assert_eq!(articles[0].summary, "The Phillies have signed a reliever.");
        assert_eq!(
            articles[0].link,
            "https://www.mlbtraderumors.com/phillies-sign-reliever"
        );
        assert!(articles[0].published.is_some());
        assert_eq!(articles[1].title, "Padres Explore Trades");
        assert!(articles[1].published.is_none());
    }

    #[test]
    fn test_garbage_is_a_feed_error() {
        let result = FeedMapper::new().parse("not a feed");
        assert!(matches!(
            result,
            Err(crate::shared::errors::AppError::FeedError(_))
        ));
    }
}
