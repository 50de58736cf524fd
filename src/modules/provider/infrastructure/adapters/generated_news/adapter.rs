use super::parser::parse_story;
use super::prompts::{story_prompt, SYSTEM_PROMPT};
use crate::modules::provider::domain::entities::{Article, SlottedArticle};
use crate::modules::provider::traits::ArticleProvider;
use crate::modules::summary::{Prompt, TextGenerator};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::OnceCell;
use uuid::Uuid;

const STORY_TEMPERATURE: f32 = 0.5;

/// MLB stories written by a search-enabled model instead of read from a feed.
///
/// One pass makes `max_articles` sequential calls, each told which headlines
/// are already taken. The result is cached so every section sharing this
/// provider sees the same articles.
pub struct GeneratedMlbNewsProvider {
    generator: Option<Arc<dyn TextGenerator>>,
    favorite_teams: Vec<String>,
    max_articles: usize,
    cache: OnceCell<Vec<SlottedArticle>>,
}

impl GeneratedMlbNewsProvider {
    pub fn new(
        generator: Option<Arc<dyn TextGenerator>>,
        favorite_teams: Vec<String>,
        max_articles: usize,
    ) -> Self {
        Self {
            generator,
            favorite_teams,
            max_articles,
            cache: OnceCell::new(),
        }
    }

    async fn write_stories(&self, generator: &dyn TextGenerator) -> Vec<SlottedArticle> {
        let mut written: Vec<String> = Vec::new();
        let mut articles = Vec::new();

        for i in 0..self.max_articles {
            let featured = if i == 0 {
                self.favorite_teams.first().map(String::as_str)
            } else {
                None
            };
            let prompt = Prompt::new(story_prompt(featured, &written))
                .with_system(SYSTEM_PROMPT)
                .with_temperature(STORY_TEMPERATURE);

            let response = match generator.generate(&prompt).await {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("{}: Story {} failed: {}", generator.name(), i + 1, e);
                    continue;
                }
            };

            let (title, body) = parse_story(&response);
            if title.is_empty() {
                log::warn!("{}: Empty response for story {}, skipping", generator.name(), i + 1);
                continue;
            }

            log::info!("{}: Wrote story {} '{}'", generator.name(), i + 1, title);
            written.push(title.clone());
            articles.push(SlottedArticle {
                slot: i,
                article: Article {
                    id: format!("generated-mlb-{}", Uuid::new_v4()),
                    title,
                    summary: body,
                    link: String::new(),
                    published: Some(Utc::now()),
                },
            });
        }

        articles
    }
}

#[async_trait]
impl ArticleProvider for GeneratedMlbNewsProvider {
    fn source_name(&self) -> &str {
        "MLB News"
    }

    async fn get_articles(&self) -> Vec<SlottedArticle> {
        let Some(generator) = &self.generator else {
            log::warn!("Generated news: No Grok API key, no articles");
            return Vec::new();
        };
        self.cache
            .get_or_init(|| self.write_stories(generator.as_ref()))
            .await
            .clone()
    }

    fn needs_summary(&self) -> bool {
        false
    }
}
