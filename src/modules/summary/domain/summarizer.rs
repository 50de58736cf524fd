use super::game_facts::GameFacts;
use super::prompts;
use crate::modules::provider::domain::entities::Article;
use crate::modules::summary::traits::{Prompt, TextGenerator};
use crate::shared::domain::value_objects::League;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::text::truncate_chars;
use crate::shared::utils::LogContext;
use std::sync::Arc;

pub const SUMMARY_FAILED: &str = "Summary generation failed.";
const ARTICLE_FALLBACK_CHARS: usize = 500;

/// Writes recaps, article summaries and titles through one text model.
///
/// Every public method except `generate_title` absorbs model failures into
/// printable fallback text.
pub struct Summarizer {
    generator: Arc<dyn TextGenerator>,
}

impl Summarizer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn summarize_game(&self, league: League, facts: &GameFacts) -> String {
        log::info!(
            "{}: Summarizing {} game {} at {}",
            self.generator.name(),
            league,
            facts.away_team,
            facts.home_team
        );
        let result = match prompts::game_prompt(league, facts) {
            Ok(text) => self.run(Prompt::new(text)).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(summary) => summary,
            Err(e) => {
                LogContext::error_with_context(&e, "Game summary failed");
                SUMMARY_FAILED.to_string()
            }
        }
    }

    /// Rewrites an article; falls back to the first 500 characters of its text
    pub async fn summarize_article(&self, article: &Article) -> String {
        match self.run(Prompt::new(prompts::article_prompt(article))).await {
            Ok(summary) => summary,
            Err(e) => {
                LogContext::error_with_context(&e, &format!("Summary of '{}' failed", article.title));
                truncate_chars(&article.summary, ARTICLE_FALLBACK_CHARS)
            }
        }
    }

    /// Short headline for an untitled article, quotes stripped
    pub async fn generate_title(&self, description: &str) -> AppResult<String> {
        let raw = self.run(Prompt::new(prompts::title_prompt(description))).await?;
        let title = raw
            .trim()
            .trim_matches(|c| c == '"' || c == '\'')
            .trim()
            .to_string();
        if title.is_empty() {
            return Err(AppError::LlmError("Model returned an empty title".to_string()));
        }
        Ok(title)
    }

    async fn run(&self, prompt: Prompt) -> AppResult<String> {
        let text = self.generator.generate(&prompt).await?;
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::LlmError(format!(
                "{} returned no text",
                self.generator.name()
            )));
        }
        Ok(text.to_string())
    }
}
