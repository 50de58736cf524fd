use super::adapters::{GeminiClient, GrokClient};
use crate::modules::provider::infrastructure::http_client::JsonClient;
use crate::modules::summary::traits::TextGenerator;
use crate::shared::config::Settings;
use crate::shared::domain::value_objects::LlmChoice;
use std::sync::Arc;

/// The text models that have API keys configured
#[derive(Clone, Default)]
pub struct LlmRegistry {
    gemini: Option<Arc<dyn TextGenerator>>,
    grok: Option<Arc<dyn TextGenerator>>,
}

impl LlmRegistry {
    pub fn new(gemini: Option<Arc<dyn TextGenerator>>, grok: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { gemini, grok }
    }

    pub fn from_settings(settings: &Settings, client: &JsonClient) -> Self {
        let gemini = settings
            .gemini_api_key
            .as_deref()
            .map(|key| Arc::new(GeminiClient::new(client, key)) as Arc<dyn TextGenerator>);
        let grok = settings
            .grok_api_key
            .as_deref()
            .map(|key| Arc::new(GrokClient::new(client, key)) as Arc<dyn TextGenerator>);

        if gemini.is_none() && grok.is_none() {
            log::warn!("LLM: No API keys configured, summaries disabled");
        }
        Self { gemini, grok }
    }

    /// The requested model, or the other one when it is not configured
    pub fn select(&self, choice: LlmChoice) -> Option<Arc<dyn TextGenerator>> {
        let (preferred, fallback) = match choice {
            LlmChoice::Gemini => (&self.gemini, &self.grok),
            LlmChoice::Grok => (&self.grok, &self.gemini),
        };
        let selected = preferred.as_ref().or(fallback.as_ref()).cloned();
        if let Some(generator) = &selected {
            log::debug!("LLM: Using {} (requested {})", generator.name(), choice);
        }
        selected
    }

    /// Grok only; live search is what makes generated news possible
    pub fn grok(&self) -> Option<Arc<dyn TextGenerator>> {
        self.grok.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.gemini.is_none() && self.grok.is_none()
    }
}
