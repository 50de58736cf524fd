use super::models::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig};
use crate::modules::provider::infrastructure::http_client::JsonClient;
use crate::modules::summary::traits::{Prompt, TextGenerator};
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Google Gemini through the public REST endpoint
pub struct GeminiClient {
    client: JsonClient,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(client: &JsonClient, api_key: impl Into<String>) -> Self {
        Self {
            client: client.named("Gemini"),
            api_key: api_key.into(),
            model: GEMINI_MODEL.to_string(),
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn build_request(&self, prompt: &Prompt) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::text(Some("user"), &prompt.user)],
            system_instruction: prompt.system.as_deref().map(|s| Content::text(None, s)),
            generation_config: GenerationConfig {
                temperature: prompt.temperature,
            },
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn name(&self) -> &'static str {
        "Gemini"
    }

    async fn generate(&self, prompt: &Prompt) -> AppResult<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = serde_json::to_value(self.build_request(prompt))?;
        let response: GenerateContentResponse = self
            .client
            .post_json(&url, &body, &[("x-goog-api-key", self.api_key.as_str())])
            .await?;

        response
            .text()
            .ok_or_else(|| AppError::LlmError("Gemini returned no candidates".to_string()))
    }
}
