use super::models::{ChatMessage, ChatRequest, ChatResponse};
use crate::modules::provider::infrastructure::http_client::JsonClient;
use crate::modules::summary::traits::{Prompt, TextGenerator};
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;

const GROK_BASE_URL: &str = "https://api.x.ai/v1";
pub const GROK_MODEL: &str = "grok-4-fast";

/// xAI Grok through its OpenAI-compatible API, live search enabled
pub struct GrokClient {
    client: JsonClient,
    api_key: String,
    model: String,
    base_url: String,
}

impl GrokClient {
    pub fn new(client: &JsonClient, api_key: impl Into<String>) -> Self {
        Self {
            client: client.named("Grok"),
            api_key: api_key.into(),
            model: GROK_MODEL.to_string(),
            base_url: GROK_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn build_request(&self, prompt: &Prompt) -> ChatRequest {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &prompt.system {
            messages.push(ChatMessage::new("system", system));
        }
        messages.push(ChatMessage::new("user", &prompt.user));

        ChatRequest {
            model: self.model.clone(),
            messages,
            temperature: prompt.temperature,
        }
    }
}

#[async_trait]
impl TextGenerator for GrokClient {
    fn name(&self) -> &'static str {
        "Grok"
    }

    async fn generate(&self, prompt: &Prompt) -> AppResult<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = serde_json::to_value(self.build_request(prompt))?;
        let auth = format!("Bearer {}", self.api_key);
        let headers = [
            ("Authorization", auth.as_str()),
            ("x-search-mode", "auto"),
        ];

        let response: ChatResponse = self.client.post_json(&url, &body, &headers).await?;
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::LlmError("Grok returned no choices".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_request_puts_system_first() {
        let http = JsonClient::new("test", "ua", Duration::from_secs(1)).unwrap();
        let client = GrokClient::new(&http, "key");
        let prompt = Prompt::new("Write a story")
            .with_system("You cover baseball")
            .with_temperature(0.5);

        let request = client.build_request(&prompt);
        assert_eq!(request.model, GROK_MODEL);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[1].content.as_deref(), Some("Write a story"));
        assert_eq!(request.temperature, 0.5);
    }

    #[test]
    fn test_response_parses_first_choice() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"TITLE: Hi"}}]}"#,
        )
        .unwrap();
        assert_eq!(response.choices[0].message.content.as_deref(), Some("TITLE: Hi"));
    }
}
