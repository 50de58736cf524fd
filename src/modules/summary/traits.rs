use crate::shared::errors::AppResult;
use async_trait::async_trait;

pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// One request to a text model
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: Option<String>,
    pub user: String,
    pub temperature: f32,
}

impl Prompt {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            system: None,
            user: user.into(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// A hosted language model that turns a prompt into text
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Backend name for logs ("Gemini", "Grok")
    fn name(&self) -> &'static str;

    async fn generate(&self, prompt: &Prompt) -> AppResult<String>;
}
